//! Process-wide animation defaults.
//!
//! Passed by reference into every compile call; nothing here is global or mutable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::{EasingMode, EasingType};

/// Defaults applied whenever a descriptor leaves timing or easing unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDefaults {
    /// Fallback for both duration and delay.
    #[serde(rename = "durationMs", with = "duration_ms")]
    pub duration: Duration,
    pub easing_type: EasingType,
    pub easing_mode: EasingMode,
}

impl AnimationDefaults {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            easing_type: EasingType::Default,
            easing_mode: EasingMode::EaseInOut,
        }
    }
}

/// Serde helper storing a [`Duration`] as integer milliseconds.
pub mod duration_ms {
    use std::time::Duration;

    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).map_err(S::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_conventions() {
        let d = AnimationDefaults::default();
        assert_eq!(d.duration, Duration::from_millis(400));
        assert_eq!(d.easing_type, EasingType::Default);
        assert_eq!(d.easing_mode, EasingMode::EaseInOut);
    }

    #[test]
    fn loads_from_json_with_millis() {
        let d: AnimationDefaults = serde_json::from_str(
            r#"{ "durationMs": 250, "easingType": "Cubic", "easingMode": "EaseOut" }"#,
        )
        .unwrap();
        assert_eq!(d.duration, Duration::from_millis(250));
        assert_eq!(d.easing_type, EasingType::Cubic);
        assert_eq!(d.easing_mode, EasingMode::EaseOut);
        let back = serde_json::to_value(d).unwrap();
        assert_eq!(back["durationMs"], 250);
    }

    #[test]
    fn durations_beyond_u64_millis_fail_to_serialize() {
        let d = AnimationDefaults {
            duration: Duration::MAX,
            ..AnimationDefaults::default()
        };
        assert!(serde_json::to_string(&d).is_err());

        let d = AnimationDefaults {
            duration: Duration::from_millis(u64::MAX),
            ..AnimationDefaults::default()
        };
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["durationMs"], u64::MAX);
    }
}
