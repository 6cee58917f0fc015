//! NativeValue: type-erased engine keyframe values.
//! All numeric types use f32, matching what composition engines accept.

use serde::{Deserialize, Serialize};

/// Coarse kind of a native keyframe value. Every compiled timeline carries
/// exactly one kind; engines use it to pick the matching keyframe animation type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeKind {
    Scalar,
    Vector2,
    Vector3,
    Quaternion,
    Color,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum NativeValue {
    /// Scalar float
    Scalar(f32),

    /// 2D vector
    Vector2([f32; 2]),

    /// 3D vector
    Vector3([f32; 3]),

    /// Quaternion (x, y, z, w)
    Quaternion([f32; 4]),

    /// RGBA color, each channel normalized to [0, 1]
    Color([f32; 4]),
}

impl NativeValue {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> NativeKind {
        match self {
            NativeValue::Scalar(_) => NativeKind::Scalar,
            NativeValue::Vector2(_) => NativeKind::Vector2,
            NativeValue::Vector3(_) => NativeKind::Vector3,
            NativeValue::Quaternion(_) => NativeKind::Quaternion,
            NativeValue::Color(_) => NativeKind::Color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(NativeValue::Scalar(1.0).kind(), NativeKind::Scalar);
        assert_eq!(NativeValue::Vector3([0.0; 3]).kind(), NativeKind::Vector3);
        assert_eq!(NativeValue::Color([1.0; 4]).kind(), NativeKind::Color);
    }

    #[test]
    fn serializes_with_type_and_data_tags() {
        let json = serde_json::to_value(NativeValue::Vector2([1.0, 2.0])).unwrap();
        assert_eq!(json["type"], "Vector2");
        assert_eq!(json["data"][1], 2.0);
    }
}
