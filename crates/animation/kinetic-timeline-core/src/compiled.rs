//! Compiled animations: the immutable output handed to the render engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::{EasingDescriptor, EasingFunction};
use crate::keyframes::KeyframePayload;
use crate::visual::VisualId;
use kinetic_value_core::{NativeKind, NativeValue};

/// How many times the engine plays the timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatOption {
    Count(u32),
    Forever,
}

impl Default for RepeatOption {
    fn default() -> Self {
        RepeatOption::Count(1)
    }
}

/// Whether the first keyframe is applied before or after the delay elapses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayBehavior {
    #[default]
    SetInitialValueAfterDelay,
    SetInitialValueBeforeDelay,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompiledKeyframe {
    pub progress: f32,
    pub payload: KeyframePayload<NativeValue>,
    pub easing: EasingDescriptor,
}

impl CompiledKeyframe {
    /// Engine-native easing for the segment arriving at this keyframe.
    pub fn easing_function(&self) -> EasingFunction {
        self.easing.resolve()
    }

    pub fn value(&self) -> Option<&NativeValue> {
        self.payload.literal()
    }
}

/// A normalized keyframe timeline bound to one channel of one visual.
///
/// Keyframes are strictly ascending by progress; no two share a progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledAnimation {
    pub target: String,
    pub visual: VisualId,
    pub kind: NativeKind,
    #[serde(rename = "delayMs", with = "crate::config::duration_ms")]
    pub delay: Duration,
    #[serde(rename = "durationMs", with = "crate::config::duration_ms")]
    pub duration: Duration,
    pub repeat: RepeatOption,
    pub delay_behavior: DelayBehavior,
    pub keyframes: Vec<CompiledKeyframe>,
}

impl CompiledAnimation {
    /// Keyframe at exactly `progress`, if any.
    pub fn keyframe_at(&self, progress: f32) -> Option<&CompiledKeyframe> {
        self.keyframes.iter().find(|k| k.progress == progress)
    }

    pub fn progresses(&self) -> Vec<f32> {
        self.keyframes.iter().map(|k| k.progress).collect()
    }

    /// True when any keyframe defers its value to the engine.
    pub fn has_expressions(&self) -> bool {
        self.keyframes
            .iter()
            .any(|k| matches!(k.payload, KeyframePayload::Expression(_)))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
