//! Error types for timeline compilation.

use thiserror::Error;

/// Precondition violations surfaced while building or compiling a timeline.
///
/// Underspecified descriptors and duplicate progress values are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("keyframe progress {progress} on '{channel}' is outside [0, 1]")]
    ProgressOutOfRange { channel: String, progress: f32 },

    #[error("empty expression at progress {progress} on '{channel}'")]
    EmptyExpression { channel: String, progress: f32 },

    #[error("malformed expression '{expression}' on '{channel}': {reason}")]
    MalformedExpression {
        channel: String,
        expression: String,
        reason: &'static str,
    },

    #[error("timeline for '{channel}' has no keyframes")]
    EmptyTimeline { channel: String },
}

impl TimelineError {
    /// Channel the failing timeline targets.
    pub fn channel(&self) -> &str {
        match self {
            Self::ProgressOutOfRange { channel, .. }
            | Self::EmptyExpression { channel, .. }
            | Self::MalformedExpression { channel, .. }
            | Self::EmptyTimeline { channel } => channel,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimelineError>;
