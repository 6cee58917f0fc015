//! Implicit-transition policy.
//!
//! When a descriptor declares no from value, no to value and no keyframes, the
//! timeline animates toward whatever value the property is being set to. The
//! compiler never sees that value, so it emits a single expression keyframe at
//! progress 1.0 that the engine resolves when the transition starts.

use log::debug;

use crate::builder::TimelineBuilder;
use crate::config::AnimationDefaults;
use crate::error::Result;
use kinetic_value_core::KeyframeNative;

/// Engine expression for the value a property is transitioning to.
pub const FINAL_VALUE_EXPRESSION: &str = "this.FinalValue";

/// Which of the two mutually exclusive timeline shapes a descriptor produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionPlan {
    /// Nothing declared: animate toward the property's final value.
    ToFinalValue,
    /// Declared endpoints and/or keyframes drive the timeline.
    Explicit,
}

impl TransitionPlan {
    pub fn for_inputs(has_to: bool, has_from: bool, keyframe_count: usize) -> Self {
        if !has_to && !has_from && keyframe_count == 0 {
            TransitionPlan::ToFinalValue
        } else {
            TransitionPlan::Explicit
        }
    }
}

/// Insert the final-value keyframe with the configured default easing.
pub fn seed_final_value<K: KeyframeNative>(
    builder: &mut TimelineBuilder<K>,
    defaults: &AnimationDefaults,
) -> Result<()> {
    debug!(
        "{}: no values declared, animating toward '{FINAL_VALUE_EXPRESSION}'",
        builder.channel()
    );
    builder.expression_keyframe(
        1.0,
        FINAL_VALUE_EXPRESSION,
        defaults.easing_type,
        defaults.easing_mode,
    )?;
    Ok(())
}
