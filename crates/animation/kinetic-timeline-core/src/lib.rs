//! Kinetic Timeline Core (engine-agnostic)
//!
//! Compiles declarative, typed implicit animations into normalized keyframe
//! timelines. A descriptor ([`ImplicitAnimation`]) holds optional from/to values,
//! explicit keyframes keyed by progress in [0, 1], timing and easing overrides.
//! [`ImplicitAnimation::build_animation`] feeds them through a fresh
//! [`TimelineBuilder`], falls back to an "animate toward the final value"
//! expression keyframe when nothing was declared, and returns an immutable
//! [`CompiledAnimation`] for the render engine.

pub mod builder;
pub mod compiled;
pub mod config;
pub mod definition;
pub mod descriptor;
pub mod easing;
pub mod error;
pub mod implicit;
pub mod keyframes;
pub mod kinds;
pub mod set;
pub mod visual;

// Re-exports for consumers (engine adapters)
pub use builder::TimelineBuilder;
pub use compiled::{CompiledAnimation, CompiledKeyframe, DelayBehavior, RepeatOption};
pub use config::AnimationDefaults;
pub use definition::{parse_animation_set_json, DefinitionError};
pub use descriptor::{AnimationKind, ImplicitAnimation};
pub use easing::{ControlPoint, EasingDescriptor, EasingFunction, EasingMode, EasingType};
pub use error::{Result, TimelineError};
pub use implicit::{TransitionPlan, FINAL_VALUE_EXPRESSION};
pub use keyframes::{KeyframePayload, KeyframeSet, KeyframeSpec, KeyframeValue, NormalizedKeyframe};
pub use kinetic_value_core::{NativeKind, NativeValue};
pub use set::{ImplicitAnimationCollection, ImplicitAnimationSet, ImplicitTimeline};
pub use visual::{VisualHandle, VisualId};
