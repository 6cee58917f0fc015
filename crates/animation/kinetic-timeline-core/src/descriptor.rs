//! Typed animation descriptors and the single build algorithm shared by every
//! value domain.
//!
//! A descriptor holds optional from/to values, explicit keyframes, timing and
//! easing overrides. Concrete animations differ only in their [`AnimationKind`]:
//! the channel they target and the function turning declared values into
//! native keyframe values.

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use crate::builder::TimelineBuilder;
use crate::compiled::{CompiledAnimation, DelayBehavior, RepeatOption};
use crate::config::AnimationDefaults;
use crate::easing::{EasingDescriptor, EasingMode, EasingType};
use crate::error::Result;
use crate::implicit::{seed_final_value, TransitionPlan};
use crate::keyframes::KeyframeSpec;
use crate::visual::VisualHandle;
use kinetic_value_core::KeyframeNative;

/// Target channel plus the declared-to-native conversion for one animation kind.
pub struct AnimationKind<V, K> {
    pub target: Cow<'static, str>,
    pub parse: fn(&V) -> K,
}

impl<V, K> AnimationKind<V, K> {
    pub const fn new(target: &'static str, parse: fn(&V) -> K) -> Self {
        Self {
            target: Cow::Borrowed(target),
            parse,
        }
    }

    /// Kind targeting a channel name only known at runtime.
    pub fn custom(target: impl Into<String>, parse: fn(&V) -> K) -> Self {
        Self {
            target: Cow::Owned(target.into()),
            parse,
        }
    }
}

impl<V, K> Clone for AnimationKind<V, K> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            parse: self.parse,
        }
    }
}

impl<V, K> fmt::Debug for AnimationKind<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationKind")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// A typed animation usable as an implicit transition.
#[derive(Clone, Debug)]
pub struct ImplicitAnimation<V, K> {
    pub from: Option<V>,
    pub to: Option<V>,
    pub keyframes: Vec<KeyframeSpec<V>>,
    pub delay: Option<Duration>,
    pub duration: Option<Duration>,
    pub easing_type: Option<EasingType>,
    pub easing_mode: Option<EasingMode>,
    /// Channel whose changes trigger this animation; `None` when it is only played directly.
    pub implicit_target: Option<String>,
    pub repeat: RepeatOption,
    pub delay_behavior: DelayBehavior,
    kind: AnimationKind<V, K>,
}

impl<V, K: KeyframeNative> ImplicitAnimation<V, K> {
    pub fn new(kind: AnimationKind<V, K>) -> Self {
        Self {
            from: None,
            to: None,
            keyframes: Vec::new(),
            delay: None,
            duration: None,
            easing_type: None,
            easing_mode: None,
            implicit_target: None,
            repeat: RepeatOption::default(),
            delay_behavior: DelayBehavior::default(),
            kind,
        }
    }

    pub fn with_from(mut self, value: V) -> Self {
        self.from = Some(value);
        self
    }

    pub fn with_to(mut self, value: V) -> Self {
        self.to = Some(value);
        self
    }

    pub fn with_keyframe(mut self, keyframe: KeyframeSpec<V>) -> Self {
        self.keyframes.push(keyframe);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_easing(mut self, easing_type: EasingType, easing_mode: EasingMode) -> Self {
        self.easing_type = Some(easing_type);
        self.easing_mode = Some(easing_mode);
        self
    }

    pub fn with_implicit_target(mut self, target: impl Into<String>) -> Self {
        self.implicit_target = Some(target.into());
        self
    }

    pub fn with_repeat(mut self, repeat: RepeatOption) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_delay_behavior(mut self, delay_behavior: DelayBehavior) -> Self {
        self.delay_behavior = delay_behavior;
        self
    }

    /// Channel the compiled timeline animates.
    pub fn target(&self) -> &str {
        &self.kind.target
    }

    pub fn kind(&self) -> &AnimationKind<V, K> {
        &self.kind
    }

    /// Declared `(to, from)` converted to native keyframe values.
    pub fn parsed_values(&self) -> (Option<K>, Option<K>) {
        let parse = self.kind.parse;
        (self.to.as_ref().map(parse), self.from.as_ref().map(parse))
    }

    /// Easing for the "to" keyframe: descriptor overrides, else configured defaults.
    pub fn resolved_easing(&self, defaults: &AnimationDefaults) -> EasingDescriptor {
        EasingDescriptor::new(
            self.easing_type.unwrap_or(defaults.easing_type),
            self.easing_mode.unwrap_or(defaults.easing_mode),
        )
    }

    /// Compile this descriptor for `visual`.
    ///
    /// Returns the compiled timeline and the implicit trigger channel, if any.
    pub fn build_animation(
        &self,
        visual: &dyn VisualHandle,
        defaults: &AnimationDefaults,
    ) -> Result<(CompiledAnimation, Option<String>)> {
        let mut builder = TimelineBuilder::<K>::new(
            self.kind.target.clone(),
            self.delay.unwrap_or(defaults.duration),
            self.duration.unwrap_or(defaults.duration),
        )
        .with_repeat(self.repeat)
        .with_delay_behavior(self.delay_behavior);

        let (to, from) = self.parsed_values();

        match TransitionPlan::for_inputs(to.is_some(), from.is_some(), self.keyframes.len()) {
            TransitionPlan::ToFinalValue => seed_final_value(&mut builder, defaults)?,
            TransitionPlan::Explicit => {
                // Each entry carries its own progress, so insertion order only
                // matters for ties at the same progress.
                if let Some(to) = to {
                    let easing = self.resolved_easing(defaults);
                    builder.keyframe(1.0, to, easing.easing_type, easing.easing_mode)?;
                }
                if let Some(from) = from {
                    let easing = EasingDescriptor::ABSOLUTE_DEFAULT;
                    builder.keyframe(0.0, from, easing.easing_type, easing.easing_mode)?;
                }
                for keyframe in &self.keyframes {
                    keyframe.append_to(&mut builder, self.kind.parse, defaults)?;
                }
            }
        }

        let (animation, _) = builder.compile(visual)?;
        Ok((animation, self.implicit_target.clone()))
    }
}
