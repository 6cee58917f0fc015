//! Timeline builder: accumulates normalized keyframes for one channel and
//! compiles them into a [`CompiledAnimation`].
//!
//! Contract:
//! - a builder is created fresh per compile and consumed by [`TimelineBuilder::compile`]
//! - appends are order-independent because each entry carries its own progress
//! - invalid progress or expressions fail at the append, never clamped
//! - duplicate progress is resolved at compile time, last append wins

use std::time::Duration;

use log::{debug, trace};

use crate::compiled::{CompiledAnimation, CompiledKeyframe, DelayBehavior, RepeatOption};
use crate::easing::{EasingDescriptor, EasingMode, EasingType};
use crate::error::{Result, TimelineError};
use crate::keyframes::{KeyframePayload, KeyframeSet, NormalizedKeyframe};
use crate::visual::VisualHandle;
use kinetic_value_core::KeyframeNative;

#[derive(Debug)]
pub struct TimelineBuilder<K> {
    channel: String,
    delay: Duration,
    duration: Duration,
    repeat: RepeatOption,
    delay_behavior: DelayBehavior,
    entries: KeyframeSet<K>,
}

impl<K: KeyframeNative> TimelineBuilder<K> {
    pub fn new(channel: impl Into<String>, delay: Duration, duration: Duration) -> Self {
        Self {
            channel: channel.into(),
            delay,
            duration,
            repeat: RepeatOption::default(),
            delay_behavior: DelayBehavior::default(),
            entries: KeyframeSet::new(),
        }
    }

    pub fn with_repeat(mut self, repeat: RepeatOption) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_delay_behavior(mut self, delay_behavior: DelayBehavior) -> Self {
        self.delay_behavior = delay_behavior;
        self
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a literal keyframe.
    pub fn keyframe(
        &mut self,
        progress: f32,
        value: K,
        easing_type: EasingType,
        easing_mode: EasingMode,
    ) -> Result<&mut Self> {
        self.check_progress(progress)?;
        trace!(
            "{}: keyframe {progress} = {value:?} ({easing_type:?}/{easing_mode:?})",
            self.channel
        );
        self.entries.insert(NormalizedKeyframe::new(
            progress,
            KeyframePayload::Literal(value),
            EasingDescriptor::new(easing_type, easing_mode),
        ));
        Ok(self)
    }

    /// Append a keyframe whose value the engine resolves at evaluation time.
    pub fn expression_keyframe(
        &mut self,
        progress: f32,
        expression: impl Into<String>,
        easing_type: EasingType,
        easing_mode: EasingMode,
    ) -> Result<&mut Self> {
        self.check_progress(progress)?;
        let expression = expression.into();
        self.check_expression(progress, &expression)?;
        trace!(
            "{}: expression keyframe {progress} = '{expression}' ({easing_type:?}/{easing_mode:?})",
            self.channel
        );
        self.entries.insert(NormalizedKeyframe::new(
            progress,
            KeyframePayload::Expression(expression),
            EasingDescriptor::new(easing_type, easing_mode),
        ));
        Ok(self)
    }

    /// Finalize the timeline. Returns the animation and the channel it targets.
    pub fn compile(self, visual: &dyn VisualHandle) -> Result<(CompiledAnimation, String)> {
        if self.entries.is_empty() {
            return Err(TimelineError::EmptyTimeline {
                channel: self.channel,
            });
        }

        let (normalized, overridden) = self.entries.into_normalized();
        if overridden > 0 {
            debug!(
                "{}: {overridden} keyframe(s) overridden by later entries at the same progress",
                self.channel
            );
        }

        let keyframes = normalized
            .into_iter()
            .map(|k| CompiledKeyframe {
                progress: k.progress,
                payload: k.payload.map(Into::into),
                easing: k.easing,
            })
            .collect::<Vec<_>>();

        debug!(
            "{}: compiled {} keyframe(s), delay {:?}, duration {:?}",
            self.channel,
            keyframes.len(),
            self.delay,
            self.duration
        );

        let animation = CompiledAnimation {
            target: self.channel.clone(),
            visual: visual.visual_id(),
            kind: K::KIND,
            delay: self.delay,
            duration: self.duration,
            repeat: self.repeat,
            delay_behavior: self.delay_behavior,
            keyframes,
        };
        Ok((animation, self.channel))
    }

    fn check_progress(&self, progress: f32) -> Result<()> {
        // Also rejects NaN.
        if !(0.0..=1.0).contains(&progress) {
            return Err(TimelineError::ProgressOutOfRange {
                channel: self.channel.clone(),
                progress,
            });
        }
        Ok(())
    }

    fn check_expression(&self, progress: f32, expression: &str) -> Result<()> {
        if expression.trim().is_empty() {
            return Err(TimelineError::EmptyExpression {
                channel: self.channel.clone(),
                progress,
            });
        }
        let malformed = |reason| TimelineError::MalformedExpression {
            channel: self.channel.clone(),
            expression: expression.to_string(),
            reason,
        };
        if expression.chars().any(char::is_control) {
            return Err(malformed("control character"));
        }
        let mut open: Vec<char> = Vec::new();
        for c in expression.chars() {
            match c {
                '(' | '[' => open.push(c),
                ')' if open.pop() != Some('(') => return Err(malformed("unbalanced ')'")),
                ']' if open.pop() != Some('[') => return Err(malformed("unbalanced ']'")),
                _ => {}
            }
        }
        if !open.is_empty() {
            return Err(malformed("unclosed bracket"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::VisualId;
    use kinetic_value_core::{NativeKind, NativeValue, Vector3};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn compile_sorts_by_progress() {
        let mut b = TimelineBuilder::<f32>::new("Opacity", ms(0), ms(300));
        b.keyframe(1.0, 1.0, EasingType::Linear, EasingMode::EaseOut)
            .unwrap()
            .keyframe(0.0, 0.0, EasingType::Linear, EasingMode::EaseOut)
            .unwrap()
            .keyframe(0.3, 0.7, EasingType::Linear, EasingMode::EaseOut)
            .unwrap();
        let (anim, channel) = b.compile(&VisualId(7)).unwrap();
        assert_eq!(channel, "Opacity");
        assert_eq!(anim.visual, VisualId(7));
        assert_eq!(anim.kind, NativeKind::Scalar);
        assert_eq!(anim.progresses(), vec![0.0, 0.3, 1.0]);
        assert_eq!(anim.duration, ms(300));
    }

    #[test]
    fn rejects_progress_outside_unit_range() {
        let mut b = TimelineBuilder::<f32>::new("Opacity", ms(0), ms(300));
        for bad in [-0.1, 1.0001, f32::NAN, f32::INFINITY] {
            let err = b
                .keyframe(bad, 0.0, EasingType::Default, EasingMode::EaseOut)
                .unwrap_err();
            assert!(matches!(err, TimelineError::ProgressOutOfRange { .. }));
        }
        assert!(b.is_empty());
    }

    #[test]
    fn rejects_malformed_expressions() {
        let mut b = TimelineBuilder::<Vector3>::new("Offset", ms(0), ms(300));
        let empty = b
            .expression_keyframe(1.0, "  ", EasingType::Default, EasingMode::EaseOut)
            .unwrap_err();
        assert!(matches!(empty, TimelineError::EmptyExpression { .. }));
        for bad in ["this.FinalValue)", "Vector3(1, 2", "a]", "this.\nFinalValue"] {
            let err = b
                .expression_keyframe(0.5, bad, EasingType::Default, EasingMode::EaseOut)
                .unwrap_err();
            assert!(
                matches!(err, TimelineError::MalformedExpression { .. }),
                "{bad:?} should be malformed"
            );
        }
        b.expression_keyframe(
            0.5,
            "Vector3(this.StartingValue.X, [1][0], 0)",
            EasingType::Default,
            EasingMode::EaseOut,
        )
        .unwrap();
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn empty_builder_does_not_compile() {
        let b = TimelineBuilder::<f32>::new("Opacity", ms(0), ms(300));
        let err = b.compile(&VisualId(1)).unwrap_err();
        assert_eq!(
            err,
            TimelineError::EmptyTimeline {
                channel: "Opacity".into()
            }
        );
    }

    #[test]
    fn duplicate_progress_resolves_to_last_append() {
        let mut b = TimelineBuilder::<f32>::new("Opacity", ms(0), ms(300));
        b.keyframe(1.0, 1.0, EasingType::Cubic, EasingMode::EaseIn)
            .unwrap();
        b.expression_keyframe(1.0, "this.FinalValue", EasingType::Sine, EasingMode::EaseOut)
            .unwrap();
        let (anim, _) = b.compile(&VisualId(1)).unwrap();
        assert_eq!(anim.keyframes.len(), 1);
        assert_eq!(
            anim.keyframes[0].payload,
            KeyframePayload::<NativeValue>::Expression("this.FinalValue".into())
        );
        assert_eq!(anim.keyframes[0].easing.easing_type, EasingType::Sine);
    }

    #[test]
    fn carries_repeat_and_delay_behavior() {
        let mut b = TimelineBuilder::<f32>::new("Opacity", ms(50), ms(300))
            .with_repeat(RepeatOption::Forever)
            .with_delay_behavior(DelayBehavior::SetInitialValueBeforeDelay);
        b.keyframe(1.0, 1.0, EasingType::Default, EasingMode::EaseOut)
            .unwrap();
        let (anim, _) = b.compile(&VisualId(1)).unwrap();
        assert_eq!(anim.repeat, RepeatOption::Forever);
        assert_eq!(anim.delay, ms(50));
        assert_eq!(
            anim.delay_behavior,
            DelayBehavior::SetInitialValueBeforeDelay
        );
    }
}
