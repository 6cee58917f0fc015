//! Keyframe model: author-facing keyframe specs and the normalized keyframe set.
//!
//! Model:
//! - Every keyframe carries its own normalized progress in [0, 1], so insertion
//!   order never decides placement.
//! - Normalization stable-sorts by progress; among entries sharing a progress the
//!   last appended one survives (last-write-wins, no merging).

use serde::{Deserialize, Serialize};

use crate::builder::TimelineBuilder;
use crate::config::AnimationDefaults;
use crate::easing::{EasingDescriptor, EasingMode, EasingType};
use crate::error::Result;
use kinetic_value_core::KeyframeNative;

/// Keyframe payload: a literal baked at compile time, or an expression the
/// engine resolves at evaluation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum KeyframePayload<K> {
    Literal(K),
    Expression(String),
}

impl<K> KeyframePayload<K> {
    pub fn map<T>(self, f: impl FnOnce(K) -> T) -> KeyframePayload<T> {
        match self {
            KeyframePayload::Literal(v) => KeyframePayload::Literal(f(v)),
            KeyframePayload::Expression(e) => KeyframePayload::Expression(e),
        }
    }

    pub fn literal(&self) -> Option<&K> {
        match self {
            KeyframePayload::Literal(v) => Some(v),
            KeyframePayload::Expression(_) => None,
        }
    }

    pub fn expression(&self) -> Option<&str> {
        match self {
            KeyframePayload::Literal(_) => None,
            KeyframePayload::Expression(e) => Some(e),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedKeyframe<K> {
    pub progress: f32,
    pub payload: KeyframePayload<K>,
    pub easing: EasingDescriptor,
}

impl<K> NormalizedKeyframe<K> {
    pub fn new(progress: f32, payload: KeyframePayload<K>, easing: EasingDescriptor) -> Self {
        // Fold -0.0 into 0.0 so both sort and compare as the same position.
        let progress = if progress == 0.0 { 0.0 } else { progress };
        Self {
            progress,
            payload,
            easing,
        }
    }
}

/// Append-ordered keyframe collection.
#[derive(Clone, Debug)]
pub struct KeyframeSet<K> {
    entries: Vec<NormalizedKeyframe<K>>,
}

impl<K> Default for KeyframeSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyframeSet<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, keyframe: NormalizedKeyframe<K>) {
        self.entries.push(keyframe);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ascending by progress with one entry per distinct progress.
    /// Returns the normalized entries and how many duplicates were overridden.
    pub fn into_normalized(self) -> (Vec<NormalizedKeyframe<K>>, usize) {
        let mut entries = self.entries;
        // Stable: equal progress keeps append order, so the last one is the winner.
        entries.sort_by(|a, b| a.progress.total_cmp(&b.progress));

        let mut out: Vec<NormalizedKeyframe<K>> = Vec::with_capacity(entries.len());
        let mut overridden = 0;
        for entry in entries {
            match out.last_mut() {
                Some(last) if last.progress == entry.progress => {
                    *last = entry;
                    overridden += 1;
                }
                _ => out.push(entry),
            }
        }
        (out, overridden)
    }
}

/// Declared keyframe value.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyframeValue<V> {
    Literal(V),
    Expression(String),
}

/// An author-declared keyframe. Absent easing falls back to the configured defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeSpec<V> {
    pub progress: f32,
    pub value: KeyframeValue<V>,
    pub easing_type: Option<EasingType>,
    pub easing_mode: Option<EasingMode>,
}

impl<V> KeyframeSpec<V> {
    pub fn new(progress: f32, value: V) -> Self {
        Self {
            progress,
            value: KeyframeValue::Literal(value),
            easing_type: None,
            easing_mode: None,
        }
    }

    pub fn expression(progress: f32, expression: impl Into<String>) -> Self {
        Self {
            progress,
            value: KeyframeValue::Expression(expression.into()),
            easing_type: None,
            easing_mode: None,
        }
    }

    pub fn with_easing(mut self, easing_type: EasingType, easing_mode: EasingMode) -> Self {
        self.easing_type = Some(easing_type);
        self.easing_mode = Some(easing_mode);
        self
    }

    /// Copy this keyframe into `builder`, converting literals with `parse`.
    pub fn append_to<K: KeyframeNative>(
        &self,
        builder: &mut TimelineBuilder<K>,
        parse: fn(&V) -> K,
        defaults: &AnimationDefaults,
    ) -> Result<()> {
        let easing_type = self.easing_type.unwrap_or(defaults.easing_type);
        let easing_mode = self.easing_mode.unwrap_or(defaults.easing_mode);
        match &self.value {
            KeyframeValue::Literal(v) => {
                builder.keyframe(self.progress, parse(v), easing_type, easing_mode)?;
            }
            KeyframeValue::Expression(e) => {
                builder.expression_keyframe(self.progress, e, easing_type, easing_mode)?;
            }
        }
        Ok(())
    }
}
