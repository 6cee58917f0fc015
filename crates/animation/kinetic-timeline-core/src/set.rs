//! Implicit animation sets: several typed animations attached to one visual.
//!
//! A set compiles either into a flat group (played together, e.g. on show/hide)
//! or into an implicit collection keyed by trigger channel, where the trigger is
//! an animation's implicit target or, when it has none, the channel it animates.

use indexmap::IndexMap;
use log::debug;

use crate::compiled::CompiledAnimation;
use crate::config::AnimationDefaults;
use crate::descriptor::ImplicitAnimation;
use crate::error::Result;
use crate::visual::VisualHandle;
use kinetic_value_core::KeyframeNative;

/// Object-safe view of a typed animation that can be compiled as an implicit transition.
pub trait ImplicitTimeline: Send + Sync {
    fn build_animation(
        &self,
        visual: &dyn VisualHandle,
        defaults: &AnimationDefaults,
    ) -> Result<(CompiledAnimation, Option<String>)>;
}

impl<V, K> ImplicitTimeline for ImplicitAnimation<V, K>
where
    V: Send + Sync,
    K: KeyframeNative + Send + Sync,
{
    fn build_animation(
        &self,
        visual: &dyn VisualHandle,
        defaults: &AnimationDefaults,
    ) -> Result<(CompiledAnimation, Option<String>)> {
        ImplicitAnimation::build_animation(self, visual, defaults)
    }
}

/// Compiled animations grouped by trigger channel, in first-seen order.
pub type ImplicitAnimationCollection = IndexMap<String, Vec<CompiledAnimation>>;

#[derive(Default)]
pub struct ImplicitAnimationSet {
    animations: Vec<Box<dyn ImplicitTimeline>>,
}

impl ImplicitAnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, animation: impl ImplicitTimeline + 'static) {
        self.animations.push(Box::new(animation));
    }

    pub fn with(mut self, animation: impl ImplicitTimeline + 'static) -> Self {
        self.push(animation);
        self
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Every animation compiled, in insertion order.
    pub fn animation_group(
        &self,
        visual: &dyn VisualHandle,
        defaults: &AnimationDefaults,
    ) -> Result<Vec<CompiledAnimation>> {
        self.animations
            .iter()
            .map(|a| a.build_animation(visual, defaults).map(|(anim, _)| anim))
            .collect()
    }

    /// Animations grouped under the channel whose change triggers them.
    pub fn implicit_collection(
        &self,
        visual: &dyn VisualHandle,
        defaults: &AnimationDefaults,
    ) -> Result<ImplicitAnimationCollection> {
        let mut collection = ImplicitAnimationCollection::new();
        for animation in &self.animations {
            let (compiled, target) = animation.build_animation(visual, defaults)?;
            let trigger = target.unwrap_or_else(|| compiled.target.clone());
            debug!("implicit '{}' triggered by '{trigger}'", compiled.target);
            collection.entry(trigger).or_default().push(compiled);
        }
        Ok(collection)
    }
}

impl std::fmt::Debug for ImplicitAnimationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImplicitAnimationSet")
            .field("len", &self.animations.len())
            .finish()
    }
}
