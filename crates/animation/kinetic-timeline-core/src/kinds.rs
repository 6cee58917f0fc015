//! Concrete animation kinds. Each one is a target channel plus a value domain codec.

use kinetic_value_core::{
    Color, ColorDomain, ColorF, Quaternion, QuaternionDomain, ScalarDomain, ValueDomain, Vector2,
    Vector2Domain, Vector3, Vector3Domain,
};

use crate::descriptor::{AnimationKind, ImplicitAnimation};

pub type ScalarAnimation = ImplicitAnimation<f32, f32>;
pub type Vector2Animation = ImplicitAnimation<[f32; 2], Vector2>;
pub type Vector3Animation = ImplicitAnimation<[f32; 3], Vector3>;
pub type QuaternionAnimation = ImplicitAnimation<[f32; 4], Quaternion>;
pub type ColorAnimation = ImplicitAnimation<Color, ColorF>;

pub const OPACITY: AnimationKind<f32, f32> =
    AnimationKind::new("Opacity", ScalarDomain::to_native);
/// Rotation in radians.
pub const ROTATION: AnimationKind<f32, f32> =
    AnimationKind::new("RotationAngle", ScalarDomain::to_native);
pub const ROTATION_IN_DEGREES: AnimationKind<f32, f32> =
    AnimationKind::new("RotationAngleInDegrees", ScalarDomain::to_native);
pub const TRANSLATION: AnimationKind<[f32; 3], Vector3> =
    AnimationKind::new("Translation", Vector3Domain::to_native);
pub const OFFSET: AnimationKind<[f32; 3], Vector3> =
    AnimationKind::new("Offset", Vector3Domain::to_native);
pub const SCALE: AnimationKind<[f32; 3], Vector3> =
    AnimationKind::new("Scale", Vector3Domain::to_native);
pub const CENTER_POINT: AnimationKind<[f32; 3], Vector3> =
    AnimationKind::new("CenterPoint", Vector3Domain::to_native);
pub const SIZE: AnimationKind<[f32; 2], Vector2> =
    AnimationKind::new("Size", Vector2Domain::to_native);
pub const ANCHOR_POINT: AnimationKind<[f32; 2], Vector2> =
    AnimationKind::new("AnchorPoint", Vector2Domain::to_native);
pub const ORIENTATION: AnimationKind<[f32; 4], Quaternion> =
    AnimationKind::new("Orientation", QuaternionDomain::to_native);
pub const COLOR: AnimationKind<Color, ColorF> =
    AnimationKind::new("Color", ColorDomain::to_native);

pub fn opacity() -> ScalarAnimation {
    ImplicitAnimation::new(OPACITY)
}

pub fn rotation() -> ScalarAnimation {
    ImplicitAnimation::new(ROTATION)
}

pub fn rotation_in_degrees() -> ScalarAnimation {
    ImplicitAnimation::new(ROTATION_IN_DEGREES)
}

pub fn translation() -> Vector3Animation {
    ImplicitAnimation::new(TRANSLATION)
}

pub fn offset() -> Vector3Animation {
    ImplicitAnimation::new(OFFSET)
}

pub fn scale() -> Vector3Animation {
    ImplicitAnimation::new(SCALE)
}

pub fn center_point() -> Vector3Animation {
    ImplicitAnimation::new(CENTER_POINT)
}

pub fn size() -> Vector2Animation {
    ImplicitAnimation::new(SIZE)
}

pub fn anchor_point() -> Vector2Animation {
    ImplicitAnimation::new(ANCHOR_POINT)
}

pub fn orientation() -> QuaternionAnimation {
    ImplicitAnimation::new(ORIENTATION)
}

pub fn color() -> ColorAnimation {
    ImplicitAnimation::new(COLOR)
}
