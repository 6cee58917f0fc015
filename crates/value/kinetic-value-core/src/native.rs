//! Engine-native keyframe types.
//!
//! These mirror what a composition engine stores per keyframe. Each one maps to
//! exactly one [`NativeKind`], so a timeline built over a single native type is
//! always homogeneous.

use serde::{Deserialize, Serialize};

use crate::value::{NativeKind, NativeValue};

/// A value a timeline builder can store as a literal keyframe.
pub trait KeyframeNative: Copy + std::fmt::Debug + PartialEq + Into<NativeValue> {
    const KIND: NativeKind;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Quaternion (x, y, z, w).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// Linear RGBA color with channels in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Quaternion {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl ColorF {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl KeyframeNative for f32 {
    const KIND: NativeKind = NativeKind::Scalar;
}

impl KeyframeNative for Vector2 {
    const KIND: NativeKind = NativeKind::Vector2;
}

impl KeyframeNative for Vector3 {
    const KIND: NativeKind = NativeKind::Vector3;
}

impl KeyframeNative for Quaternion {
    const KIND: NativeKind = NativeKind::Quaternion;
}

impl KeyframeNative for ColorF {
    const KIND: NativeKind = NativeKind::Color;
}

impl From<f32> for NativeValue {
    fn from(v: f32) -> Self {
        NativeValue::Scalar(v)
    }
}

impl From<Vector2> for NativeValue {
    fn from(v: Vector2) -> Self {
        NativeValue::Vector2([v.x, v.y])
    }
}

impl From<Vector3> for NativeValue {
    fn from(v: Vector3) -> Self {
        NativeValue::Vector3([v.x, v.y, v.z])
    }
}

impl From<Quaternion> for NativeValue {
    fn from(q: Quaternion) -> Self {
        NativeValue::Quaternion([q.x, q.y, q.z, q.w])
    }
}

impl From<ColorF> for NativeValue {
    fn from(c: ColorF) -> Self {
        NativeValue::Color([c.r, c.g, c.b, c.a])
    }
}
