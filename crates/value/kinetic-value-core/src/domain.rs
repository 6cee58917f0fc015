//! Value domains: the closed set of declared-value to native-keyframe codecs.
//!
//! Each domain is a zero-sized tag implementing [`ValueDomain`]. Codecs are total:
//! anything a domain's declared type can hold converts, and every round-trip is
//! exact. Declared numbers share the engine's single precision; wider input is
//! narrowed (and range-checked) by the coercion layer before it gets here.

use crate::color::Color;
use crate::native::{ColorF, KeyframeNative, Quaternion, Vector2, Vector3};
use crate::value::NativeKind;

/// Capability set of a value domain.
pub trait ValueDomain {
    /// Declared (author-facing) value.
    type Value: Clone + std::fmt::Debug + PartialEq;
    /// Engine-native keyframe value.
    type Native: KeyframeNative;

    const KIND: NativeKind;

    fn to_native(value: &Self::Value) -> Self::Native;

    fn from_native(native: Self::Native) -> Self::Value;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarDomain;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector2Domain;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector3Domain;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuaternionDomain;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorDomain;

impl ValueDomain for ScalarDomain {
    type Value = f32;
    type Native = f32;
    const KIND: NativeKind = NativeKind::Scalar;

    #[inline]
    fn to_native(value: &f32) -> f32 {
        *value
    }

    #[inline]
    fn from_native(native: f32) -> f32 {
        native
    }
}

impl ValueDomain for Vector2Domain {
    type Value = [f32; 2];
    type Native = Vector2;
    const KIND: NativeKind = NativeKind::Vector2;

    #[inline]
    fn to_native(value: &[f32; 2]) -> Vector2 {
        let [x, y] = *value;
        Vector2::new(x, y)
    }

    #[inline]
    fn from_native(native: Vector2) -> [f32; 2] {
        [native.x, native.y]
    }
}

impl ValueDomain for Vector3Domain {
    type Value = [f32; 3];
    type Native = Vector3;
    const KIND: NativeKind = NativeKind::Vector3;

    #[inline]
    fn to_native(value: &[f32; 3]) -> Vector3 {
        let [x, y, z] = *value;
        Vector3::new(x, y, z)
    }

    #[inline]
    fn from_native(native: Vector3) -> [f32; 3] {
        [native.x, native.y, native.z]
    }
}

impl ValueDomain for QuaternionDomain {
    type Value = [f32; 4];
    type Native = Quaternion;
    const KIND: NativeKind = NativeKind::Quaternion;

    #[inline]
    fn to_native(value: &[f32; 4]) -> Quaternion {
        let [x, y, z, w] = *value;
        Quaternion::new(x, y, z, w)
    }

    #[inline]
    fn from_native(native: Quaternion) -> [f32; 4] {
        [native.x, native.y, native.z, native.w]
    }
}

#[inline]
fn unit(channel: u8) -> f32 {
    channel as f32 / 255.0
}

#[inline]
fn byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl ValueDomain for ColorDomain {
    type Value = Color;
    type Native = ColorF;
    const KIND: NativeKind = NativeKind::Color;

    fn to_native(value: &Color) -> ColorF {
        ColorF::new(unit(value.r), unit(value.g), unit(value.b), unit(value.a))
    }

    fn from_native(native: ColorF) -> Color {
        Color::from_argb(byte(native.a), byte(native.r), byte(native.g), byte(native.b))
    }
}
