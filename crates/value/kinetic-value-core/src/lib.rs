//! kinetic-value-core: typed animation values and their engine-native keyframe forms.
//!
//! Declared values (what an animation author writes) are converted into the
//! native keyframe types a composition engine consumes through a closed set of
//! [`ValueDomain`]s. Text coercion helpers sit one layer above the codecs and
//! reject malformed input before it ever reaches them.

pub mod coercion;
pub mod color;
pub mod domain;
pub mod native;
pub mod value;

pub use coercion::{
    narrow, parse_quaternion, parse_scalar, parse_vector2, parse_vector3, ParseValueError,
};
pub use color::Color;
pub use domain::{
    ColorDomain, QuaternionDomain, ScalarDomain, ValueDomain, Vector2Domain, Vector3Domain,
};
pub use native::{ColorF, KeyframeNative, Quaternion, Vector2, Vector3};
pub use value::{NativeKind, NativeValue};
