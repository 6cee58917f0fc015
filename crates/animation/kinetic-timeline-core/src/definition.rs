//! JSON animation set definitions.
//!
//! Notes:
//! - One entry per animation; `kind` picks the channel and value domain.
//! - Numbers arrive as `f64` and are narrowed to the engine's single precision;
//!   magnitudes that would overflow are rejected with the animation index and field.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::compiled::{DelayBehavior, RepeatOption};
use crate::descriptor::{AnimationKind, ImplicitAnimation};
use crate::easing::{EasingMode, EasingType};
use crate::keyframes::{KeyframeSpec, KeyframeValue};
use crate::kinds;
use crate::set::ImplicitAnimationSet;
use kinetic_value_core::{
    narrow, parse_quaternion, parse_scalar, parse_vector2, parse_vector3, Color, KeyframeNative,
    ParseValueError, QuaternionDomain, ScalarDomain, ValueDomain, Vector2Domain, Vector3Domain,
};

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("animation #{index}: unknown kind '{kind}'")]
    UnknownKind { index: usize, kind: String },
    #[error("animation #{index}: kind '{kind}' needs an explicit target")]
    MissingTarget { index: usize, kind: String },
    #[error("animation #{index}: invalid {field}: {source}")]
    Value {
        index: usize,
        field: String,
        #[source]
        source: ParseValueError,
    },
    #[error("animation #{index}: {field} must be {expected}")]
    ValueShape {
        index: usize,
        field: String,
        expected: &'static str,
    },
    #[error("animation #{index}: keyframe at {key} needs exactly one of value or expression")]
    KeyframePayload { index: usize, key: f32 },
    #[error("animation #{index}: invalid repeat '{repeat}'")]
    Repeat { index: usize, repeat: String },
}

/// Public API: parse a JSON animation set description into an [`ImplicitAnimationSet`].
///
/// Notes:
/// - `kind` is one of the built-in kinds (`opacity`, `translation`, `color`, ...) or a
///   domain name (`scalar`, `vector2`, `vector3`, `quaternion`, `color`) paired with `target`.
/// - Values may be numbers, arrays of numbers or strings; strings go through the
///   text coercion rules of `kinetic-value-core`.
/// - Keyframe progress is not validated here; the timeline builder rejects it at compile.
pub fn parse_animation_set_json(s: &str) -> Result<ImplicitAnimationSet, DefinitionError> {
    let def: SetDefinition = serde_json::from_str(s)?;
    let mut set = ImplicitAnimationSet::new();
    for (index, anim) in def.animations.iter().enumerate() {
        let cx = Context { index, def: anim };
        match anim.kind.as_str() {
            "opacity" => set.push(cx.build(kinds::OPACITY, to_scalar)?),
            "rotation" => set.push(cx.build(kinds::ROTATION, to_scalar)?),
            "rotationInDegrees" => set.push(cx.build(kinds::ROTATION_IN_DEGREES, to_scalar)?),
            "translation" => set.push(cx.build(kinds::TRANSLATION, to_vector3)?),
            "offset" => set.push(cx.build(kinds::OFFSET, to_vector3)?),
            "scale" => set.push(cx.build(kinds::SCALE, to_vector3)?),
            "centerPoint" => set.push(cx.build(kinds::CENTER_POINT, to_vector3)?),
            "size" => set.push(cx.build(kinds::SIZE, to_vector2)?),
            "anchorPoint" => set.push(cx.build(kinds::ANCHOR_POINT, to_vector2)?),
            "orientation" => set.push(cx.build(kinds::ORIENTATION, to_quaternion)?),
            "color" if anim.target.is_none() => set.push(cx.build(kinds::COLOR, to_color)?),
            "color" => set.push(cx.build(
                AnimationKind::custom(cx.target()?, kinds::COLOR.parse),
                to_color,
            )?),
            "scalar" => set.push(cx.build(
                AnimationKind::custom(cx.target()?, ScalarDomain::to_native),
                to_scalar,
            )?),
            "vector2" => set.push(cx.build(
                AnimationKind::custom(cx.target()?, Vector2Domain::to_native),
                to_vector2,
            )?),
            "vector3" => set.push(cx.build(
                AnimationKind::custom(cx.target()?, Vector3Domain::to_native),
                to_vector3,
            )?),
            "quaternion" => set.push(cx.build(
                AnimationKind::custom(cx.target()?, QuaternionDomain::to_native),
                to_quaternion,
            )?),
            other => {
                return Err(DefinitionError::UnknownKind {
                    index,
                    kind: other.to_string(),
                })
            }
        }
    }
    Ok(set)
}

struct Context<'a> {
    index: usize,
    def: &'a AnimationDefinition,
}

type Convert<V> = fn(&RawValue) -> Result<V, Shape>;

/// Conversion failure before the animation index and field are known.
enum Shape {
    Parse(ParseValueError),
    Expected(&'static str),
}

impl Context<'_> {
    fn target(&self) -> Result<String, DefinitionError> {
        self.def
            .target
            .clone()
            .ok_or_else(|| DefinitionError::MissingTarget {
                index: self.index,
                kind: self.def.kind.clone(),
            })
    }

    fn value<V>(
        &self,
        field: &str,
        raw: &RawValue,
        convert: Convert<V>,
    ) -> Result<V, DefinitionError> {
        convert(raw).map_err(|e| match e {
            Shape::Parse(source) => DefinitionError::Value {
                index: self.index,
                field: field.to_string(),
                source,
            },
            Shape::Expected(expected) => DefinitionError::ValueShape {
                index: self.index,
                field: field.to_string(),
                expected,
            },
        })
    }

    fn build<V, K>(
        &self,
        kind: AnimationKind<V, K>,
        convert: Convert<V>,
    ) -> Result<ImplicitAnimation<V, K>, DefinitionError>
    where
        K: KeyframeNative,
    {
        let def = self.def;
        let mut anim = ImplicitAnimation::new(kind);
        if let Some(raw) = &def.from {
            anim.from = Some(self.value("from", raw, convert)?);
        }
        if let Some(raw) = &def.to {
            anim.to = Some(self.value("to", raw, convert)?);
        }
        for kf in &def.keyframes {
            let value = match (&kf.value, &kf.expression) {
                (Some(raw), None) => {
                    let field = format!("keyframe {}", kf.key);
                    KeyframeValue::Literal(self.value(&field, raw, convert)?)
                }
                (None, Some(expression)) => KeyframeValue::Expression(expression.clone()),
                _ => {
                    return Err(DefinitionError::KeyframePayload {
                        index: self.index,
                        key: kf.key,
                    })
                }
            };
            anim.keyframes.push(KeyframeSpec {
                progress: kf.key,
                value,
                easing_type: kf.easing_type,
                easing_mode: kf.easing_mode,
            });
        }
        anim.delay = def.delay_ms.map(Duration::from_millis);
        anim.duration = def.duration_ms.map(Duration::from_millis);
        anim.easing_type = def.easing_type;
        anim.easing_mode = def.easing_mode;
        anim.implicit_target = def.implicit_target.clone();
        if let Some(repeat) = &def.repeat {
            anim.repeat = self.repeat(repeat)?;
        }
        if let Some(delay_behavior) = def.delay_behavior {
            anim.delay_behavior = delay_behavior;
        }
        Ok(anim)
    }

    fn repeat(&self, raw: &RawRepeat) -> Result<RepeatOption, DefinitionError> {
        match raw {
            RawRepeat::Count(n) => Ok(RepeatOption::Count(*n)),
            RawRepeat::Text(s) if s.eq_ignore_ascii_case("forever") => Ok(RepeatOption::Forever),
            RawRepeat::Text(s) => s
                .trim()
                .parse::<u32>()
                .map(RepeatOption::Count)
                .map_err(|_| DefinitionError::Repeat {
                    index: self.index,
                    repeat: s.clone(),
                }),
        }
    }
}

fn to_scalar(raw: &RawValue) -> Result<f32, Shape> {
    match raw {
        RawValue::Number(n) => narrow(*n).map_err(Shape::Parse),
        RawValue::Components(c) if c.len() == 1 => narrow(c[0]).map_err(Shape::Parse),
        RawValue::Text(s) => parse_scalar(s).map_err(Shape::Parse),
        RawValue::Components(_) => Err(Shape::Expected("a single number")),
    }
}

fn components<const N: usize>(raw: &RawValue, broadcast: bool) -> Result<[f32; N], Shape> {
    match raw {
        RawValue::Number(n) if broadcast => Ok([narrow(*n).map_err(Shape::Parse)?; N]),
        RawValue::Components(c) if c.len() == N => {
            let mut out = [0.0; N];
            for (slot, v) in out.iter_mut().zip(c) {
                *slot = narrow(*v).map_err(Shape::Parse)?;
            }
            Ok(out)
        }
        RawValue::Components(c) if broadcast && c.len() == 1 => {
            Ok([narrow(c[0]).map_err(Shape::Parse)?; N])
        }
        _ => Err(Shape::Expected(match N {
            2 => "a number or 2 components",
            3 => "a number or 3 components",
            _ => "4 components",
        })),
    }
}

fn to_vector2(raw: &RawValue) -> Result<[f32; 2], Shape> {
    match raw {
        RawValue::Text(s) => parse_vector2(s).map_err(Shape::Parse),
        other => components::<2>(other, true),
    }
}

fn to_vector3(raw: &RawValue) -> Result<[f32; 3], Shape> {
    match raw {
        RawValue::Text(s) => parse_vector3(s).map_err(Shape::Parse),
        other => components::<3>(other, true),
    }
}

fn to_quaternion(raw: &RawValue) -> Result<[f32; 4], Shape> {
    match raw {
        RawValue::Text(s) => parse_quaternion(s).map_err(Shape::Parse),
        other => components::<4>(other, false),
    }
}

fn to_color(raw: &RawValue) -> Result<Color, Shape> {
    match raw {
        RawValue::Text(s) => s.parse::<Color>().map_err(Shape::Parse),
        _ => Err(Shape::Expected("a color string")),
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct SetDefinition {
    animations: Vec<AnimationDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnimationDefinition {
    kind: String,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    from: Option<RawValue>,
    #[serde(default)]
    to: Option<RawValue>,
    #[serde(default)]
    keyframes: Vec<KeyframeDefinition>,
    #[serde(default)]
    delay_ms: Option<u64>,
    #[serde(default)]
    duration_ms: Option<u64>,
    #[serde(default)]
    easing_type: Option<EasingType>,
    #[serde(default)]
    easing_mode: Option<EasingMode>,
    #[serde(default)]
    implicit_target: Option<String>,
    #[serde(default)]
    repeat: Option<RawRepeat>,
    #[serde(default)]
    delay_behavior: Option<DelayBehavior>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyframeDefinition {
    key: f32,
    #[serde(default)]
    value: Option<RawValue>,
    #[serde(default)]
    expression: Option<String>,
    #[serde(default)]
    easing_type: Option<EasingType>,
    #[serde(default)]
    easing_mode: Option<EasingMode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Components(Vec<f64>),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRepeat {
    Count(u32),
    Text(String),
}
