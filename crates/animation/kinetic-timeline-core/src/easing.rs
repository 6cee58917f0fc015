//! Easing descriptors and their engine-native easing functions.
//!
//! Easing is never evaluated here; a descriptor only resolves to the function
//! description the engine instantiates per keyframe.
//!
//! Mapping:
//! - `Linear` -> linear easing
//! - `Bounce` / `Elastic` -> the engine's parametric bounce/elastic functions
//! - every other type -> a cubic-bezier approximation chosen per mode
//! - `Default` -> (0.1, 0.9)-(0.2, 1.0) regardless of mode

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingType {
    #[default]
    Default,
    Linear,
    Cubic,
    Back,
    Bounce,
    Elastic,
    Circle,
    Quadratic,
    Quartic,
    Quintic,
    Sine,
}

/// `EaseOut` is the zero value, matching engine conventions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingMode {
    #[default]
    EaseOut,
    EaseIn,
    EaseInOut,
}

/// (type, mode) pair attached to every normalized keyframe.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasingDescriptor {
    pub easing_type: EasingType,
    pub easing_mode: EasingMode,
}

/// Control point in the normalized (0..1) timing domain.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
}

/// Engine-native easing function description.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum EasingFunction {
    Linear,
    CubicBezier {
        control1: ControlPoint,
        control2: ControlPoint,
    },
    Bounce {
        mode: EasingMode,
        bounces: u32,
        bounciness: f32,
    },
    Elastic {
        mode: EasingMode,
        oscillations: u32,
        springiness: f32,
    },
}

const BOUNCES: u32 = 3;
const BOUNCINESS: f32 = 2.0;
const OSCILLATIONS: u32 = 3;
const SPRINGINESS: f32 = 3.0;

impl EasingDescriptor {
    /// Zero value of both enums. Used for "from" keyframes, which ignore
    /// descriptor-level easing.
    pub const ABSOLUTE_DEFAULT: EasingDescriptor = EasingDescriptor {
        easing_type: EasingType::Default,
        easing_mode: EasingMode::EaseOut,
    };

    pub const fn new(easing_type: EasingType, easing_mode: EasingMode) -> Self {
        Self {
            easing_type,
            easing_mode,
        }
    }

    /// Resolve to the engine-native function.
    pub fn resolve(&self) -> EasingFunction {
        use EasingMode::*;
        use EasingType::*;

        let bezier = |x1: f32, y1: f32, x2: f32, y2: f32| EasingFunction::CubicBezier {
            control1: ControlPoint { x: x1, y: y1 },
            control2: ControlPoint { x: x2, y: y2 },
        };

        match (self.easing_type, self.easing_mode) {
            (Linear, _) => EasingFunction::Linear,
            (Bounce, mode) => EasingFunction::Bounce {
                mode,
                bounces: BOUNCES,
                bounciness: BOUNCINESS,
            },
            (Elastic, mode) => EasingFunction::Elastic {
                mode,
                oscillations: OSCILLATIONS,
                springiness: SPRINGINESS,
            },
            (Default, _) => bezier(0.1, 0.9, 0.2, 1.0),

            (Cubic, EaseIn) => bezier(0.55, 0.055, 0.675, 0.19),
            (Cubic, EaseOut) => bezier(0.215, 0.61, 0.355, 1.0),
            (Cubic, EaseInOut) => bezier(0.645, 0.045, 0.355, 1.0),

            (Back, EaseIn) => bezier(0.6, -0.28, 0.735, 0.045),
            (Back, EaseOut) => bezier(0.175, 0.885, 0.32, 1.275),
            (Back, EaseInOut) => bezier(0.68, -0.55, 0.265, 1.55),

            (Circle, EaseIn) => bezier(0.6, 0.04, 0.98, 0.335),
            (Circle, EaseOut) => bezier(0.075, 0.82, 0.165, 1.0),
            (Circle, EaseInOut) => bezier(0.785, 0.135, 0.15, 0.86),

            (Quadratic, EaseIn) => bezier(0.55, 0.085, 0.68, 0.53),
            (Quadratic, EaseOut) => bezier(0.25, 0.46, 0.45, 0.94),
            (Quadratic, EaseInOut) => bezier(0.445, 0.03, 0.515, 0.955),

            (Quartic, EaseIn) => bezier(0.895, 0.03, 0.685, 0.22),
            (Quartic, EaseOut) => bezier(0.165, 0.84, 0.44, 1.0),
            (Quartic, EaseInOut) => bezier(0.77, 0.0, 0.175, 1.0),

            (Quintic, EaseIn) => bezier(0.755, 0.05, 0.855, 0.06),
            (Quintic, EaseOut) => bezier(0.23, 1.0, 0.32, 1.0),
            (Quintic, EaseInOut) => bezier(0.86, 0.0, 0.07, 1.0),

            (Sine, EaseIn) => bezier(0.47, 0.0, 0.745, 0.715),
            (Sine, EaseOut) => bezier(0.39, 0.575, 0.565, 1.0),
            (Sine, EaseInOut) => bezier(0.445, 0.05, 0.55, 0.95),
        }
    }
}
