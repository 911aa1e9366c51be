//! Timing and interpolation capabilities used by tweens.
//!
//! `Timing` shapes progress over a tween's duration; `Interpolation` turns the
//! eased progress into an intermediate string.

pub mod functions;

use serde::{Deserialize, Serialize};

use functions::{
    bezier_ease, ease_in_back, ease_in_bounce, ease_in_cubic, ease_in_expo, ease_in_out_back,
    ease_in_out_cubic, ease_in_out_expo, ease_in_out_quad, ease_in_out_quart, ease_in_quad,
    ease_in_quart, ease_out_back, ease_out_bounce, ease_out_cubic, ease_out_quad, step_text,
    text_lerp,
};

/// Maps linear progress in [0,1] to eased progress.
///
/// Back curves overshoot outside [0,1]; consumers clamp where they need to.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Timing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    #[default]
    EaseInOutCubic,
    EaseInQuart,
    EaseInOutQuart,
    EaseInExpo,
    EaseInOutExpo,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    /// CSS-style cubic bezier with control points (x1, y1, x2, y2).
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Caller-supplied curve; not serializable.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Timing {
    /// Eased progress for `t`, clamped to [0,1] on input.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Timing::Linear => t,
            Timing::EaseInQuad => ease_in_quad(t),
            Timing::EaseOutQuad => ease_out_quad(t),
            Timing::EaseInOutQuad => ease_in_out_quad(t),
            Timing::EaseInCubic => ease_in_cubic(t),
            Timing::EaseOutCubic => ease_out_cubic(t),
            Timing::EaseInOutCubic => ease_in_out_cubic(t),
            Timing::EaseInQuart => ease_in_quart(t),
            Timing::EaseInOutQuart => ease_in_out_quart(t),
            Timing::EaseInExpo => ease_in_expo(t),
            Timing::EaseInOutExpo => ease_in_out_expo(t),
            Timing::EaseInBack => ease_in_back(t),
            Timing::EaseOutBack => ease_out_back(t),
            Timing::EaseInOutBack => ease_in_out_back(t),
            Timing::EaseInBounce => ease_in_bounce(t),
            Timing::EaseOutBounce => ease_out_bounce(t),
            Timing::CubicBezier { x1, y1, x2, y2 } => bezier_ease(t, x1, y1, x2, y2),
            Timing::Custom(f) => f(t),
        }
    }
}

/// Turns eased progress into an intermediate string between two values.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Interpolation {
    /// Grapheme-wise replacement from left to right (see `text_lerp`).
    #[default]
    Text,
    /// Hold `from` until the end, then snap to `to`.
    Step,
    /// Caller-supplied function; not serializable.
    #[serde(skip)]
    Custom(fn(&str, &str, f64) -> String),
}

impl Interpolation {
    /// Exactly `from` at `t <= 0` and exactly `to` at `t >= 1`, whatever the variant.
    pub fn apply(&self, from: &str, to: &str, t: f64) -> String {
        if t >= 1.0 {
            return to.to_string();
        }
        if t <= 0.0 {
            return from.to_string();
        }
        match *self {
            Interpolation::Text => text_lerp(from, to, t),
            Interpolation::Step => step_text(from, to, t),
            Interpolation::Custom(f) => f(from, to, t),
        }
    }
}
