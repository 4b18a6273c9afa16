//! Easing curves mapping linear progress to eased progress.
//!
//! Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0`. The ripple engine uses
//! [`Easing::CircularEaseOut`] for both its spread and fade phases.

use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Quadratic acceleration
    QuadraticEaseIn,
    /// Quadratic deceleration
    QuadraticEaseOut,
    /// Quarter-circle acceleration
    CircularEaseIn,
    /// Quarter-circle deceleration: fast start, long gentle tail
    #[default]
    CircularEaseOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`; `x1` and `x2` must lie in `[0, 1]`
    CubicBezier(f32, f32, f32, f32),
    /// User-defined curve
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl Easing {
    /// Material 3 "emphasized decelerate" curve.
    pub const EMPHASIZED_DECELERATE: Easing = Easing::CubicBezier(0.05, 0.7, 0.1, 1.0);

    /// Material 3 "standard" curve.
    pub const STANDARD: Easing = Easing::CubicBezier(0.2, 0.0, 0.0, 1.0);

    /// Eased progress for `progress` in `[0, 1]`.
    pub fn ease(&self, progress: f32) -> f32 {
        let p = progress;
        match self {
            Easing::Linear => p,
            Easing::QuadraticEaseIn => p * p,
            Easing::QuadraticEaseOut => -(p * (p - 2.0)),
            Easing::CircularEaseIn => 1.0 - (1.0 - p * p).max(0.0).sqrt(),
            Easing::CircularEaseOut => ((2.0 - p) * p).max(0.0).sqrt(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let t = solve_bezier_t(p, *x1, *x2);
                bezier(t, *y1, *y2)
            }
            Easing::Custom(f) => f(p),
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("Linear"),
            Easing::QuadraticEaseIn => f.write_str("QuadraticEaseIn"),
            Easing::QuadraticEaseOut => f.write_str("QuadraticEaseOut"),
            Easing::CircularEaseIn => f.write_str("CircularEaseIn"),
            Easing::CircularEaseOut => f.write_str("CircularEaseOut"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            Easing::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier(t: f32, c1: f32, c2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * c1 + 3.0 * mt * t * t * c2 + t * t * t
}

fn bezier_derivative(t: f32, c1: f32, c2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * c1 + 6.0 * mt * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

/// Curve parameter whose x coordinate is `x`.
///
/// Newton iterations first, bisection if they stall on a flat segment.
fn solve_bezier_t(x: f32, x1: f32, x2: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);

    let mut t = x;
    for _ in 0..8 {
        let error = bezier(t, x1, x2) - x;
        if error.abs() < 1e-6 {
            return t;
        }
        let slope = bezier_derivative(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = bezier(t, x1, x2);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}
