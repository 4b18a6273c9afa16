use std::time::Duration;

use crate::animation::Easing;

/// How long a ripple takes to grow to its full radius.
pub const SPREAD_DURATION: Duration = Duration::from_millis(2000);
/// How long a released ripple takes to fade out.
pub const FADE_DURATION: Duration = Duration::from_millis(600);
/// Full radius relative to the distance from the origin to the farthest corner.
pub const MAX_RADIUS_MULTIPLIER: f32 = 1.33;
pub const DEFAULT_FEEDBACK_OPACITY: f32 = 0.1;

/// Timing and geometry of ripple animations.
#[derive(Debug, Clone)]
pub struct RippleConfig {
    pub spread_duration: Duration,
    pub fade_duration: Duration,
    pub radius_multiplier: f32,
    /// Curve applied to both the spread and the fade.
    pub easing: Easing,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            spread_duration: SPREAD_DURATION,
            fade_duration: FADE_DURATION,
            radius_multiplier: MAX_RADIUS_MULTIPLIER,
            easing: Easing::CircularEaseOut,
        }
    }
}

impl RippleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spread_duration(mut self, duration: Duration) -> Self {
        self.spread_duration = duration;
        self
    }

    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    pub fn radius_multiplier(mut self, multiplier: f32) -> Self {
        self.radius_multiplier = multiplier;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
