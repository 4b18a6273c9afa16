use std::time::Duration;

use crate::animation::Easing;
use crate::primitives::{Color, Point, Rect, RoundedRect};

/// Static description of one ripple: where it starts, how far it grows,
/// how it looks and how long each phase takes.
///
/// Built once per started ripple and owned by its [`super::RippleHandler`].
#[derive(Debug, Clone)]
pub struct RippleInfo {
    pub brush: Color,
    /// Clip applied to every frame, normally the control's rounded bounds.
    pub clip: RoundedRect,
    pub easing: Easing,
    pub fade_duration: Duration,
    pub max_radius: f32,
    /// Opacity ceiling; the ripple is drawn at this opacity until it fades.
    pub opacity: f32,
    pub origin: Point,
    pub spread_duration: Duration,
}

impl RippleInfo {
    /// Distance from `origin` to the farthest corner of `bounds`, scaled by
    /// `multiplier`.
    pub fn max_radius_for(bounds: Rect, origin: Point, multiplier: f32) -> f32 {
        let farthest = bounds
            .corners()
            .iter()
            .map(|corner| origin.distance_to(*corner))
            .fold(0.0_f32, f32::max);
        farthest * multiplier
    }
}
