use std::time::Duration;

use super::RippleInfo;
use crate::host::{push_clip, push_opacity, DrawingContext, FrameRequests, HandlerMessage, VisualHandler};

/// Per-frame animation state of one ripple.
///
/// Time is accumulated from the compositor clock passed to `on_render`; the
/// first sample after `StartSpread` contributes no delta. The handler keeps
/// asking for frames until its fade has fully elapsed.
#[derive(Debug)]
pub struct RippleHandler {
    info: RippleInfo,
    elapsed: Duration,
    last_server_time: Option<Duration>,
    fade_started_at: Option<Duration>,
}

impl RippleHandler {
    pub fn new(info: RippleInfo) -> Self {
        Self {
            info,
            elapsed: Duration::ZERO,
            last_server_time: None,
            fade_started_at: None,
        }
    }

    pub fn info(&self) -> &RippleInfo {
        &self.info
    }

    /// Animation time accumulated since the spread started.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_fading(&self) -> bool {
        self.fade_started_at.is_some()
    }

    /// True once the fade has run for longer than the fade duration.
    pub fn is_expired(&self) -> bool {
        self.fade_elapsed()
            .map_or(false, |fade| fade > self.info.fade_duration)
    }

    /// Advance the animation clock to the compositor time `now`.
    pub fn sample(&mut self, now: Duration) {
        if let Some(last) = self.last_server_time {
            self.elapsed += now.saturating_sub(last);
        }
        self.last_server_time = Some(now);
    }

    pub fn current_radius(&self) -> f32 {
        let mut progress = fraction(self.elapsed, self.info.spread_duration);
        if let Some(fade_elapsed) = self.fade_elapsed() {
            if progress < 1.0 {
                let fade_progress = fraction(fade_elapsed, self.info.fade_duration);
                progress += (1.0 - progress) * fade_progress;
            }
        }
        let progress = progress.min(1.0);
        self.info.max_radius * self.info.easing.ease(progress)
    }

    pub fn current_opacity(&self) -> f32 {
        let ceiling = self.info.opacity;
        match self.fade_elapsed() {
            None => ceiling,
            Some(fade_elapsed) => {
                let progress = fraction(fade_elapsed, self.info.fade_duration).min(1.0);
                ceiling - ceiling * self.info.easing.ease(progress)
            }
        }
    }

    fn fade_elapsed(&self) -> Option<Duration> {
        self.fade_started_at
            .map(|started| self.elapsed.saturating_sub(started))
    }
}

/// `part / whole`, treating an empty `whole` as already complete.
fn fraction(part: Duration, whole: Duration) -> f32 {
    if whole.is_zero() {
        return 1.0;
    }
    part.as_secs_f32() / whole.as_secs_f32()
}

impl VisualHandler for RippleHandler {
    fn on_message(&mut self, message: HandlerMessage, frame: &mut FrameRequests) {
        match message {
            HandlerMessage::StartSpread => {
                self.last_server_time = None;
                self.fade_started_at = None;
                frame.register_for_next_animation_frame_update();
            }
            HandlerMessage::StartFade => {
                if self.fade_started_at.is_none() {
                    self.fade_started_at = Some(self.elapsed);
                }
            }
        }
    }

    fn on_animation_frame_update(&mut self, frame: &mut FrameRequests) {
        if self.is_expired() {
            log::trace!("ripple at {:?} expired", self.info.origin);
            return;
        }
        frame.invalidate();
        frame.register_for_next_animation_frame_update();
    }

    fn on_render(&mut self, ctx: &mut dyn DrawingContext, now: Duration) {
        self.sample(now);
        let radius = self.current_radius();
        let opacity = self.current_opacity();
        log::trace!(
            "ripple frame: elapsed={:?} radius={:.2} opacity={:.3}",
            self.elapsed,
            radius,
            opacity
        );

        let mut clip = push_clip(ctx, self.info.clip);
        let mut layer = push_opacity(&mut *clip, opacity);
        layer.draw_ellipse(self.info.brush, self.info.origin, radius, radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use crate::platform::{DrawCommand, RecordingContext};
    use crate::primitives::{Color, CornerRadius, Point, Rect, RoundedRect};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn info(easing: Easing) -> RippleInfo {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        RippleInfo {
            brush: Color::WHITE,
            clip: RoundedRect::new(bounds, CornerRadius::uniform(8.0)),
            easing,
            fade_duration: Duration::from_millis(600),
            max_radius: 100.0,
            opacity: 0.1,
            origin: Point::new(50.0, 50.0),
            spread_duration: Duration::from_millis(2000),
        }
    }

    fn started(easing: Easing) -> RippleHandler {
        let mut handler = RippleHandler::new(info(easing));
        let mut frame = FrameRequests::new();
        handler.on_message(HandlerMessage::StartSpread, &mut frame);
        assert!(frame.wants_next_frame());
        handler
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_first_sample_has_no_delta() {
        let mut handler = started(Easing::Linear);
        handler.sample(ms(5000));
        assert_eq!(handler.elapsed(), Duration::ZERO);
        assert_eq!(handler.current_radius(), 0.0);
        assert_eq!(handler.current_opacity(), 0.1);

        handler.sample(ms(5500));
        assert_eq!(handler.elapsed(), ms(500));
        assert!(approx_eq(handler.current_radius(), 25.0));
    }

    #[test]
    fn test_radius_reaches_max_and_stays() {
        let mut handler = started(Easing::CircularEaseOut);
        handler.sample(ms(0));
        handler.sample(ms(2000));
        assert!(approx_eq(handler.current_radius(), 100.0));
        handler.sample(ms(9000));
        assert!(approx_eq(handler.current_radius(), 100.0));
        assert_eq!(handler.current_opacity(), 0.1);
    }

    #[test]
    fn test_fade_accelerates_spread() {
        let mut handler = started(Easing::Linear);
        handler.sample(ms(0));
        handler.sample(ms(1000));
        handler.on_message(HandlerMessage::StartFade, &mut FrameRequests::new());
        handler.sample(ms(1300));

        // spread 0.65, fade 0.5: 0.65 + 0.35 * 0.5
        assert!(approx_eq(handler.current_radius(), 82.5));
        assert!(approx_eq(handler.current_opacity(), 0.05));
    }

    #[test]
    fn test_fade_completes_at_fade_duration() {
        let mut handler = started(Easing::Linear);
        handler.sample(ms(0));
        handler.on_message(HandlerMessage::StartFade, &mut FrameRequests::new());
        handler.sample(ms(600));
        assert!(approx_eq(handler.current_radius(), 100.0));
        assert!(approx_eq(handler.current_opacity(), 0.0));
        assert!(!handler.is_expired());

        handler.sample(ms(601));
        assert!(handler.is_expired());
        assert!(approx_eq(handler.current_opacity(), 0.0));
    }

    #[test]
    fn test_second_fade_message_keeps_first_marker() {
        let mut handler = started(Easing::Linear);
        handler.sample(ms(0));
        handler.sample(ms(100));
        handler.on_message(HandlerMessage::StartFade, &mut FrameRequests::new());
        handler.sample(ms(400));
        handler.on_message(HandlerMessage::StartFade, &mut FrameRequests::new());
        assert!(approx_eq(handler.current_opacity(), 0.05));
    }

    #[test]
    fn test_start_spread_resets_sampling() {
        let mut handler = started(Easing::Linear);
        handler.sample(ms(0));
        handler.on_message(HandlerMessage::StartFade, &mut FrameRequests::new());
        handler.on_message(HandlerMessage::StartSpread, &mut FrameRequests::new());
        assert!(!handler.is_fading());

        // Clock jump after the reset is not counted
        handler.sample(ms(10_000));
        assert_eq!(handler.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_frame_updates_stop_after_expiry() {
        let mut handler = started(Easing::Linear);
        let mut frame = FrameRequests::new();
        handler.on_animation_frame_update(&mut frame);
        assert!(frame.wants_next_frame());
        assert!(frame.is_invalidated());

        handler.sample(ms(0));
        handler.on_message(HandlerMessage::StartFade, &mut FrameRequests::new());
        handler.sample(ms(700));

        let mut frame = FrameRequests::new();
        handler.on_animation_frame_update(&mut frame);
        assert!(!frame.wants_next_frame());
        assert!(!frame.is_invalidated());
    }

    #[test]
    fn test_zero_durations_are_complete() {
        let mut handler = RippleHandler::new(RippleInfo {
            spread_duration: Duration::ZERO,
            fade_duration: Duration::ZERO,
            ..info(Easing::Linear)
        });
        handler.sample(ms(0));
        assert_eq!(handler.current_radius(), 100.0);
        handler.on_message(HandlerMessage::StartFade, &mut FrameRequests::new());
        assert_eq!(handler.current_opacity(), 0.0);
    }

    #[test]
    fn test_render_draws_clipped_circle() {
        let mut handler = started(Easing::Linear);
        let mut ctx = RecordingContext::new();
        handler.on_render(&mut ctx, ms(0));
        handler.on_render(&mut ctx, ms(1000));

        assert!(ctx.is_balanced());
        let ellipses: Vec<_> = ctx.ellipses().collect();
        assert_eq!(ellipses.len(), 2);
        let last = ellipses[1];
        assert_eq!(last.center, Point::new(50.0, 50.0));
        assert!(approx_eq(last.radius_x, 50.0));
        assert_eq!(last.radius_x, last.radius_y);
        assert!(approx_eq(last.opacity, 0.1));
        assert_eq!(last.clip, Some(handler.info().clip));
        assert!(matches!(ctx.commands()[0], DrawCommand::PushClip(_)));
    }
}
