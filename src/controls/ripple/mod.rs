//! Press feedback: an expanding, fading circle clipped to the control.
//!
//! A [`Ripple`] owns one container visual while attached. Each press adds a
//! custom visual driven by a [`RippleHandler`]; only one ripple is owned at a
//! time. Stopping hands the visual over to a deferred cleanup task so the
//! fade can finish while a new ripple starts.

mod config;
mod handler;
mod info;

use std::rc::Rc;

pub use config::{
    RippleConfig, DEFAULT_FEEDBACK_OPACITY, FADE_DURATION, MAX_RADIUS_MULTIPLIER, SPREAD_DURATION,
};
pub use handler::RippleHandler;
pub use info::RippleInfo;

use crate::host::{
    DispatcherPriority, ElementId, HandlerMessage, InputEvent, PointerButtons, Services, VisualId,
};
use crate::primitives::{Color, CornerRadius, Point, Rect, RoundedRect, Size};

/// Where a new ripple is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackOrigin {
    /// Center of the control, regardless of the press position
    Center,
    /// The press position
    #[default]
    Cursor,
}

struct Attachment {
    services: Services,
    container: VisualId,
}

/// Press feedback of one control: spreading ellipses clipped to its corners.
pub struct Ripple {
    id: ElementId,
    config: RippleConfig,
    feedback_brush: Color,
    feedback_opacity: f32,
    feedback_origin: FeedbackOrigin,
    is_feedback_enabled: bool,
    is_capturing_outside_corner_radius: bool,
    corner_radius: CornerRadius,
    size: Size,
    is_canceled: bool,
    local_routed_events_enabled: bool,
    attachment: Option<Attachment>,
    current: Option<VisualId>,
}

impl Ripple {
    pub fn new(id: ElementId) -> Self {
        Self::with_config(id, RippleConfig::default())
    }

    pub fn with_config(id: ElementId, config: RippleConfig) -> Self {
        Self {
            id,
            config,
            feedback_brush: Color::TRANSPARENT,
            feedback_opacity: DEFAULT_FEEDBACK_OPACITY,
            feedback_origin: FeedbackOrigin::default(),
            is_feedback_enabled: true,
            is_capturing_outside_corner_radius: false,
            corner_radius: CornerRadius::default(),
            size: Size::default(),
            is_canceled: false,
            local_routed_events_enabled: true,
            attachment: None,
            current: None,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RippleConfig) {
        self.config = config;
    }

    pub fn feedback_brush(&self) -> Color {
        self.feedback_brush
    }

    pub fn set_feedback_brush(&mut self, brush: Color) {
        self.feedback_brush = brush;
    }

    /// Opacity ceiling of new ripples.
    pub fn feedback_opacity(&self) -> f32 {
        self.feedback_opacity
    }

    pub fn set_feedback_opacity(&mut self, opacity: f32) {
        self.feedback_opacity = opacity;
    }

    pub fn feedback_origin(&self) -> FeedbackOrigin {
        self.feedback_origin
    }

    pub fn set_feedback_origin(&mut self, origin: FeedbackOrigin) {
        self.feedback_origin = origin;
    }

    pub fn is_feedback_enabled(&self) -> bool {
        self.is_feedback_enabled
    }

    pub fn set_feedback_enabled(&mut self, enabled: bool) {
        self.is_feedback_enabled = enabled;
    }

    pub fn is_capturing_outside_corner_radius(&self) -> bool {
        self.is_capturing_outside_corner_radius
    }

    pub fn set_capturing_outside_corner_radius(&mut self, capturing: bool) {
        self.is_capturing_outside_corner_radius = capturing;
    }

    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    pub fn set_corner_radius(&mut self, radius: CornerRadius) {
        self.corner_radius = radius;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Record a layout size change.
    ///
    /// Resizes the container and every ripple visual in it, and marks a
    /// ripple that is still being set up as canceled.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.update_container_size();
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Whether a ripple is owned, i.e. started and not yet stopped.
    pub fn has_active_ripple(&self) -> bool {
        self.current.is_some()
    }

    /// The container visual holding ripple visuals, while attached.
    pub fn container(&self) -> Option<VisualId> {
        self.attachment.as_ref().map(|a| a.container)
    }

    pub(crate) fn services(&self) -> Option<&Services> {
        self.attachment.as_ref().map(|a| &a.services)
    }

    pub fn is_local_routed_events_enabled(&self) -> bool {
        self.local_routed_events_enabled
    }

    pub(crate) fn set_local_routed_events_enabled(&mut self, enabled: bool) {
        self.local_routed_events_enabled = enabled;
    }

    /// Create the container visual and layer it above the element.
    ///
    /// Attaching again first detaches from the previous host.
    pub fn attach(&mut self, services: Services) {
        if self.attachment.is_some() {
            self.detach();
        }

        let container = {
            let mut compositor = services.compositor.borrow_mut();
            let container = compositor.create_container_visual();
            compositor.set_element_child_visual(self.id, Some(container));
            container
        };
        log::debug!("ripple {:?} attached with container {:?}", self.id, container);

        self.attachment = Some(Attachment {
            services,
            container,
        });
        self.update_container_size();
    }

    /// Remove the container visual from the element.
    ///
    /// Any ripple visuals go with the container, so an owned ripple is
    /// released without a fade.
    pub fn detach(&mut self) {
        let Some(attachment) = self.attachment.take() else {
            return;
        };
        self.current = None;
        attachment
            .services
            .compositor
            .borrow_mut()
            .set_element_child_visual(self.id, None);
        log::debug!("ripple {:?} detached", self.id);
    }

    /// Whether `point` (in control coordinates) hits the control.
    ///
    /// Unless capturing outside the corner radius, points cut away by the
    /// rounded corners miss.
    pub fn hit_test(&self, point: Point) -> bool {
        if self.is_capturing_outside_corner_radius {
            self.bounds().contains(point)
        } else {
            RoundedRect::new(self.bounds(), self.corner_radius).contains(point)
        }
    }

    /// Start a ripple at `point`, in control coordinates.
    ///
    /// Returns false when feedback is disabled, the control is detached or a
    /// ripple is already owned.
    pub fn start_ripple(&mut self, point: Point) -> bool {
        if !self.is_feedback_enabled {
            return false;
        }
        self.add_ripple(point)
    }

    /// Fade the owned ripple out and release it.
    ///
    /// Its visual is removed after the spread duration. Returns false when
    /// no ripple is owned.
    pub fn stop_ripple(&mut self) -> bool {
        self.remove_current_ripple()
    }

    /// Map local input to ripple start and stop.
    pub fn on_input(&mut self, event: &InputEvent) {
        if !self.local_routed_events_enabled {
            return;
        }

        match *event {
            InputEvent::PointerPressed { position, buttons } => {
                if !self.is_feedback_enabled || !buttons.contains(PointerButtons::LEFT) {
                    return;
                }
                if !self.hit_test(position) {
                    return;
                }
                self.add_ripple(position);
            }
            InputEvent::PointerReleased { .. }
            | InputEvent::PointerCaptureLost
            | InputEvent::LostFocus => {
                self.is_canceled = true;
                self.remove_current_ripple();
            }
        }
    }

    fn add_ripple(&mut self, point: Point) -> bool {
        let Some(attachment) = &self.attachment else {
            return false;
        };
        if self.current.is_some() {
            return false;
        }

        self.is_canceled = false;

        let bounds = self.bounds();
        let origin = match self.feedback_origin {
            FeedbackOrigin::Center => bounds.center(),
            FeedbackOrigin::Cursor => point,
        };
        let info = RippleInfo {
            brush: self.feedback_brush,
            clip: RoundedRect::new(bounds, self.corner_radius),
            easing: self.config.easing.clone(),
            fade_duration: self.config.fade_duration,
            max_radius: RippleInfo::max_radius_for(bounds, origin, self.config.radius_multiplier),
            opacity: self.feedback_opacity,
            origin,
            spread_duration: self.config.spread_duration,
        };

        let visual = {
            let mut compositor = attachment.services.compositor.borrow_mut();
            let visual = compositor.create_custom_visual(Box::new(RippleHandler::new(info)));
            compositor.set_size(visual, self.size);
            compositor.add_child(attachment.container, visual);
            compositor.send_handler_message(visual, HandlerMessage::StartSpread);
            visual
        };
        self.current = Some(visual);
        log::debug!("ripple {:?} started at {:?}", self.id, origin);

        if self.is_canceled {
            log::debug!("ripple {:?} canceled during setup", self.id);
            self.remove_current_ripple();
        }
        true
    }

    fn remove_current_ripple(&mut self) -> bool {
        let Some(last) = self.current.take() else {
            return false;
        };
        let Some(attachment) = &self.attachment else {
            return false;
        };

        attachment
            .services
            .compositor
            .borrow_mut()
            .send_handler_message(last, HandlerMessage::StartFade);

        let compositor = Rc::clone(&attachment.services.compositor);
        let container = attachment.container;
        attachment.services.dispatcher.run_once(
            self.config.spread_duration,
            DispatcherPriority::Render,
            Box::new(move || {
                compositor.borrow_mut().remove_child(container, last);
            }),
        );
        log::debug!("ripple {:?} stopped", self.id);
        true
    }

    fn update_container_size(&mut self) {
        self.is_canceled = true;

        let Some(attachment) = &self.attachment else {
            return;
        };
        let mut compositor = attachment.services.compositor.borrow_mut();
        compositor.set_size(attachment.container, self.size);
        for child in compositor.children(attachment.container) {
            compositor.set_size(child, self.size);
        }
    }
}

impl std::fmt::Debug for Ripple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ripple")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("attached", &self.is_attached())
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
