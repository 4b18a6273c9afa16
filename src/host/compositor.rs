use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{DrawingContext, ElementId, VisualId};
use crate::primitives::Size;

/// Messages posted to a custom visual's handler.
///
/// Messages are triggers, not queued work: handlers react to the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerMessage {
    StartSpread,
    StartFade,
}

/// What a handler asked of the compositor during a callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRequests {
    next_frame: bool,
    invalidated: bool,
}

impl FrameRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask to be called again on the next animation frame.
    pub fn register_for_next_animation_frame_update(&mut self) {
        self.next_frame = true;
    }

    /// Ask for `on_render` to run this frame.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    pub fn wants_next_frame(&self) -> bool {
        self.next_frame
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }
}

/// Drives a custom-drawn visual.
///
/// A handler that stops registering for the next frame stops being called;
/// that is the only way an animation ends.
pub trait VisualHandler {
    fn on_message(&mut self, message: HandlerMessage, frame: &mut FrameRequests);

    fn on_animation_frame_update(&mut self, frame: &mut FrameRequests);

    /// `now` is the compositor's monotonic composition time.
    fn on_render(&mut self, ctx: &mut dyn DrawingContext, now: Duration);
}

pub trait Compositor {
    fn create_container_visual(&mut self) -> VisualId;

    fn create_custom_visual(&mut self, handler: Box<dyn VisualHandler>) -> VisualId;

    fn set_size(&mut self, visual: VisualId, size: Size);

    fn add_child(&mut self, container: VisualId, child: VisualId);

    /// Detaches and destroys `child`. Returns false if it was not a child.
    fn remove_child(&mut self, container: VisualId, child: VisualId) -> bool;

    fn children(&self, container: VisualId) -> Vec<VisualId>;

    /// Post a message to a custom visual's handler.
    fn send_handler_message(&mut self, visual: VisualId, message: HandlerMessage);

    /// Layer `visual` above the element's own content, or remove the layer.
    fn set_element_child_visual(&mut self, element: ElementId, visual: Option<VisualId>);
}

pub type SharedCompositor = Rc<RefCell<dyn Compositor>>;
