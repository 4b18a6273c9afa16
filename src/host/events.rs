use std::rc::Rc;

use bitflags::bitflags;

use super::ElementId;
use crate::primitives::Point;

bitflags! {
    /// Pointer buttons held down when an event was raised.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointerButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

/// Input delivered to a control. Positions are in the receiving control's
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerPressed {
        position: Point,
        buttons: PointerButtons,
    },
    PointerReleased {
        position: Point,
        buttons: PointerButtons,
    },
    PointerCaptureLost,
    LostFocus,
}

/// An input event as it bubbles through the element tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutedEvent {
    pub event: InputEvent,
    /// Element the event originated from. Positions are relative to it.
    pub source: ElementId,
    /// Whether an earlier handler marked the event as handled.
    pub handled: bool,
}

impl RoutedEvent {
    pub fn new(event: InputEvent, source: ElementId) -> Self {
        Self {
            event,
            source,
            handled: false,
        }
    }

    pub fn handled(mut self, handled: bool) -> Self {
        self.handled = handled;
        self
    }
}

pub type RoutedHandler = Rc<dyn Fn(&RoutedEvent)>;

/// Registration returned by [`RoutedEvents::add_handler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerToken(u64);

impl HandlerToken {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Subscription to routed input events raised on an element.
pub trait RoutedEvents {
    /// Subscribe to events raised on `element`. With `handled_events_too`
    /// the handler also sees events already marked handled.
    fn add_handler(
        &self,
        element: ElementId,
        handled_events_too: bool,
        handler: RoutedHandler,
    ) -> HandlerToken;

    fn remove_handler(&self, token: HandlerToken) -> bool;
}
