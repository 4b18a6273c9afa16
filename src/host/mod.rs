//! The capability surface the engines call into.
//!
//! The ripple and state-layer engines do not own a property system, a
//! visual tree or a renderer. They reach the host toolkit only through the
//! traits in this module:
//!
//! - [`Compositor`]: container and custom-drawn visuals, handler messages
//! - [`VisualHandler`] + [`DrawingContext`]: per-frame callback and
//!   immediate-mode drawing
//! - [`Dispatcher`]: one-shot deferred callbacks on the UI thread
//! - [`RoutedEvents`]: subscribing to another element's input events
//! - [`ElementTree`]: names, templated parents and coordinate translation
//!
//! [`crate::platform`] provides headless implementations of all of them.

mod compositor;
mod dispatcher;
mod drawing;
mod events;
mod tree;

use std::fmt;
use std::rc::Rc;

pub use compositor::{
    Compositor, FrameRequests, HandlerMessage, SharedCompositor, VisualHandler,
};
pub use dispatcher::{Dispatcher, DispatcherPriority, SharedDispatcher};
pub use drawing::{push_clip, push_opacity, ClipScope, DrawingContext, OpacityScope};
pub use events::{
    HandlerToken, InputEvent, PointerButtons, RoutedEvent, RoutedEvents, RoutedHandler,
};
pub use tree::ElementTree;

/// Identity of an element (control) in the host's visual tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Identity of a compositor visual.
///
/// Compositors usually pack a slot index and a generation counter into the
/// raw value so stale ids never alias a reused slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VisualId(u64);

impl VisualId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Host handles a control receives when it is attached to the visual tree.
#[derive(Clone)]
pub struct Services {
    pub compositor: SharedCompositor,
    pub dispatcher: SharedDispatcher,
    pub events: Rc<dyn RoutedEvents>,
    pub tree: Rc<dyn ElementTree>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
