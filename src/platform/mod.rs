//! Headless implementations of the host surface.
//!
//! [`Headless`] bundles a [`SoftwareCompositor`], a [`TimerQueue`], an
//! [`EventRouter`] and an [`ElementTable`] behind one clock. Tests and
//! demos drive time explicitly with [`Headless::advance`]:
//!
//! ```
//! use std::time::Duration;
//! use sy_material::controls::Ripple;
//! use sy_material::host::ElementId;
//! use sy_material::platform::Headless;
//! use sy_material::primitives::{Point, Size};
//!
//! let headless = Headless::new();
//! let mut ripple = Ripple::new(ElementId::new(1));
//! ripple.set_size(Size::new(120.0, 40.0));
//! ripple.attach(headless.services());
//!
//! ripple.start_ripple(Point::new(20.0, 20.0));
//! headless.advance(Duration::from_millis(16));
//! let frame = headless.advance(Duration::from_millis(32));
//! assert_eq!(frame.ellipses().count(), 1);
//! ```

mod compositor;
mod elements;
mod recording;
mod router;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub use compositor::{Frame, RenderedVisual, SoftwareCompositor};
pub use elements::{ElementEntry, ElementTable};
pub use recording::{DrawCommand, EllipseCommand, RecordingContext};
pub use router::EventRouter;
pub use timers::TimerQueue;

use crate::host::Services;

/// A complete in-memory host.
#[derive(Clone, Default)]
pub struct Headless {
    pub compositor: Rc<RefCell<SoftwareCompositor>>,
    pub timers: Rc<TimerQueue>,
    pub router: Rc<EventRouter>,
    pub elements: Rc<ElementTable>,
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles to pass to [`crate::controls::Ripple::attach`].
    pub fn services(&self) -> Services {
        Services {
            compositor: self.compositor.clone(),
            dispatcher: self.timers.clone(),
            events: self.router.clone(),
            tree: self.elements.clone(),
        }
    }

    /// Run due dispatcher tasks, then compose one frame at `now`.
    pub fn advance(&self, now: Duration) -> Frame {
        self.timers.advance_to(now);
        self.compositor.borrow_mut().tick(now)
    }
}
