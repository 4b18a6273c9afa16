use std::rc::Rc;
use std::time::Duration;

/// Ordering among callbacks that fall due at the same instant.
/// Higher priorities run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DispatcherPriority {
    Background,
    Input,
    Default,
    Render,
    Send,
}

/// One-shot deferred execution on the UI thread.
pub trait Dispatcher {
    /// Run `task` once after `delay`. Scheduled tasks cannot be cancelled.
    fn run_once(&self, delay: Duration, priority: DispatcherPriority, task: Box<dyn FnOnce()>);
}

pub type SharedDispatcher = Rc<dyn Dispatcher>;
