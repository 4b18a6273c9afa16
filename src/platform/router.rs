use std::cell::{Cell, RefCell};

use crate::host::{ElementId, HandlerToken, RoutedEvent, RoutedEvents, RoutedHandler};

struct Subscription {
    token: HandlerToken,
    element: ElementId,
    handled_events_too: bool,
    handler: RoutedHandler,
}

/// Delivers routed events to handlers subscribed on an element.
///
/// The host raises an event once per element on its route; the router only
/// decides which subscribers of that element see it.
#[derive(Default)]
pub struct EventRouter {
    next_token: Cell<u64>,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler_count(&self, element: ElementId) -> usize {
        self.subscriptions
            .borrow()
            .iter()
            .filter(|s| s.element == element)
            .count()
    }

    /// Deliver `event` to the subscribers of `element`. Returns how many
    /// handlers ran.
    ///
    /// Handlers may subscribe or unsubscribe while the event is delivered;
    /// changes take effect for the next event.
    pub fn raise(&self, element: ElementId, event: &RoutedEvent) -> usize {
        let handlers: Vec<RoutedHandler> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.element == element && (s.handled_events_too || !event.handled))
            .map(|s| s.handler.clone())
            .collect();

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }
}

impl RoutedEvents for EventRouter {
    fn add_handler(
        &self,
        element: ElementId,
        handled_events_too: bool,
        handler: RoutedHandler,
    ) -> HandlerToken {
        let token = HandlerToken::new(self.next_token.get());
        self.next_token.set(token.as_u64() + 1);
        self.subscriptions.borrow_mut().push(Subscription {
            token,
            element,
            handled_events_too,
            handler,
        });
        token
    }

    fn remove_handler(&self, token: HandlerToken) -> bool {
        let mut subscriptions = self.subscriptions.borrow_mut();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.token != token);
        subscriptions.len() != before
    }
}
