//! Translucent overlay communicating hover, focus, press and drag.
//!
//! A [`StateLayer`] is a [`Ripple`] that also computes an additive state
//! opacity from its interaction flags. It can be remote controlled: bound to
//! another element (usually the control whose template contains it), it
//! stops reacting to its own input and starts or stops ripples from that
//! element's routed events instead.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bitflags::bitflags;

use super::ripple::Ripple;
use crate::host::{
    ElementId, HandlerToken, InputEvent, PointerButtons, RoutedEvent, RoutedHandler, Services,
};
use crate::primitives::{Color, Point, Size};

pub const DEFAULT_HOVER_OPACITY: f32 = 0.08;
pub const DEFAULT_FOCUS_OPACITY: f32 = 0.1;
pub const DEFAULT_DRAG_OPACITY: f32 = 0.16;

bitflags! {
    /// Interaction states a layer is displaying.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u8 {
        const HOVERED = 1 << 0;
        const FOCUSED = 1 << 1;
        const PRESSED = 1 << 2;
        const DRAGGED = 1 << 3;
    }
}

/// Opacity contributed by each interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateOpacities {
    pub hover: f32,
    pub focus: f32,
    pub drag: f32,
}

impl Default for StateOpacities {
    fn default() -> Self {
        Self {
            hover: DEFAULT_HOVER_OPACITY,
            focus: DEFAULT_FOCUS_OPACITY,
            drag: DEFAULT_DRAG_OPACITY,
        }
    }
}

impl StateOpacities {
    /// Overlay opacity for `state`.
    ///
    /// Dragging overrides everything else. Otherwise the hover, focus and
    /// press contributions add up; a press only counts when ripple feedback
    /// is off, since the ripple already shows it. The sum is not clamped.
    pub fn compose(
        &self,
        state: StateFlags,
        feedback_opacity: f32,
        is_feedback_enabled: bool,
    ) -> f32 {
        if state.contains(StateFlags::DRAGGED) {
            return self.drag;
        }

        let mut opacity = 0.0;
        if state.contains(StateFlags::PRESSED) && !is_feedback_enabled {
            opacity += feedback_opacity;
        }
        if state.contains(StateFlags::FOCUSED) {
            opacity += self.focus;
        }
        if state.contains(StateFlags::HOVERED) {
            opacity += self.hover;
        }
        opacity
    }
}

/// Which element's input drives a layer's ripple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteControl {
    /// Element whose routed events are followed
    pub source: Option<ElementId>,
    /// Only the layer with this name (or inside a control with this name)
    /// follows the source
    pub target_name: Option<String>,
    /// Skip presses already handled in another template
    pub ignore_handled: bool,
}

pub type SharedStateLayer = Rc<RefCell<StateLayer>>;

/// State overlay of a control, optionally driven by another element's input.
pub struct StateLayer {
    this: Weak<RefCell<StateLayer>>,
    ripple: Ripple,
    name: Option<String>,
    state: StateFlags,
    opacities: StateOpacities,
    state_brush: Color,
    state_opacity: f32,
    rcon: RemoteControl,
    rcon_subscription: Option<HandlerToken>,
    is_rcon_enabled: bool,
    is_ripple_active: bool,
}

impl StateLayer {
    pub fn new(id: ElementId) -> SharedStateLayer {
        Self::with_ripple(Ripple::new(id))
    }

    pub fn with_ripple(ripple: Ripple) -> SharedStateLayer {
        Rc::new_cyclic(|this| {
            RefCell::new(StateLayer {
                this: this.clone(),
                ripple,
                name: None,
                state: StateFlags::empty(),
                opacities: StateOpacities::default(),
                state_brush: Color::TRANSPARENT,
                state_opacity: 0.0,
                rcon: RemoteControl::default(),
                rcon_subscription: None,
                is_rcon_enabled: false,
                is_ripple_active: false,
            })
        })
    }

    pub fn id(&self) -> ElementId {
        self.ripple.id()
    }

    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    /// Change ripple properties; the state opacity is recomputed afterwards.
    pub fn update_ripple<R>(&mut self, f: impl FnOnce(&mut Ripple) -> R) -> R {
        let result = f(&mut self.ripple);
        self.update_opacity();
        result
    }

    pub fn state(&self) -> StateFlags {
        self.state
    }

    pub fn set_state(&mut self, state: StateFlags) {
        self.state = state;
        self.update_opacity();
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.state.set(StateFlags::HOVERED, hovered);
        self.update_opacity();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.set(StateFlags::FOCUSED, focused);
        self.update_opacity();
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.state.set(StateFlags::PRESSED, pressed);
        self.update_opacity();
    }

    pub fn set_dragged(&mut self, dragged: bool) {
        self.state.set(StateFlags::DRAGGED, dragged);
        self.update_opacity();
    }

    pub fn opacities(&self) -> StateOpacities {
        self.opacities
    }

    pub fn set_opacities(&mut self, opacities: StateOpacities) {
        self.opacities = opacities;
        self.update_opacity();
    }

    pub fn state_brush(&self) -> Color {
        self.state_brush
    }

    pub fn set_state_brush(&mut self, brush: Color) {
        self.state_brush = brush;
    }

    /// Current overlay opacity.
    pub fn state_opacity(&self) -> f32 {
        self.state_opacity
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Overrides the host tree's name for this layer. Hosts call this from
    /// their name-changed notification so remote control scoping is rechecked.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
        self.check_rcon_source(None);
    }

    pub fn rcon(&self) -> &RemoteControl {
        &self.rcon
    }

    pub fn set_rcon_source(&mut self, source: Option<ElementId>) {
        let old = std::mem::replace(&mut self.rcon.source, source);
        self.check_rcon_source(old);
    }

    pub fn set_rcon_target_name(&mut self, target_name: Option<String>) {
        self.rcon.target_name = target_name;
        self.check_rcon_source(None);
    }

    pub fn set_rcon_ignore_handled(&mut self, ignore_handled: bool) {
        self.rcon.ignore_handled = ignore_handled;
    }

    /// Whether this layer currently follows its remote-control source.
    pub fn is_rcon_enabled(&self) -> bool {
        self.is_rcon_enabled
    }

    /// Whether a ripple started by the remote-control source is running.
    pub fn is_ripple_active(&self) -> bool {
        self.is_ripple_active
    }

    pub fn attach(&mut self, services: Services) {
        self.disable_rcon();
        self.ripple.attach(services);
        self.check_rcon_source(None);
    }

    pub fn detach(&mut self) {
        self.disable_rcon();
        self.ripple.detach();
    }

    pub fn set_size(&mut self, size: Size) {
        self.ripple.set_size(size);
    }

    pub fn start_ripple(&mut self, point: Point) -> bool {
        self.ripple.start_ripple(point)
    }

    pub fn stop_ripple(&mut self) -> bool {
        let stopped = self.ripple.stop_ripple();
        self.is_ripple_active = false;
        stopped
    }

    /// Input raised on this layer itself. Ignored while remote controlled.
    pub fn on_input(&mut self, event: &InputEvent) {
        self.ripple.on_input(event);
    }

    fn update_opacity(&mut self) {
        self.state_opacity = self.opacities.compose(
            self.state,
            self.ripple.feedback_opacity(),
            self.ripple.is_feedback_enabled(),
        );
    }

    /// Re-evaluate which source this layer follows.
    ///
    /// `old_source` is the source being replaced, if it changed.
    fn check_rcon_source(&mut self, old_source: Option<ElementId>) {
        if old_source.or(self.rcon.source).is_none() {
            return;
        }
        self.disable_rcon();

        let Some(source) = self.rcon.source else {
            return;
        };
        if self.is_rcon_target(source) {
            self.enable_rcon(source);
        }
    }

    fn is_rcon_target(&self, source: ElementId) -> bool {
        let Some(target_name) = self.rcon.target_name.as_deref() else {
            return true;
        };
        let Some(services) = self.ripple.services() else {
            return false;
        };

        let own_name = || match self.name() {
            Some(name) => name == target_name,
            None => services.tree.name(self.id()).as_deref() == Some(target_name),
        };

        match services.tree.templated_parent(self.id()) {
            Some(parent) if parent == source => own_name(),
            Some(parent) => services.tree.name(parent).as_deref() == Some(target_name),
            None => own_name(),
        }
    }

    fn enable_rcon(&mut self, source: ElementId) {
        let Some(services) = self.ripple.services() else {
            return;
        };

        let this = self.this.clone();
        let handler: RoutedHandler = Rc::new(move |event: &RoutedEvent| {
            let Some(layer) = this.upgrade() else {
                return;
            };
            let Ok(mut layer) = layer.try_borrow_mut() else {
                log::debug!("state layer busy, dropping remote {:?}", event.event);
                return;
            };
            layer.on_rcon_event(event);
        });
        let token = services.events.add_handler(source, true, handler);

        self.rcon_subscription = Some(token);
        self.is_rcon_enabled = true;
        self.ripple.set_local_routed_events_enabled(false);
        log::debug!("state layer {:?} follows {:?}", self.id(), source);
    }

    fn disable_rcon(&mut self) {
        if let Some(token) = self.rcon_subscription.take() {
            if let Some(services) = self.ripple.services() {
                services.events.remove_handler(token);
            }
        }
        self.ripple.stop_ripple();
        self.is_ripple_active = false;
        self.ripple.set_local_routed_events_enabled(true);
        if self.is_rcon_enabled {
            self.is_rcon_enabled = false;
            log::debug!("state layer {:?} stopped following its source", self.id());
        }
    }

    fn on_rcon_event(&mut self, routed: &RoutedEvent) {
        match routed.event {
            InputEvent::PointerPressed { position, buttons } => {
                self.on_rcon_pressed(routed, position, buttons)
            }
            InputEvent::PointerReleased { .. }
            | InputEvent::PointerCaptureLost
            | InputEvent::LostFocus => {
                if !self.is_ripple_active {
                    return;
                }
                self.ripple.stop_ripple();
                self.is_ripple_active = false;
            }
        }
    }

    fn on_rcon_pressed(&mut self, routed: &RoutedEvent, position: Point, buttons: PointerButtons) {
        let Some(services) = self.ripple.services().cloned() else {
            return;
        };
        let tree = &services.tree;
        let id = self.id();

        if !tree.is_effectively_enabled(id) || self.is_ripple_active {
            return;
        }

        if self.rcon.ignore_handled {
            let is_same_template = tree.template_root(id) == tree.template_root(routed.source);
            if !is_same_template && routed.handled {
                return;
            }
        }

        if !buttons.contains(PointerButtons::LEFT) {
            return;
        }

        let Some(origin) = tree.translate_point(position, routed.source, id) else {
            log::debug!("cannot map {:?} from {:?} into {:?}", position, routed.source, id);
            return;
        };
        self.is_ripple_active = self.ripple.start_ripple(origin);
    }
}

impl Drop for StateLayer {
    fn drop(&mut self) {
        if let Some(token) = self.rcon_subscription.take() {
            if let Some(services) = self.ripple.services() {
                services.events.remove_handler(token);
            }
        }
    }
}

impl std::fmt::Debug for StateLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateLayer")
            .field("ripple", &self.ripple)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("state_opacity", &self.state_opacity)
            .field("rcon", &self.rcon)
            .field("is_rcon_enabled", &self.is_rcon_enabled)
            .finish_non_exhaustive()
    }
}
