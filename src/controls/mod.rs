//! Interactive controls built on the host surface.

mod ripple;
mod state_layer;

pub use ripple::{
    FeedbackOrigin, Ripple, RippleConfig, RippleHandler, RippleInfo, DEFAULT_FEEDBACK_OPACITY,
    FADE_DURATION, MAX_RADIUS_MULTIPLIER, SPREAD_DURATION,
};
pub use state_layer::{
    RemoteControl, SharedStateLayer, StateFlags, StateLayer, StateOpacities, DEFAULT_DRAG_OPACITY,
    DEFAULT_FOCUS_OPACITY, DEFAULT_HOVER_OPACITY,
};
