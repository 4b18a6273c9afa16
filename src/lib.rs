//! Material Design engines for desktop UI toolkits.
//!
//! - [`controls::Ripple`] and [`controls::StateLayer`]: press ripples and
//!   additive hover/focus/press/drag overlays, driven through the
//!   [`host`] capability traits.
//! - [`media::Elevation`] and [`media::Shape`]: elevation levels resolved to
//!   composite shadows, and per-corner shapes resolved to corner radii.
//! - [`props`] and [`helpers`]: attach shapes, shadows and casing to host
//!   elements the caller does not own.
//!
//! [`platform::Headless`] implements every host trait in memory, for tests
//! and for hosts that render the recorded draw commands themselves.

pub mod animation;
pub mod controls;
pub mod error;
pub mod helpers;
pub mod host;
pub mod media;
pub mod platform;
pub mod primitives;
pub mod props;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animation::Easing;
    pub use crate::controls::{
        FeedbackOrigin, Ripple, RippleConfig, StateFlags, StateLayer, StateOpacities,
    };
    pub use crate::error::{Error, FormatError, RangeError, Result};
    pub use crate::helpers::{BoxShadowTarget, CornerRadiusTarget};
    pub use crate::host::{ElementId, InputEvent, PointerButtons, RoutedEvent, Services};
    pub use crate::media::{Casing, Corner, Elevation, Shape};
    pub use crate::primitives::{
        BoxShadow, BoxShadows, Color, CornerRadius, Point, Rect, RoundedRect, Size,
    };
    pub use crate::props::{AttachedProperty, PropertyStore};
}
