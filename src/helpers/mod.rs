//! Attached properties that restyle arbitrary host elements.
//!
//! Each helper pairs a few [`AttachedProperty`](crate::props::AttachedProperty)
//! keys with an `apply_*` function and a `bind_*` function. The functions work
//! over small capability traits, so any host element type that can report its
//! bounds or accept a corner radius or shadow can be styled.

mod casing;
mod shadow;
mod shape;

pub use casing::{apply_casing, CONTENT_CASING};
pub use shadow::{apply_shadow, bind_shadow, ELEVATION, SHADOW_COLOR};
pub use shape::{apply_shape, bind_shape, SHAPE, SHAPE_MASK};

use crate::primitives::{BoxShadows, CornerRadius, Size};

/// An element whose corners can be rounded.
pub trait CornerRadiusTarget {
    /// Current layout size.
    fn bounds(&self) -> Size;

    fn set_corner_radius(&mut self, radius: CornerRadius);
}

/// An element that can cast a composite shadow.
pub trait BoxShadowTarget {
    fn set_box_shadow(&mut self, shadows: BoxShadows);
}
