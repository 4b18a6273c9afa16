//! Visual value types: corner shapes, elevation shadows and text casing.

mod casing;
mod elevation;
mod shape;

pub use casing::Casing;
pub use elevation::{Elevation, AMBIENT_ALPHA, MAX_LEVEL, PENUMBRA_ALPHA, UMBRA_ALPHA};
pub use shape::{Corner, Shape};
