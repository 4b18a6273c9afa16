mod easing;

pub use easing::Easing;
