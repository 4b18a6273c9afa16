//! Per-corner rounding of a surface.
//!
//! A [`Shape`] describes how each corner of a rectangular surface is rounded
//! without knowing the surface's size. A corner is either a fixed radius in
//! logical pixels or [`Corner::Circular`], which always resolves to the
//! largest radius the surface allows. Concrete radii are produced at render
//! time by [`Shape::to_corner_radius`].
//!
//! # Masking
//!
//! A mask shape can only reduce radii. A circular mask corner imposes no
//! restriction.
//!
//! ```text
//! Corner     TL       TR       BR       BL
//!  Shape     12       12    Circular    24
//!   Mask  Circular    24       12       12
//! ------  -------- -------- -------- --------
//! Output     12       12       12       12
//! ```
//! (for a surface whose shorter side is at least 48)
//!
//! # Literal form
//!
//! ```
//! use sy_material::media::{Corner, Shape};
//!
//! let shape: Shape = "6 9.4 2.0 C".parse().unwrap();
//! assert_eq!(shape.top_left(), Corner::Fixed(6.0));
//! assert_eq!(shape.bottom_left(), Corner::Circular);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, RangeError};
use crate::primitives::{CornerRadius, Size};

const CIRCULAR_SHORT_NAME: &str = "C";
const CIRCULAR_LONG_NAME: &str = "Circular";

/// One corner of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Corner {
    /// Radius in logical pixels, never negative.
    Fixed(f32),
    /// Fully rounded regardless of the surface size.
    Circular,
}

impl Corner {
    pub const ZERO: Corner = Corner::Fixed(0.0);

    fn checked(self, name: &'static str) -> Result<Self, RangeError> {
        match self {
            Corner::Fixed(value) if value.is_nan() => Err(RangeError::NanCorner { corner: name }),
            Corner::Fixed(value) if value < 0.0 => Err(RangeError::NegativeCorner {
                corner: name,
                value,
            }),
            // An infinite radius is how a circular corner reads back from plain numbers
            Corner::Fixed(value) if value.is_infinite() => Ok(Corner::Circular),
            corner => Ok(corner),
        }
    }

    /// Radius capped at `max`.
    fn clamp_to(self, max: f32) -> f32 {
        match self {
            Corner::Fixed(value) if value <= max => value,
            _ => max,
        }
    }

    fn parse_token(token: &str) -> Result<Self, FormatError> {
        if token.eq_ignore_ascii_case(CIRCULAR_LONG_NAME)
            || token.eq_ignore_ascii_case(CIRCULAR_SHORT_NAME)
        {
            return Ok(Corner::Circular);
        }
        token
            .parse::<f32>()
            .map(Corner::Fixed)
            .map_err(|source| FormatError::InvalidNumber {
                kind: "Shape",
                token: token.to_string(),
                source,
            })
    }
}

impl Default for Corner {
    fn default() -> Self {
        Corner::ZERO
    }
}

impl From<f32> for Corner {
    fn from(value: f32) -> Self {
        if value.is_infinite() && value > 0.0 {
            Corner::Circular
        } else {
            Corner::Fixed(value)
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::Fixed(value) => write!(f, "{}", value),
            Corner::Circular => f.write_str(CIRCULAR_SHORT_NAME),
        }
    }
}

/// Radii of a rectangle's corners, allowing fully circular corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shape {
    top_left: Corner,
    top_right: Corner,
    bottom_right: Corner,
    bottom_left: Corner,
}

impl Shape {
    /// A shape where all corners are circular.
    pub const CIRCULAR: Shape = Shape {
        top_left: Corner::Circular,
        top_right: Corner::Circular,
        bottom_right: Corner::Circular,
        bottom_left: Corner::Circular,
    };

    /// A rectangular shape.
    pub const RECTANGLE: Shape = Shape {
        top_left: Corner::ZERO,
        top_right: Corner::ZERO,
        bottom_right: Corner::ZERO,
        bottom_left: Corner::ZERO,
    };

    pub fn new(
        top_left: impl Into<Corner>,
        top_right: impl Into<Corner>,
        bottom_right: impl Into<Corner>,
        bottom_left: impl Into<Corner>,
    ) -> Result<Self, RangeError> {
        Ok(Self {
            top_left: top_left.into().checked("top_left")?,
            top_right: top_right.into().checked("top_right")?,
            bottom_right: bottom_right.into().checked("bottom_right")?,
            bottom_left: bottom_left.into().checked("bottom_left")?,
        })
    }

    /// The same corner on all four sides.
    pub fn uniform(corner: impl Into<Corner>) -> Result<Self, RangeError> {
        let corner = corner.into().checked("uniform")?;
        Ok(Self {
            top_left: corner,
            top_right: corner,
            bottom_right: corner,
            bottom_left: corner,
        })
    }

    /// One corner for both top corners and one for both bottom corners.
    pub fn vertical(top: impl Into<Corner>, bottom: impl Into<Corner>) -> Result<Self, RangeError> {
        let top = top.into().checked("top")?;
        let bottom = bottom.into().checked("bottom")?;
        Ok(Self {
            top_left: top,
            top_right: top,
            bottom_right: bottom,
            bottom_left: bottom,
        })
    }

    pub fn top_left(&self) -> Corner {
        self.top_left
    }

    pub fn top_right(&self) -> Corner {
        self.top_right
    }

    pub fn bottom_right(&self) -> Corner {
        self.bottom_right
    }

    pub fn bottom_left(&self) -> Corner {
        self.bottom_left
    }

    /// Corners in `[top_left, top_right, bottom_right, bottom_left]` order.
    pub fn corners(&self) -> [Corner; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Resolve to concrete radii for a surface of `size`, with no mask.
    pub fn to_corner_radius(&self, size: Size) -> CornerRadius {
        self.to_corner_radius_masked(size, &Shape::CIRCULAR)
    }

    /// Resolve to concrete radii for a surface of `size`.
    ///
    /// Each radius is first capped at half of the shorter side, then lowered to
    /// the mask's corresponding corner when that corner is fixed and smaller.
    pub fn to_corner_radius_masked(&self, size: Size, mask: &Shape) -> CornerRadius {
        let half = size.min_side() / 2.0;

        let mut radii = [0.0; 4];
        for (radius, (corner, mask_corner)) in radii
            .iter_mut()
            .zip(self.corners().into_iter().zip(mask.corners()))
        {
            *radius = corner.clamp_to(half);
            if let Corner::Fixed(limit) = mask_corner {
                if limit < *radius {
                    *radius = limit;
                }
            }
        }

        CornerRadius::from(radii)
    }
}

impl FromStr for Shape {
    type Err = FormatError;

    /// Reads `[uniform]`, `[top] [bottom]`, or
    /// `[top_left] [top_right] [bottom_right] [bottom_left]`.
    ///
    /// Tokens are numbers, or `Circular` / `C` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();

        let shape = match tokens.as_slice() {
            [] => return Err(FormatError::Empty { kind: "Shape" }),
            [uniform] => Shape::uniform(Corner::parse_token(uniform)?),
            [top, bottom] => {
                Shape::vertical(Corner::parse_token(top)?, Corner::parse_token(bottom)?)
            }
            [tl, tr, br, bl, ..] => Shape::new(
                Corner::parse_token(tl)?,
                Corner::parse_token(tr)?,
                Corner::parse_token(br)?,
                Corner::parse_token(bl)?,
            ),
            other => {
                return Err(FormatError::TokenCount {
                    kind: "Shape",
                    expected: 4,
                    found: other.len(),
                })
            }
        };

        shape.map_err(|source| FormatError::OutOfRange {
            kind: "Shape",
            source,
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let uniform_top = self.top_left == self.top_right;
        let uniform_bottom = self.bottom_left == self.bottom_right;
        if uniform_top && uniform_bottom {
            if self.top_left == self.bottom_left {
                return write!(f, "{}", self.top_left);
            }
            return write!(f, "{} {}", self.top_left, self.bottom_left);
        }
        write!(
            f,
            "{} {} {} {}",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

impl TryFrom<f32> for Shape {
    type Error = RangeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Shape::uniform(value)
    }
}
