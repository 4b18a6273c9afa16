//! Elevation levels and their composite shadows.
//!
//! An [`Elevation`] is the distance between two surfaces along the z-axis, in
//! density-independent pixels. It is visualized with three stacked shadows:
//! a sharp umbra, a softer penumbra and a wide ambient layer, each taken from
//! a fixed per-level preset table.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, RangeError};
use crate::primitives::{BoxShadow, BoxShadows, Color};

/// Alpha of the umbra layer (≈ 0.20).
pub const UMBRA_ALPHA: u8 = 51;
/// Alpha of the penumbra layer (≈ 0.14).
pub const PENUMBRA_ALPHA: u8 = 36;
/// Alpha of the ambient layer (≈ 0.12).
pub const AMBIENT_ALPHA: u8 = 31;

/// Highest supported elevation level.
pub const MAX_LEVEL: u8 = 24;

/// Offset x, offset y, blur radius, spread.
type PartialShadow = (f32, f32, f32, f32);

const UMBRA_PRESETS: [PartialShadow; 25] = [
    (0.0, 0.0, 0.0, 0.0),
    (0.0, 2.0, 1.0, -1.0),
    (0.0, 3.0, 1.0, -2.0),
    (0.0, 3.0, 3.0, -2.0),
    (0.0, 2.0, 4.0, -1.0),
    (0.0, 3.0, 5.0, -1.0),
    (0.0, 3.0, 5.0, -1.0),
    (0.0, 4.0, 5.0, -2.0),
    (0.0, 5.0, 5.0, -3.0),
    (0.0, 5.0, 6.0, -3.0),
    (0.0, 6.0, 6.0, -3.0),
    (0.0, 6.0, 7.0, -4.0),
    (0.0, 7.0, 8.0, -4.0),
    (0.0, 7.0, 8.0, -4.0),
    (0.0, 7.0, 9.0, -4.0),
    (0.0, 8.0, 9.0, -5.0),
    (0.0, 8.0, 10.0, -5.0),
    (0.0, 8.0, 11.0, -5.0),
    (0.0, 9.0, 11.0, -5.0),
    (0.0, 9.0, 12.0, -6.0),
    (0.0, 10.0, 13.0, -6.0),
    (0.0, 10.0, 13.0, -6.0),
    (0.0, 10.0, 14.0, -6.0),
    (0.0, 11.0, 14.0, -7.0),
    (0.0, 11.0, 15.0, -7.0),
];

const PENUMBRA_PRESETS: [PartialShadow; 25] = [
    (0.0, 0.0, 0.0, 0.0),
    (0.0, 1.0, 1.0, 0.0),
    (0.0, 2.0, 2.0, 0.0),
    (0.0, 3.0, 4.0, 0.0),
    (0.0, 4.0, 5.0, 0.0),
    (0.0, 5.0, 8.0, 0.0),
    (0.0, 6.0, 10.0, 0.0),
    (0.0, 7.0, 10.0, 1.0),
    (0.0, 8.0, 10.0, 1.0),
    (0.0, 9.0, 12.0, 1.0),
    (0.0, 10.0, 14.0, 1.0),
    (0.0, 11.0, 15.0, 1.0),
    (0.0, 12.0, 17.0, 2.0),
    (0.0, 13.0, 19.0, 2.0),
    (0.0, 14.0, 21.0, 2.0),
    (0.0, 15.0, 22.0, 2.0),
    (0.0, 16.0, 24.0, 2.0),
    (0.0, 17.0, 26.0, 2.0),
    (0.0, 18.0, 28.0, 2.0),
    (0.0, 19.0, 29.0, 2.0),
    (0.0, 20.0, 31.0, 3.0),
    (0.0, 21.0, 33.0, 3.0),
    (0.0, 22.0, 35.0, 3.0),
    (0.0, 23.0, 36.0, 3.0),
    (0.0, 24.0, 38.0, 3.0),
];

const AMBIENT_PRESETS: [PartialShadow; 25] = [
    (0.0, 0.0, 0.0, 0.0),
    (0.0, 1.0, 3.0, 0.0),
    (0.0, 1.0, 5.0, 0.0),
    (0.0, 1.0, 8.0, 0.0),
    (0.0, 1.0, 10.0, 0.0),
    (0.0, 1.0, 14.0, 0.0),
    (0.0, 1.0, 18.0, 0.0),
    (0.0, 2.0, 16.0, 1.0),
    (0.0, 3.0, 14.0, 2.0),
    (0.0, 3.0, 16.0, 2.0),
    (0.0, 4.0, 18.0, 3.0),
    (0.0, 4.0, 20.0, 3.0),
    (0.0, 5.0, 22.0, 4.0),
    (0.0, 5.0, 24.0, 4.0),
    (0.0, 5.0, 26.0, 4.0),
    (0.0, 6.0, 28.0, 5.0),
    (0.0, 6.0, 30.0, 5.0),
    (0.0, 6.0, 32.0, 5.0),
    (0.0, 7.0, 34.0, 6.0),
    (0.0, 7.0, 36.0, 6.0),
    (0.0, 8.0, 38.0, 7.0),
    (0.0, 8.0, 40.0, 7.0),
    (0.0, 8.0, 42.0, 7.0),
    (0.0, 9.0, 44.0, 8.0),
    (0.0, 9.0, 46.0, 8.0),
];

/// A distance from the front of one material surface to the front of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Elevation(u8);

impl Elevation {
    /// Flat on the surface beneath; casts no shadow.
    pub const ZERO: Elevation = Elevation(0);

    /// Fails when `value` is outside `0..=24`.
    pub fn new(value: i32) -> Result<Self, RangeError> {
        match u8::try_from(value) {
            Ok(level) if level <= MAX_LEVEL => Ok(Self(level)),
            _ => Err(RangeError::Elevation(i64::from(value))),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Creates the composite shadow that visualizes this elevation.
    ///
    /// All three layers use the RGB channels of `color`; the alpha of each
    /// layer is fixed. The umbra is the primary layer.
    pub fn to_box_shadows(&self, color: Color) -> BoxShadows {
        let level = usize::from(self.0);
        let umbra = to_box_shadow(UMBRA_PRESETS[level], color.with_alpha_u8(UMBRA_ALPHA));
        let penumbra = to_box_shadow(
            PENUMBRA_PRESETS[level],
            color.with_alpha_u8(PENUMBRA_ALPHA),
        );
        let ambient = to_box_shadow(AMBIENT_PRESETS[level], color.with_alpha_u8(AMBIENT_ALPHA));

        BoxShadows::new(umbra, vec![penumbra, ambient])
    }
}

fn to_box_shadow((x, y, blur, spread): PartialShadow, color: Color) -> BoxShadow {
    BoxShadow::new((x, y), blur, spread, color)
}

impl TryFrom<i32> for Elevation {
    type Error = RangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Elevation::new(value)
    }
}

impl From<Elevation> for u8 {
    fn from(elevation: Elevation) -> Self {
        elevation.0
    }
}

impl FromStr for Elevation {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|source| FormatError::InvalidInteger {
                kind: "Elevation",
                token: trimmed.to_string(),
                source,
            })?;

        let out_of_range = |value: i64| FormatError::OutOfRange {
            kind: "Elevation",
            source: RangeError::Elevation(value),
        };
        let value = i32::try_from(value).map_err(|_| out_of_range(value))?;
        Elevation::new(value).map_err(|source| FormatError::OutOfRange {
            kind: "Elevation",
            source,
        })
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert_eq!(Elevation::new(-1), Err(RangeError::Elevation(-1)));
        assert_eq!(Elevation::new(25), Err(RangeError::Elevation(25)));
        for level in 0..=24 {
            assert_eq!(Elevation::new(level).unwrap().value() as i32, level);
        }
    }

    #[test]
    fn test_box_shadows_have_three_layers() {
        let color = Color::from_hex(0x102030);
        for level in 0..=24 {
            let shadows = Elevation::new(level).unwrap().to_box_shadows(color);
            assert_eq!(shadows.len(), 3);
            let alphas: Vec<u8> = shadows.iter().map(|s| s.color.alpha_u8()).collect();
            assert_eq!(alphas, vec![UMBRA_ALPHA, PENUMBRA_ALPHA, AMBIENT_ALPHA]);
            for shadow in shadows.iter() {
                assert_eq!(shadow.color.r, color.r);
                assert_eq!(shadow.color.g, color.g);
                assert_eq!(shadow.color.b, color.b);
            }
        }
    }

    #[test]
    fn test_box_shadows_use_presets() {
        let shadows = Elevation::new(12).unwrap().to_box_shadows(Color::BLACK);
        let umbra = shadows.primary;
        assert_eq!(umbra.offset, (0.0, 7.0));
        assert_eq!(umbra.blur, 8.0);
        assert_eq!(umbra.spread, -4.0);

        let penumbra = shadows.rest[0];
        assert_eq!(penumbra.offset, (0.0, 12.0));
        assert_eq!(penumbra.blur, 17.0);
        assert_eq!(penumbra.spread, 2.0);

        let ambient = shadows.rest[1];
        assert_eq!(ambient.offset, (0.0, 5.0));
        assert_eq!(ambient.blur, 22.0);
        assert_eq!(ambient.spread, 4.0);
    }

    #[test]
    fn test_level_zero_has_no_extent() {
        let shadows = Elevation::default().to_box_shadows(Color::BLACK);
        for shadow in shadows.iter() {
            assert_eq!(shadow.offset, (0.0, 0.0));
            assert_eq!(shadow.blur, 0.0);
            assert_eq!(shadow.spread, 0.0);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("12".parse::<Elevation>(), Ok(Elevation::new(12).unwrap()));
        assert_eq!(" 3 ".parse::<Elevation>(), Ok(Elevation::new(3).unwrap()));
        assert!(matches!(
            "abc".parse::<Elevation>(),
            Err(FormatError::InvalidInteger { .. })
        ));
        assert!(matches!(
            "25".parse::<Elevation>(),
            Err(FormatError::OutOfRange {
                source: RangeError::Elevation(25),
                ..
            })
        ));
        assert!(matches!(
            "99999999999".parse::<Elevation>(),
            Err(FormatError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let elevation = Elevation::new(7).unwrap();
        assert_eq!(elevation.to_string().parse::<Elevation>(), Ok(elevation));
    }
}
