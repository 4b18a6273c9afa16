use std::cell::RefCell;
use std::rc::Rc;

use sy_material::helpers::{bind_shadow, bind_shape, ELEVATION, SHADOW_COLOR, SHAPE, SHAPE_MASK};
use sy_material::prelude::*;

/// Stand-in for a host border element.
#[derive(Default)]
struct Surface {
    size: Size,
    radius: CornerRadius,
    shadows: Option<BoxShadows>,
}

impl CornerRadiusTarget for Surface {
    fn bounds(&self) -> Size {
        self.size
    }

    fn set_corner_radius(&mut self, radius: CornerRadius) {
        self.radius = radius;
    }
}

impl BoxShadowTarget for Surface {
    fn set_box_shadow(&mut self, shadows: BoxShadows) {
        self.shadows = Some(shadows);
    }
}

#[test]
fn test_radius_never_exceeds_half_min_side() {
    let shapes: Vec<Shape> = ["0", "4", "C", "12 C", "6 9.4 2.0 C", "1000 0 C 3"]
        .iter()
        .map(|literal| literal.parse().unwrap())
        .collect();
    let sizes = [
        Size::new(0.0, 0.0),
        Size::new(10.0, 300.0),
        Size::new(48.0, 48.0),
        Size::new(640.0, 32.0),
    ];

    for shape in &shapes {
        for mask in &shapes {
            for size in sizes {
                let unmasked = shape.to_corner_radius(size).to_array();
                let masked = shape.to_corner_radius_masked(size, mask).to_array();
                for (before, after) in unmasked.iter().zip(masked) {
                    assert!(*before <= size.min_side() / 2.0);
                    assert!(after <= *before);
                }
            }
        }
    }
}

#[test]
fn test_elevation_levels() {
    assert!(Elevation::new(-1).is_err());
    assert!(Elevation::new(25).is_err());
    assert_eq!("12".parse::<Elevation>(), Ok(Elevation::new(12).unwrap()));
    assert!("abc".parse::<Elevation>().is_err());

    for level in 0..=24 {
        let shadows = Elevation::new(level)
            .unwrap()
            .to_box_shadows(Color::BLACK);
        let alphas: Vec<u8> = shadows.iter().map(|s| s.color.alpha_u8()).collect();
        assert_eq!(alphas, vec![51, 36, 31]);
    }
}

#[test]
fn test_helpers_restyle_a_host_surface() {
    let mut store = PropertyStore::new();
    let card = ElementId::new(1);
    let surface = Rc::new(RefCell::new(Surface {
        size: Size::new(200.0, 80.0),
        ..Surface::default()
    }));
    bind_shape(&mut store, card, surface.clone());
    bind_shadow(&mut store, card, surface.clone());

    store.set(card, &SHAPE, "12 C".parse().unwrap());
    assert_eq!(
        surface.borrow().radius,
        CornerRadius::new(12.0, 12.0, 40.0, 40.0)
    );

    store.set(card, &SHAPE_MASK, Shape::uniform(16.0).unwrap());
    assert_eq!(
        surface.borrow().radius,
        CornerRadius::new(12.0, 12.0, 16.0, 16.0)
    );

    store.set(card, &ELEVATION, Elevation::new(1).unwrap());
    store.set(card, &SHADOW_COLOR, Color::from_hex(0x000000));
    let surface = surface.borrow();
    let shadows = surface.shadows.as_ref().unwrap();
    assert_eq!(shadows.primary.offset, (0.0, 2.0));
    assert_eq!(shadows.primary.blur, 1.0);
    assert_eq!(shadows.primary.spread, -1.0);
}
