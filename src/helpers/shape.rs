use std::cell::RefCell;
use std::rc::Rc;

use super::CornerRadiusTarget;
use crate::host::ElementId;
use crate::media::Shape;
use crate::primitives::CornerRadius;
use crate::props::{AttachedProperty, ObserverId, PropertyStore};

pub const SHAPE: AttachedProperty<Shape> = AttachedProperty::new("Shape", Shape::RECTANGLE);

/// Upper bound per corner on the resolved [`SHAPE`]; the mask can only
/// lessen a corner.
pub const SHAPE_MASK: AttachedProperty<Shape> = AttachedProperty::new("ShapeMask", Shape::CIRCULAR);

/// Resolve the element's shape against its current bounds and push the
/// result to `target`.
///
/// Hosts call this again whenever the element's size changes.
pub fn apply_shape<T>(store: &PropertyStore, element: ElementId, target: &mut T) -> CornerRadius
where
    T: CornerRadiusTarget + ?Sized,
{
    let shape = store.get(element, &SHAPE);
    let mask = store.get(element, &SHAPE_MASK);
    let radius = shape.to_corner_radius_masked(target.bounds(), &mask);
    target.set_corner_radius(radius);
    radius
}

/// Apply the shape now and again whenever the element's shape or mask
/// changes.
pub fn bind_shape<T>(
    store: &mut PropertyStore,
    element: ElementId,
    target: Rc<RefCell<T>>,
) -> [ObserverId; 2]
where
    T: CornerRadiusTarget + 'static,
{
    apply_shape(store, element, &mut *target.borrow_mut());

    let observer = move |store: &PropertyStore, changed: ElementId, _: &Shape, _: &Shape| {
        if changed != element {
            return;
        }
        match target.try_borrow_mut() {
            Ok(mut target) => {
                apply_shape(store, element, &mut *target);
            }
            Err(_) => log::warn!("shape target of {:?} is busy, skipping update", element),
        }
    };
    [
        store.observe(&SHAPE, observer.clone()),
        store.observe(&SHAPE_MASK, observer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Corner;
    use crate::primitives::Size;

    #[derive(Default)]
    struct Border {
        size: Size,
        radius: CornerRadius,
        updates: usize,
    }

    impl CornerRadiusTarget for Border {
        fn bounds(&self) -> Size {
            self.size
        }

        fn set_corner_radius(&mut self, radius: CornerRadius) {
            self.radius = radius;
            self.updates += 1;
        }
    }

    #[test]
    fn test_apply_uses_bounds_and_mask() {
        let mut store = PropertyStore::new();
        let element = ElementId::new(1);
        let mut border = Border {
            size: Size::new(100.0, 40.0),
            ..Border::default()
        };

        store.set(element, &SHAPE, Shape::CIRCULAR);
        assert_eq!(
            apply_shape(&store, element, &mut border),
            CornerRadius::uniform(20.0)
        );

        store.set(element, &SHAPE_MASK, Shape::vertical(Corner::Circular, 4.0).unwrap());
        assert_eq!(
            apply_shape(&store, element, &mut border),
            CornerRadius::new(20.0, 20.0, 4.0, 4.0)
        );
        assert_eq!(border.radius, CornerRadius::new(20.0, 20.0, 4.0, 4.0));
    }

    #[test]
    fn test_default_shape_is_square() {
        let store = PropertyStore::new();
        let mut border = Border {
            size: Size::new(10.0, 10.0),
            ..Border::default()
        };
        assert_eq!(
            apply_shape(&store, ElementId::new(1), &mut border),
            CornerRadius::default()
        );
    }

    #[test]
    fn test_bind_tracks_changes() {
        let mut store = PropertyStore::new();
        let element = ElementId::new(1);
        let other = ElementId::new(2);
        let border = Rc::new(RefCell::new(Border {
            size: Size::new(40.0, 40.0),
            ..Border::default()
        }));

        bind_shape(&mut store, element, border.clone());
        assert_eq!(border.borrow().updates, 1);

        store.set(element, &SHAPE, Shape::uniform(8.0).unwrap());
        assert_eq!(border.borrow().radius, CornerRadius::uniform(8.0));

        store.set(element, &SHAPE_MASK, Shape::uniform(2.0).unwrap());
        assert_eq!(border.borrow().radius, CornerRadius::uniform(2.0));

        // Other elements do not touch this target
        store.set(other, &SHAPE, Shape::CIRCULAR);
        assert_eq!(border.borrow().updates, 3);
    }
}
