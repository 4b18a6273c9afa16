use std::cell::RefCell;
use std::rc::Rc;

use super::BoxShadowTarget;
use crate::host::ElementId;
use crate::media::Elevation;
use crate::primitives::{BoxShadows, Color};
use crate::props::{AttachedProperty, ObserverId, PropertyStore};

/// Shadow color; only its RGB channels are used.
pub const SHADOW_COLOR: AttachedProperty<Color> =
    AttachedProperty::new("Color", Color::TRANSPARENT);

pub const ELEVATION: AttachedProperty<Elevation> =
    AttachedProperty::new("Elevation", Elevation::ZERO);

pub fn apply_shadow<T>(store: &PropertyStore, element: ElementId, target: &mut T) -> BoxShadows
where
    T: BoxShadowTarget + ?Sized,
{
    let elevation = store.get(element, &ELEVATION);
    let color = store.get(element, &SHADOW_COLOR);
    let shadows = elevation.to_box_shadows(color);
    target.set_box_shadow(shadows.clone());
    shadows
}

/// Apply the shadow now and again whenever the element's elevation or
/// shadow color changes.
pub fn bind_shadow<T>(
    store: &mut PropertyStore,
    element: ElementId,
    target: Rc<RefCell<T>>,
) -> [ObserverId; 2]
where
    T: BoxShadowTarget + 'static,
{
    apply_shadow(store, element, &mut *target.borrow_mut());

    let refresh = Rc::new(move |store: &PropertyStore, changed: ElementId| {
        if changed != element {
            return;
        }
        match target.try_borrow_mut() {
            Ok(mut target) => {
                apply_shadow(store, element, &mut *target);
            }
            Err(_) => log::warn!("shadow target of {:?} is busy, skipping update", element),
        }
    });

    let on_color = refresh.clone();
    [
        store.observe(&ELEVATION, move |store, changed, _, _| refresh(store, changed)),
        store.observe(&SHADOW_COLOR, move |store, changed, _, _| on_color(store, changed)),
    ]
}
