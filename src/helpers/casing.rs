use std::borrow::Cow;

use crate::host::ElementId;
use crate::media::Casing;
use crate::props::{AttachedProperty, PropertyStore};

/// Character casing applied to an element's text content.
pub const CONTENT_CASING: AttachedProperty<Casing> =
    AttachedProperty::new("ContentCharacterCasing", Casing::Normal);

/// `content` as the element should display it.
pub fn apply_casing<'a>(store: &PropertyStore, element: ElementId, content: &'a str) -> Cow<'a, str> {
    store.get(element, &CONTENT_CASING).apply(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_casing() {
        let mut store = PropertyStore::new();
        let button = ElementId::new(1);
        assert!(matches!(apply_casing(&store, button, "Save"), Cow::Borrowed("Save")));

        store.set(button, &CONTENT_CASING, Casing::Upper);
        assert_eq!(apply_casing(&store, button, "Save"), "SAVE");
        store.set(button, &CONTENT_CASING, Casing::Lower);
        assert_eq!(apply_casing(&store, button, "Save"), "save");
    }
}
