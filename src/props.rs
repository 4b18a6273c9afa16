//! Typed values attached to elements the caller does not own.
//!
//! An [`AttachedProperty`] is a key with a name, a value type and a default.
//! A [`PropertyStore`] maps `(element, property)` to values and notifies
//! observers with the old and new value whenever one changes.
//!
//! ```
//! use sy_material::host::ElementId;
//! use sy_material::props::{AttachedProperty, PropertyStore};
//!
//! const BASELINE_OFFSET: AttachedProperty<f32> = AttachedProperty::new("BaselineOffset", 0.0);
//!
//! let mut store = PropertyStore::new();
//! let label = ElementId::new(1);
//! assert_eq!(store.get(label, &BASELINE_OFFSET), 0.0);
//! store.set(label, &BASELINE_OFFSET, 2.5);
//! assert_eq!(store.get(label, &BASELINE_OFFSET), 2.5);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::host::ElementId;

pub struct AttachedProperty<T> {
    name: &'static str,
    default: T,
}

impl<T> AttachedProperty<T> {
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T: 'static> AttachedProperty<T> {
    fn key(&self) -> PropertyKey {
        PropertyKey {
            name: self.name,
            type_id: TypeId::of::<T>(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AttachedProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedProperty")
            .field("name", &self.name)
            .field("default", &self.default)
            .finish()
    }
}

/// Properties with the same name but different value types are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PropertyKey {
    name: &'static str,
    type_id: TypeId,
}

/// Registration returned by [`PropertyStore::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type ObserverFn<T> = dyn Fn(&PropertyStore, ElementId, &T, &T);

/// Wrapper so the observer can live behind `dyn Any`.
struct TypedObserver<T: 'static>(Box<ObserverFn<T>>);

struct Observer {
    id: ObserverId,
    key: PropertyKey,
    callback: Rc<dyn Any>,
}

#[derive(Default)]
pub struct PropertyStore {
    values: HashMap<(ElementId, PropertyKey), Box<dyn Any>>,
    observers: Vec<Observer>,
    next_observer: u64,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value set on `element`, or the property default.
    pub fn get<T: Clone + 'static>(&self, element: ElementId, property: &AttachedProperty<T>) -> T {
        self.values
            .get(&(element, property.key()))
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
            .unwrap_or_else(|| property.default.clone())
    }

    pub fn is_set<T: 'static>(&self, element: ElementId, property: &AttachedProperty<T>) -> bool {
        self.values.contains_key(&(element, property.key()))
    }

    /// Store `value` and notify observers if the effective value changed.
    /// Returns whether it changed.
    pub fn set<T: Clone + PartialEq + 'static>(
        &mut self,
        element: ElementId,
        property: &AttachedProperty<T>,
        value: T,
    ) -> bool {
        let old = self.get(element, property);
        self.values
            .insert((element, property.key()), Box::new(value.clone()));
        if old == value {
            return false;
        }
        self.notify(element, property, &old, &value);
        true
    }

    /// Drop the value set on `element`, falling back to the default.
    /// Returns whether the effective value changed.
    pub fn clear<T: Clone + PartialEq + 'static>(
        &mut self,
        element: ElementId,
        property: &AttachedProperty<T>,
    ) -> bool {
        let old = self.get(element, property);
        if self.values.remove(&(element, property.key())).is_none() {
            return false;
        }
        let new = property.default.clone();
        if old == new {
            return false;
        }
        self.notify(element, property, &old, &new);
        true
    }

    /// Forget every value attached to `element` without notifying.
    pub fn remove_element(&mut self, element: ElementId) {
        self.values.retain(|(owner, _), _| *owner != element);
    }

    /// Call `callback(store, element, old, new)` after every change of
    /// `property` on any element.
    pub fn observe<T, F>(&mut self, property: &AttachedProperty<T>, callback: F) -> ObserverId
    where
        T: 'static,
        F: Fn(&PropertyStore, ElementId, &T, &T) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push(Observer {
            id,
            key: property.key(),
            callback: Rc::new(TypedObserver::<T>(Box::new(callback))),
        });
        id
    }

    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id != id);
        self.observers.len() != before
    }

    fn notify<T: 'static>(
        &self,
        element: ElementId,
        property: &AttachedProperty<T>,
        old: &T,
        new: &T,
    ) {
        let key = property.key();
        let callbacks: Vec<Rc<dyn Any>> = self
            .observers
            .iter()
            .filter(|observer| observer.key == key)
            .map(|observer| observer.callback.clone())
            .collect();

        for callback in &callbacks {
            if let Some(TypedObserver(callback)) = callback.downcast_ref::<TypedObserver<T>>() {
                callback(self, element, old, new);
            }
        }
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("values", &self.values.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    const ELEVATION: AttachedProperty<i32> = AttachedProperty::new("Elevation", 0);
    const LABEL: AttachedProperty<&'static str> = AttachedProperty::new("Label", "none");

    #[test]
    fn test_default_until_set() {
        let mut store = PropertyStore::new();
        let element = ElementId::new(1);
        assert_eq!(store.get(element, &ELEVATION), 0);
        assert!(!store.is_set(element, &ELEVATION));

        assert!(store.set(element, &ELEVATION, 3));
        assert_eq!(store.get(element, &ELEVATION), 3);
        assert_eq!(store.get(ElementId::new(2), &ELEVATION), 0);
    }

    #[test]
    fn test_observers_see_old_and_new() {
        let mut store = PropertyStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        store.observe(&ELEVATION, move |store, element, old, new| {
            assert_eq!(store.get(element, &ELEVATION), *new);
            s.borrow_mut().push((element, *old, *new));
        });

        let element = ElementId::new(1);
        store.set(element, &ELEVATION, 2);
        // Same value: no notification
        assert!(!store.set(element, &ELEVATION, 2));
        store.clear(element, &ELEVATION);

        assert_eq!(*seen.borrow(), vec![(element, 0, 2), (element, 2, 0)]);
    }

    #[test]
    fn test_observers_are_per_property() {
        let mut store = PropertyStore::new();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = store.observe(&LABEL, move |_, _, _, _| *h.borrow_mut() += 1);

        store.set(ElementId::new(1), &ELEVATION, 5);
        assert_eq!(*hits.borrow(), 0);
        store.set(ElementId::new(1), &LABEL, "fab");
        assert_eq!(*hits.borrow(), 1);

        assert!(store.unobserve(id));
        store.set(ElementId::new(1), &LABEL, "card");
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_same_name_different_type() {
        const OTHER: AttachedProperty<f32> = AttachedProperty::new("Elevation", 1.5);
        let mut store = PropertyStore::new();
        let element = ElementId::new(1);
        store.set(element, &ELEVATION, 4);
        assert_eq!(store.get(element, &OTHER), 1.5);
    }

    #[test]
    fn test_remove_element() {
        let mut store = PropertyStore::new();
        let element = ElementId::new(1);
        store.set(element, &ELEVATION, 4);
        store.set(ElementId::new(2), &ELEVATION, 5);
        store.remove_element(element);
        assert!(!store.is_set(element, &ELEVATION));
        assert_eq!(store.get(ElementId::new(2), &ELEVATION), 5);
    }
}
