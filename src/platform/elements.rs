use std::cell::RefCell;
use std::collections::HashMap;

use crate::host::{ElementId, ElementTree};
use crate::primitives::Point;

/// Registration data for one element of an [`ElementTable`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementEntry {
    pub name: Option<String>,
    pub parent: Option<ElementId>,
    pub templated_parent: Option<ElementId>,
    /// Top-left corner in root coordinates
    pub origin: Point,
    pub is_enabled: bool,
}

impl ElementEntry {
    pub fn new() -> Self {
        Self {
            is_enabled: true,
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn parent(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn templated_parent(mut self, parent: ElementId) -> Self {
        self.templated_parent = Some(parent);
        self
    }

    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }
}

/// A flat [`ElementTree`] where every element is positioned in one root
/// coordinate space.
#[derive(Debug, Default)]
pub struct ElementTable {
    elements: RefCell<HashMap<ElementId, ElementEntry>>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: ElementId, entry: ElementEntry) {
        self.elements.borrow_mut().insert(id, entry);
    }

    pub fn remove(&self, id: ElementId) -> Option<ElementEntry> {
        self.elements.borrow_mut().remove(&id)
    }

    pub fn set_name(&self, id: ElementId, name: Option<String>) {
        if let Some(entry) = self.elements.borrow_mut().get_mut(&id) {
            entry.name = name;
        }
    }

    pub fn set_enabled(&self, id: ElementId, enabled: bool) {
        if let Some(entry) = self.elements.borrow_mut().get_mut(&id) {
            entry.is_enabled = enabled;
        }
    }

    fn origin(&self, id: ElementId) -> Option<Point> {
        self.elements.borrow().get(&id).map(|e| e.origin)
    }
}

impl ElementTree for ElementTable {
    fn templated_parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements
            .borrow()
            .get(&element)
            .and_then(|e| e.templated_parent)
    }

    fn name(&self, element: ElementId) -> Option<String> {
        self.elements
            .borrow()
            .get(&element)
            .and_then(|e| e.name.clone())
    }

    fn is_effectively_enabled(&self, element: ElementId) -> bool {
        let elements = self.elements.borrow();
        let mut current = Some(element);
        let mut depth = 0;
        while let Some(id) = current {
            let Some(entry) = elements.get(&id) else {
                return false;
            };
            if !entry.is_enabled {
                return false;
            }
            depth += 1;
            if depth > elements.len() {
                log::warn!("parent chain of {:?} is cyclic", element);
                return false;
            }
            current = entry.parent;
        }
        true
    }

    fn translate_point(&self, point: Point, from: ElementId, to: ElementId) -> Option<Point> {
        let from = self.origin(from)?;
        let to = self.origin(to)?;
        Some(Point::new(
            point.x + from.x - to.x,
            point.y + from.y - to.y,
        ))
    }
}
