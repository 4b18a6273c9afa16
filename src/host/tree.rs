use super::ElementId;
use crate::primitives::Point;

const MAX_TEMPLATE_DEPTH: usize = 256;

/// Read access to the host's element tree.
pub trait ElementTree {
    /// The control whose template created `element`, if any.
    fn templated_parent(&self, element: ElementId) -> Option<ElementId>;

    fn name(&self, element: ElementId) -> Option<String>;

    /// Enabled and every ancestor enabled.
    fn is_effectively_enabled(&self, element: ElementId) -> bool;

    /// Convert `point` from `from`'s coordinate space to `to`'s.
    /// `None` if either element is unknown or they share no root.
    fn translate_point(&self, point: Point, from: ElementId, to: ElementId) -> Option<Point>;

    /// Outermost templated parent of `element`, or `element` itself.
    fn template_root(&self, element: ElementId) -> ElementId {
        let mut current = element;
        // The host may hand us a cyclic chain
        for _ in 0..MAX_TEMPLATE_DEPTH {
            match self.templated_parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }
}
