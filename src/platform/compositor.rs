use std::collections::HashMap;
use std::time::Duration;

use super::recording::{DrawCommand, EllipseCommand, RecordingContext};
use crate::host::{Compositor, ElementId, FrameRequests, HandlerMessage, VisualHandler, VisualId};
use crate::primitives::Size;

/// Everything custom visuals drew during one [`SoftwareCompositor::tick`].
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub time: Duration,
    pub visuals: Vec<RenderedVisual>,
}

#[derive(Debug, Clone)]
pub struct RenderedVisual {
    pub visual: VisualId,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Ellipses of every rendered visual, in render order.
    pub fn ellipses(&self) -> impl Iterator<Item = &EllipseCommand> {
        self.visuals
            .iter()
            .flat_map(|rendered| rendered.commands.iter())
            .filter_map(|command| match command {
                DrawCommand::Ellipse(ellipse) => Some(ellipse),
                _ => None,
            })
    }
}

enum VisualKind {
    Container {
        children: Vec<VisualId>,
    },
    Custom {
        handler: Box<dyn VisualHandler>,
        wants_frame: bool,
        dirty: bool,
    },
}

struct Visual {
    size: Size,
    parent: Option<VisualId>,
    kind: VisualKind,
}

struct Slot {
    generation: u32,
    visual: Option<Visual>,
}

/// An in-memory compositor that renders custom visuals into command lists.
///
/// Visuals live in a slot arena addressed by generational ids. Handler
/// messages are queued and delivered at the start of the next
/// [`tick`](Self::tick), followed by frame updates and rendering.
pub struct SoftwareCompositor {
    slots: Vec<Slot>,
    free_indices: Vec<u32>,
    element_visuals: HashMap<ElementId, VisualId>,
    pending_messages: Vec<(VisualId, HandlerMessage)>,
    now: Duration,
}

impl Default for SoftwareCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareCompositor {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_indices: Vec::new(),
            element_visuals: HashMap::new(),
            pending_messages: Vec::new(),
            now: Duration::ZERO,
        }
    }

    /// Time of the last tick.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn contains(&self, visual: VisualId) -> bool {
        self.get(visual).is_some()
    }

    /// Number of live visuals.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.visual.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn size_of(&self, visual: VisualId) -> Option<Size> {
        self.get(visual).map(|v| v.size)
    }

    pub fn parent_of(&self, visual: VisualId) -> Option<VisualId> {
        self.get(visual).and_then(|v| v.parent)
    }

    /// The visual layered above `element`, if any.
    pub fn root_of(&self, element: ElementId) -> Option<VisualId> {
        self.element_visuals.get(&element).copied()
    }

    /// Whether any custom visual asked for another frame or has a message
    /// waiting.
    pub fn is_animating(&self) -> bool {
        !self.pending_messages.is_empty()
            || self.slots.iter().any(|slot| {
                matches!(
                    slot.visual,
                    Some(Visual {
                        kind: VisualKind::Custom {
                            wants_frame: true,
                            ..
                        },
                        ..
                    })
                )
            })
    }

    /// Run one composition frame at time `now`.
    pub fn tick(&mut self, now: Duration) -> Frame {
        self.now = now;

        for (id, message) in std::mem::take(&mut self.pending_messages) {
            let Some(Visual {
                kind:
                    VisualKind::Custom {
                        handler,
                        wants_frame,
                        dirty,
                    },
                ..
            }) = self.get_mut(id)
            else {
                log::warn!("dropping {:?}: {:?} is not a live custom visual", message, id);
                continue;
            };
            let mut requests = FrameRequests::new();
            handler.on_message(message, &mut requests);
            *wants_frame |= requests.wants_next_frame();
            *dirty |= requests.is_invalidated();
        }

        for slot in &mut self.slots {
            if let Some(Visual {
                kind:
                    VisualKind::Custom {
                        handler,
                        wants_frame,
                        dirty,
                    },
                ..
            }) = &mut slot.visual
            {
                if !*wants_frame {
                    continue;
                }
                let mut requests = FrameRequests::new();
                handler.on_animation_frame_update(&mut requests);
                *wants_frame = requests.wants_next_frame();
                *dirty |= requests.is_invalidated();
            }
        }

        let mut frame = Frame {
            time: now,
            visuals: Vec::new(),
        };
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let generation = slot.generation;
            if let Some(Visual {
                kind: VisualKind::Custom { handler, dirty, .. },
                ..
            }) = &mut slot.visual
            {
                if !*dirty {
                    continue;
                }
                *dirty = false;
                let mut ctx = RecordingContext::new();
                handler.on_render(&mut ctx, now);
                frame.visuals.push(RenderedVisual {
                    visual: pack(index as u32, generation),
                    commands: ctx.into_commands(),
                });
            }
        }

        log::trace!("frame at {:?}: {} visuals rendered", now, frame.visuals.len());
        frame
    }

    fn alloc(&mut self, visual: Visual) -> VisualId {
        if let Some(index) = self.free_indices.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.visual = Some(visual);
            return pack(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            visual: Some(visual),
        });
        pack(index, 0)
    }

    fn get(&self, id: VisualId) -> Option<&Visual> {
        let (index, generation) = unpack(id);
        self.slots
            .get(index as usize)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.visual.as_ref())
    }

    fn get_mut(&mut self, id: VisualId) -> Option<&mut Visual> {
        let (index, generation) = unpack(id);
        self.slots
            .get_mut(index as usize)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.visual.as_mut())
    }

    /// Free `id` and everything below it, unlinking it from its parent.
    fn destroy(&mut self, id: VisualId) {
        let (index, generation) = unpack(id);
        let Some(slot) = self
            .slots
            .get_mut(index as usize)
            .filter(|slot| slot.generation == generation)
        else {
            return;
        };
        let Some(visual) = slot.visual.take() else {
            return;
        };
        self.free_indices.push(index);

        if let Some(parent) = visual.parent {
            if let Some(Visual {
                kind: VisualKind::Container { children },
                ..
            }) = self.get_mut(parent)
            {
                children.retain(|child| *child != id);
            }
        }

        if let VisualKind::Container { children } = visual.kind {
            for child in children {
                // Already unlinked from us; skip the parent fixup
                if let Some(child_visual) = self.get_mut(child) {
                    child_visual.parent = None;
                }
                self.destroy(child);
            }
        }
    }
}

fn pack(index: u32, generation: u32) -> VisualId {
    VisualId::from_raw((u64::from(generation) << 32) | u64::from(index))
}

fn unpack(id: VisualId) -> (u32, u32) {
    let raw = id.as_u64();
    (raw as u32, (raw >> 32) as u32)
}

impl Compositor for SoftwareCompositor {
    fn create_container_visual(&mut self) -> VisualId {
        self.alloc(Visual {
            size: Size::default(),
            parent: None,
            kind: VisualKind::Container {
                children: Vec::new(),
            },
        })
    }

    fn create_custom_visual(&mut self, handler: Box<dyn VisualHandler>) -> VisualId {
        self.alloc(Visual {
            size: Size::default(),
            parent: None,
            kind: VisualKind::Custom {
                handler,
                wants_frame: false,
                dirty: false,
            },
        })
    }

    fn set_size(&mut self, visual: VisualId, size: Size) {
        match self.get_mut(visual) {
            Some(v) => v.size = size,
            None => log::warn!("set_size on removed visual {:?}", visual),
        }
    }

    fn add_child(&mut self, container: VisualId, child: VisualId) {
        if self.get(child).is_none() {
            log::warn!("add_child with removed child {:?}", child);
            return;
        }
        match self.get_mut(container) {
            Some(Visual {
                kind: VisualKind::Container { children },
                ..
            }) => children.push(child),
            _ => {
                log::warn!("add_child on {:?}, which is not a live container", container);
                return;
            }
        }
        if let Some(v) = self.get_mut(child) {
            v.parent = Some(container);
        }
    }

    fn remove_child(&mut self, container: VisualId, child: VisualId) -> bool {
        let is_child = matches!(
            self.get(container),
            Some(Visual {
                kind: VisualKind::Container { children },
                ..
            }) if children.contains(&child)
        );
        if !is_child {
            return false;
        }
        self.destroy(child);
        true
    }

    fn children(&self, container: VisualId) -> Vec<VisualId> {
        match self.get(container) {
            Some(Visual {
                kind: VisualKind::Container { children },
                ..
            }) => children.clone(),
            _ => Vec::new(),
        }
    }

    fn send_handler_message(&mut self, visual: VisualId, message: HandlerMessage) {
        if !self.contains(visual) {
            log::warn!("{:?} sent to removed visual {:?}", message, visual);
            return;
        }
        self.pending_messages.push((visual, message));
    }

    fn set_element_child_visual(&mut self, element: ElementId, visual: Option<VisualId>) {
        let previous = match visual {
            Some(visual) => self.element_visuals.insert(element, visual),
            None => self.element_visuals.remove(&element),
        };
        if let Some(previous) = previous {
            if Some(previous) != visual {
                self.destroy(previous);
            }
        }
    }
}
