use std::ops::{Deref, DerefMut};

use crate::primitives::{Color, Point, RoundedRect};

/// Immediate-mode drawing surface handed to [`super::VisualHandler::on_render`].
///
/// Pushes must be balanced by pops; use [`push_clip`] and [`push_opacity`]
/// to get scopes that pop on drop.
pub trait DrawingContext {
    fn push_clip(&mut self, clip: RoundedRect);

    fn pop_clip(&mut self);

    /// Multiply the opacity of everything drawn until the matching pop.
    fn push_opacity(&mut self, opacity: f32);

    fn pop_opacity(&mut self);

    fn draw_ellipse(&mut self, brush: Color, center: Point, radius_x: f32, radius_y: f32);
}

pub struct ClipScope<'a, D: DrawingContext + ?Sized> {
    ctx: &'a mut D,
}

pub struct OpacityScope<'a, D: DrawingContext + ?Sized> {
    ctx: &'a mut D,
}

/// Push a clip that is popped when the returned scope drops.
pub fn push_clip<D: DrawingContext + ?Sized>(ctx: &mut D, clip: RoundedRect) -> ClipScope<'_, D> {
    ctx.push_clip(clip);
    ClipScope { ctx }
}

/// Push an opacity that is popped when the returned scope drops.
pub fn push_opacity<D: DrawingContext + ?Sized>(ctx: &mut D, opacity: f32) -> OpacityScope<'_, D> {
    ctx.push_opacity(opacity);
    OpacityScope { ctx }
}

impl<D: DrawingContext + ?Sized> Deref for ClipScope<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.ctx
    }
}

impl<D: DrawingContext + ?Sized> DerefMut for ClipScope<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.ctx
    }
}

impl<D: DrawingContext + ?Sized> Drop for ClipScope<'_, D> {
    fn drop(&mut self) {
        self.ctx.pop_clip();
    }
}

impl<D: DrawingContext + ?Sized> Deref for OpacityScope<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.ctx
    }
}

impl<D: DrawingContext + ?Sized> DerefMut for OpacityScope<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.ctx
    }
}

impl<D: DrawingContext + ?Sized> Drop for OpacityScope<'_, D> {
    fn drop(&mut self) {
        self.ctx.pop_opacity();
    }
}
