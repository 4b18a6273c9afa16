use crate::host::DrawingContext;
use crate::primitives::{Color, Point, RoundedRect};

/// A filled ellipse with the state it was drawn under resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseCommand {
    pub brush: Color,
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Product of every pushed opacity at draw time
    pub opacity: f32,
    /// Innermost clip at draw time
    pub clip: Option<RoundedRect>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    PushClip(RoundedRect),
    PopClip,
    PushOpacity(f32),
    PopOpacity,
    Ellipse(EllipseCommand),
}

/// A [`DrawingContext`] that records commands instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    clips: Vec<RoundedRect>,
    opacities: Vec<f32>,
    unbalanced_pops: usize,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn ellipses(&self) -> impl Iterator<Item = &EllipseCommand> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Ellipse(ellipse) => Some(ellipse),
            _ => None,
        })
    }

    /// Every push was popped and no pop lacked a push.
    pub fn is_balanced(&self) -> bool {
        self.clips.is_empty() && self.opacities.is_empty() && self.unbalanced_pops == 0
    }

    fn effective_opacity(&self) -> f32 {
        self.opacities.iter().product()
    }
}

impl DrawingContext for RecordingContext {
    fn push_clip(&mut self, clip: RoundedRect) {
        self.clips.push(clip);
        self.commands.push(DrawCommand::PushClip(clip));
    }

    fn pop_clip(&mut self) {
        if self.clips.pop().is_none() {
            log::warn!("pop_clip without a matching push");
            self.unbalanced_pops += 1;
        }
        self.commands.push(DrawCommand::PopClip);
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.opacities.push(opacity);
        self.commands.push(DrawCommand::PushOpacity(opacity));
    }

    fn pop_opacity(&mut self) {
        if self.opacities.pop().is_none() {
            log::warn!("pop_opacity without a matching push");
            self.unbalanced_pops += 1;
        }
        self.commands.push(DrawCommand::PopOpacity);
    }

    fn draw_ellipse(&mut self, brush: Color, center: Point, radius_x: f32, radius_y: f32) {
        let ellipse = EllipseCommand {
            brush,
            center,
            radius_x,
            radius_y,
            opacity: self.effective_opacity(),
            clip: self.clips.last().copied(),
        };
        self.commands.push(DrawCommand::Ellipse(ellipse));
    }
}
