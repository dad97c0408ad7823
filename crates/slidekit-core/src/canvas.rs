//! A [`Canvas`] that records instead of rasterizing.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextStyle, Transform2D};
use crate::{Color, Point};

/// Records every paint call as a [`DrawCommand`].
///
/// Positions are stored untransformed. The translation in effect for each
/// command is kept alongside it and is available through
/// [`transform_at`](Self::transform_at), so a test can map a handle or tick
/// back into widget space. Backends can replay the commands in order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    // parallel to `commands`
    transforms: Vec<Transform2D>,
    stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Empty canvas with no transform pushed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Move the commands out, leaving the canvas empty. The transform stack is
    /// left alone so painting can continue mid-frame.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.transforms.clear();
        std::mem::take(&mut self.commands)
    }

    /// Forget commands and pushed transforms.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transforms.clear();
        self.stack.clear();
    }

    /// Translation currently in effect.
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.stack.last().copied().unwrap_or_default()
    }

    /// How many transforms are pushed.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.stack.len()
    }

    /// Translation in effect when command `index` was recorded.
    #[must_use]
    pub fn transform_at(&self, index: usize) -> Option<Transform2D> {
        self.transforms.get(index).copied()
    }

    /// Text of every [`DrawCommand::Text`], in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) {
        self.transforms.push(self.current_transform());
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle) {
        self.record(DrawCommand::line(from, to, stroke.clone()));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.record(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.record(DrawCommand::stroked_circle(
            center,
            radius,
            StrokeStyle::new(color, width),
        ));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_owned(),
            position,
            style: style.clone(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        // translations only; composing is adding offsets
        let (dx, dy) = transform.offset();
        let (x, y) = self.current_transform().offset();
        self.stack.push(Transform2D::translate(x + dx, y + dy));
    }

    fn pop_transform(&mut self) {
        self.stack.pop();
    }
}
