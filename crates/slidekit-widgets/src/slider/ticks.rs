//! Tick labels under the track.

use super::config::{Formatter, SliderStyle};
use slidekit_core::{Canvas, Point, Scale, TextAnchor, TextStyle, Transform2D};
use std::fmt;

/// One labelled tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Domain value
    pub value: f64,
    /// Track-local x position (`scale.forward(value)`)
    pub x: f64,
    /// Formatted label
    pub label: String,
}

/// Computes and paints the tick row.
#[derive(Clone)]
pub struct TickRenderer {
    count: usize,
    format: Formatter,
}

impl fmt::Debug for TickRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickRenderer")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl TickRenderer {
    /// Create a renderer aiming for `count` intervals.
    #[must_use]
    pub fn new(count: usize, format: Formatter) -> Self {
        Self { count, format }
    }

    /// Ticks for the scale's current domain and range.
    #[must_use]
    pub fn render(&self, scale: &dyn Scale) -> Vec<Tick> {
        scale
            .ticks(self.count)
            .into_iter()
            .map(|value| Tick {
                value,
                x: scale.forward(value),
                label: (self.format)(value),
            })
            .collect()
    }

    /// Paint `ticks` as centred labels in a row `tick_offset_y` below the
    /// current origin.
    pub fn paint(ticks: &[Tick], style: &SliderStyle, canvas: &mut dyn Canvas) {
        if ticks.is_empty() {
            return;
        }
        let text_style = TextStyle {
            size: style.tick_font_size,
            anchor: TextAnchor::Middle,
            ..TextStyle::default()
        };
        canvas.push_transform(Transform2D::translate(0.0, style.tick_offset_y));
        for tick in ticks {
            canvas.draw_text(&tick.label, Point::new(tick.x as f32, 0.0), &text_style);
        }
        canvas.pop_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::config::default_format;
    use slidekit_core::{DrawCommand, RecordingCanvas, ScaleKind};
    use std::sync::Arc;

    fn scale(domain: (f64, f64), width: f64) -> Box<dyn Scale> {
        ScaleKind::Linear.build(domain, (0.0, width)).unwrap()
    }

    // =========================================================================
    // Render Tests
    // =========================================================================

    #[test]
    fn test_render_unit_domain() {
        let ticks = TickRenderer::new(3, default_format()).render(scale((0.0, 1.0), 170.0).as_ref());
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        let xs: Vec<f64> = ticks.iter().map(|t| t.x).collect();
        assert_eq!(labels, vec!["0", "0.5", "1"]);
        assert_eq!(xs, vec![0.0, 85.0, 170.0]);
    }

    #[test]
    fn test_render_hundred_domain() {
        let ticks = TickRenderer::new(3, default_format()).render(scale((0.0, 100.0), 170.0).as_ref());
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_render_custom_format() {
        let format: Formatter = Arc::new(|v| format!("{}%", v * 100.0));
        let ticks = TickRenderer::new(3, format).render(scale((0.0, 1.0), 100.0).as_ref());
        assert_eq!(ticks[1].label, "50%");
    }

    #[test]
    fn test_render_zero_count() {
        let ticks = TickRenderer::new(0, default_format()).render(scale((0.0, 1.0), 100.0).as_ref());
        assert!(ticks.is_empty());
    }

    #[test]
    fn test_render_follows_range() {
        let renderer = TickRenderer::new(3, default_format());
        let mut s = scale((0.0, 1.0), 170.0);
        s.set_range((0.0, 270.0)).unwrap();
        let xs: Vec<f64> = renderer.render(s.as_ref()).iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![0.0, 135.0, 270.0]);
    }

    // =========================================================================
    // Paint Tests
    // =========================================================================

    #[test]
    fn test_paint_centred_labels_in_tick_row() {
        let ticks = TickRenderer::new(3, default_format()).render(scale((0.0, 1.0), 170.0).as_ref());
        let mut canvas = RecordingCanvas::new();
        TickRenderer::paint(&ticks, &SliderStyle::default(), &mut canvas);

        assert_eq!(canvas.texts(), vec!["0", "0.5", "1"]);
        assert_eq!(canvas.transform_depth(), 0);
        for i in 0..canvas.command_count() {
            assert_eq!(canvas.transform_at(i).unwrap().offset(), (0.0, 18.0));
            match &canvas.commands()[i] {
                DrawCommand::Text { style, .. } => {
                    assert_eq!(style.size, 10.0);
                    assert_eq!(style.anchor, TextAnchor::Middle);
                }
                other => panic!("Expected Text command, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_paint_empty_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        TickRenderer::paint(&[], &SliderStyle::default(), &mut canvas);
        assert!(canvas.is_empty());
    }
}
