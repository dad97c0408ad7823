//! Recorded draw primitives.
//!
//! A slider paints with three shapes only: track lines, the handle disc and
//! tick labels. [`RecordingCanvas`](crate::RecordingCanvas) captures them as
//! [`DrawCommand`]s so tests can assert on exactly what was drawn.

use crate::widget::TextStyle;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// How a line is stroked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Color
    pub color: Color,
    /// Thickness in pixels
    pub width: f32,
    /// End cap
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Butt-capped stroke.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    /// Switch to round caps, as the track layers use.
    #[must_use]
    pub const fn round(self) -> Self {
        Self {
            cap: LineCap::Round,
            ..self
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

/// Line end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Ends exactly at the endpoint
    #[default]
    Butt,
    /// Half-disc past the endpoint
    Round,
}

/// Fill and outline of a circle. Either may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CircleStyle {
    /// Interior color
    pub fill: Option<Color>,
    /// Outline
    pub stroke: Option<StrokeStyle>,
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Straight segment
    Line {
        /// First endpoint
        from: Point,
        /// Second endpoint
        to: Point,
        /// Stroke
        style: StrokeStyle,
    },
    /// Circle
    Circle {
        /// Centre
        center: Point,
        /// Radius
        radius: f32,
        /// Fill and outline
        style: CircleStyle,
    },
    /// Text run
    Text {
        /// String drawn
        content: String,
        /// Anchor position
        position: Point,
        /// Size, color and anchoring
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Line segment.
    #[must_use]
    pub const fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }

    /// Circle with a fill and no outline.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: CircleStyle {
                fill: Some(color),
                stroke: None,
            },
        }
    }

    /// Circle with an outline and no fill.
    #[must_use]
    pub const fn stroked_circle(center: Point, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Circle {
            center,
            radius,
            style: CircleStyle {
                fill: None,
                stroke: Some(stroke),
            },
        }
    }
}
