//! The widget contract and the canvas it paints through.
//!
//! A host drives every widget through the same cycle:
//!
//! 1. [`Widget::measure`] with the space on offer
//! 2. [`Widget::layout`] once bounds are decided
//! 3. [`Widget::paint`] into a [`Canvas`]
//!
//! Input goes to [`Widget::event`]. A widget that reacts may hand back a
//! boxed message (a slider returns its new value) for the host to route.
//!
//! ```
//! use slidekit_core::{Point, Transform2D};
//!
//! let track = Transform2D::translate(15.0, 10.0);
//! assert_eq!(track.apply(Point::new(85.0, 0.0)), Point::new(100.0, 10.0));
//! ```

use crate::constraints::Constraints;
use crate::draw::StrokeStyle;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identity of a concrete widget type, for hosts that diff widget trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Id of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Outcome of [`Widget::layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Size actually taken
    pub size: Size,
}

/// A UI element driven by a host.
pub trait Widget: Send + Sync {
    /// Concrete type of the widget.
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept final bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// React to input, optionally producing a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Whether the widget wants pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Stable id for locating the widget in tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Vector drawing surface: lines, circles and text under a stack of
/// translations.
pub trait Canvas {
    /// Stroke a segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle);

    /// Fill a disc.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Outline a circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    /// Draw a text run anchored at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Compose `transform` onto the current one until the matching pop.
    fn push_transform(&mut self, transform: Transform2D);

    /// Restore the transform in effect before the last push.
    fn pop_transform(&mut self);
}

/// How a text run is drawn.
///
/// ```
/// use slidekit_core::{TextAnchor, TextStyle};
///
/// let tick_label = TextStyle {
///     size: 10.0,
///     anchor: TextAnchor::Middle,
///     ..TextStyle::default()
/// };
/// assert_eq!(tick_label.color, TextStyle::default().color);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Fill color
    pub color: Color,
    /// Which point of the run sits on the draw position
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
        }
    }
}

/// Horizontal text anchoring, as in SVG `text-anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Run begins at the position
    #[default]
    Start,
    /// Run is centred on the position
    Middle,
    /// Run ends at the position
    End,
}

/// Affine transform `[a, b, c, d, e, f]`, mapping `(x, y)` to
/// `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Column-major 2x3 matrix
    pub matrix: [f32; 6],
}

impl Transform2D {
    /// No-op transform.
    pub const IDENTITY: Self = Self::translate(0.0, 0.0);

    /// Pure translation.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Translation part.
    #[must_use]
    pub const fn offset(&self) -> (f32, f32) {
        (self.matrix[4], self.matrix[5])
    }

    /// Map `point` through the transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix;
        Point::new(
            a.mul_add(point.x, c.mul_add(point.y, e)),
            b.mul_add(point.x, d.mul_add(point.y, f)),
        )
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl Widget for Inert {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }

        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(10.0, 10.0))
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn paint(&self, _canvas: &mut dyn Canvas) {}

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
    }

    #[test]
    fn test_type_id_distinguishes_types() {
        assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
        assert_ne!(TypeId::of::<u8>(), TypeId::of::<Inert>());
    }

    #[test]
    fn test_widget_defaults() {
        let widget = Inert;
        assert!(!widget.is_interactive());
        assert_eq!(widget.test_id(), None);
        assert_eq!(widget.bounds(), Rect::default());
        assert_eq!(Widget::type_id(&widget), TypeId::of::<Inert>());
    }

    #[test]
    fn test_identity_leaves_points() {
        assert_eq!(Transform2D::default(), Transform2D::IDENTITY);
        let p = Point::new(3.0, 4.0);
        assert_eq!(Transform2D::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_translate() {
        let t = Transform2D::translate(15.0, 10.0);
        assert_eq!(t.offset(), (15.0, 10.0));
        assert_eq!(t.apply(Point::new(85.0, 0.0)), Point::new(100.0, 10.0));
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.anchor, TextAnchor::Start);
    }
}
