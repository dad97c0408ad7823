//! Input delivered to widgets.
//!
//! Mouse events and unified pointer events (mouse, touch, pen) both carry
//! positions in the same coordinate space as [`Widget::layout`] bounds.
//!
//! [`Widget::layout`]: crate::Widget::layout

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// An input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Cursor moved
    MouseMove {
        /// Cursor position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Cursor position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Cursor position
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Cursor left the host surface
    MouseLeave,
    /// The host surface (window) changed size
    Resize {
        /// New surface width
        width: f32,
        /// New surface height
        height: f32,
    },
    /// Pointer made contact or a button went down
    PointerDown {
        /// Stable id for the lifetime of the contact
        pointer_id: PointerId,
        /// Device kind
        pointer_type: PointerType,
        /// Contact position
        position: Point,
        /// First contact of a multi-touch gesture, or the mouse
        is_primary: bool,
        /// Button, for devices that have them
        button: Option<MouseButton>,
    },
    /// Pointer moved
    PointerMove {
        /// Stable id for the lifetime of the contact
        pointer_id: PointerId,
        /// Device kind
        pointer_type: PointerType,
        /// Contact position
        position: Point,
        /// First contact of a multi-touch gesture, or the mouse
        is_primary: bool,
    },
    /// Pointer lifted or a button went up
    PointerUp {
        /// Stable id for the lifetime of the contact
        pointer_id: PointerId,
        /// Device kind
        pointer_type: PointerType,
        /// Contact position
        position: Point,
        /// First contact of a multi-touch gesture, or the mouse
        is_primary: bool,
        /// Button, for devices that have them
        button: Option<MouseButton>,
    },
    /// The platform took the pointer away (e.g. a scroll gesture won)
    PointerCancel {
        /// Contact that was cancelled
        pointer_id: PointerId,
    },
}

/// Identifies one pointer contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u32);

impl PointerId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Pointer device kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerType {
    /// Mouse
    #[default]
    Mouse,
    /// Finger
    Touch,
    /// Stylus
    Pen,
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
}

impl Event {
    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::PointerDown { position, .. }
            | Self::PointerMove { position, .. }
            | Self::PointerUp { position, .. } => Some(*position),
            Self::MouseLeave | Self::Resize { .. } | Self::PointerCancel { .. } => None,
        }
    }

    /// Pointer contact the event belongs to. Mouse events have none.
    #[must_use]
    pub const fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::PointerDown { pointer_id, .. }
            | Self::PointerMove { pointer_id, .. }
            | Self::PointerUp { pointer_id, .. }
            | Self::PointerCancel { pointer_id } => Some(*pointer_id),
            _ => None,
        }
    }
}
