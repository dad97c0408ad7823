//! Pointer drag handling.
//!
//! The controller only decides *when* a pointer position should be applied
//! and converts it to track-local pixels. Applying it (invert, label, handle,
//! callback) is the slider's job so that all four happen in one place.

use slidekit_core::{Event, MouseButton, Point, PointerId, Rect};

/// Pointer input relevant to a single-handle drag.
///
/// `pointer` is the contact id for pointer events and `None` for mouse
/// events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Primary button pressed at a position
    Down {
        /// Press position
        position: Point,
        /// Contact that pressed
        pointer: Option<PointerId>,
    },
    /// Pointer moved to a position
    Move {
        /// New position
        position: Point,
        /// Contact that moved
        pointer: Option<PointerId>,
    },
    /// Primary button released
    Up {
        /// Contact that lifted
        pointer: Option<PointerId>,
    },
    /// Gesture cancelled by the platform
    Cancel {
        /// Contact that was cancelled
        pointer: PointerId,
    },
}

impl PointerInput {
    /// Extract drag input from a widget event.
    ///
    /// Only the left mouse button and primary pointers take part; secondary
    /// touches and other buttons are ignored. Cancels pass through with
    /// their id so the controller can match them to the drag.
    #[must_use]
    pub fn from_event(event: &Event) -> Option<Self> {
        let pointer = event.pointer_id();
        match *event {
            Event::MouseDown {
                button: MouseButton::Left,
                ..
            }
            | Event::PointerDown {
                is_primary: true,
                button: None | Some(MouseButton::Left),
                ..
            } => event.position().map(|position| Self::Down { position, pointer }),
            Event::MouseMove { .. }
            | Event::PointerMove {
                is_primary: true, ..
            } => event.position().map(|position| Self::Move { position, pointer }),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            }
            | Event::PointerUp {
                is_primary: true, ..
            } => Some(Self::Up { pointer }),
            Event::PointerCancel { pointer_id } => Some(Self::Cancel {
                pointer: pointer_id,
            }),
            _ => None,
        }
    }
}

/// Where the track sits on screen, for hit testing and coordinate conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Screen position of the track's left end (track-local x = 0)
    pub origin: Point,
    /// Track length in pixels
    pub width: f32,
    /// Half the height of the interactive band around the track line
    pub half_height: f32,
    /// Track-local handle centre
    pub handle_x: f32,
    /// Handle radius
    pub handle_radius: f32,
}

impl TrackGeometry {
    /// Convert a screen x coordinate to track-local pixels.
    #[must_use]
    pub fn local_x(&self, point: Point) -> f64 {
        f64::from(point.x - self.origin.x)
    }

    /// Whether a press at `point` should start a drag: inside the band over
    /// the track, or on the handle itself.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let band = Rect::horizontal_band(self.origin, self.width, self.half_height);
        let handle = self.origin + Point::new(self.handle_x, 0.0);
        band.contains_point(&point)
            || point.distance_squared(handle) <= self.handle_radius * self.handle_radius
    }
}

/// Drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// Primary pointer is held down
    Dragging,
}

/// Idle/dragging state machine for the handle.
///
/// The contact that starts a drag owns it: moves, releases and cancels from
/// any other pointer id are ignored until the drag ends.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: DragState,
    owner: Option<PointerId>,
}

impl InteractionController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    // Mouse input (no id) belongs to whatever drag is running.
    fn owns(&self, pointer: Option<PointerId>) -> bool {
        match (self.owner, pointer) {
            (Some(owner), Some(id)) => owner == id,
            _ => true,
        }
    }

    /// Feed one input. Returns the track-local x to apply, if any.
    ///
    /// A press inside the track applies its position immediately, so a click
    /// without movement still selects a value.
    pub fn handle(&mut self, input: PointerInput, geometry: &TrackGeometry) -> Option<f64> {
        match (self.state, input) {
            (DragState::Idle, PointerInput::Down { position, pointer })
                if geometry.contains(position) =>
            {
                self.state = DragState::Dragging;
                self.owner = pointer;
                Some(geometry.local_x(position))
            }
            (
                DragState::Dragging,
                PointerInput::Move { position, pointer } | PointerInput::Down { position, pointer },
            ) if self.owns(pointer) => Some(geometry.local_x(position)),
            (DragState::Dragging, PointerInput::Up { pointer }) if self.owns(pointer) => {
                self.end();
                None
            }
            (DragState::Dragging, PointerInput::Cancel { pointer })
                if self.owner == Some(pointer) =>
            {
                self.end();
                None
            }
            _ => None,
        }
    }

    fn end(&mut self) {
        self.state = DragState::Idle;
        self.owner = None;
    }
}
