//! Core types and traits for the slidekit slider widget.
//!
//! This crate provides foundational types used by the widgets crate:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - The [`Widget`] and [`Canvas`] traits, draw commands and a
//!   [`RecordingCanvas`]
//! - Clamped value/pixel scales: [`Scale`], [`LinearScale`], [`PowScale`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod scale;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{CircleStyle, DrawCommand, LineCap, StrokeStyle};
pub use event::{Event, MouseButton, PointerId, PointerType};
pub use geometry::{Point, Rect, Size};
pub use scale::{LinearScale, PowScale, Scale, ScaleError, ScaleKind, MAX_TICK_COUNT};
pub use widget::{Canvas, LayoutResult, TextAnchor, TextStyle, Transform2D, TypeId, Widget};
