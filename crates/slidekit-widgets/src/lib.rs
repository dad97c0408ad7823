//! Draggable range slider built on slidekit-core.
//!
//! The slider maps a numeric domain onto a horizontal track, follows pointer
//! drags, mirrors its value into a host-provided label and keeps its value
//! when the container is resized.

pub mod error;
pub mod host;
pub mod slider;

pub use error::SliderError;
pub use host::{Container, FixedWidth, LabelBuffer, LabelTarget, NoLabel, SharedWidth};
pub use slider::{
    ChangeCallback, DragState, Formatter, InteractionController, Margin, PointerInput,
    ResizeController, ResizeSubscription, ResolvedConfig, Slider, SliderBuilder, SliderChanged,
    SliderConfig, SliderState, SliderStyle, Tick, TickRenderer, TrackGeometry,
};
