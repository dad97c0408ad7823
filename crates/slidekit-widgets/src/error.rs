//! Error types for slider construction and relayout.

use slidekit_core::ScaleError;
use thiserror::Error;

/// Errors raised while building or resizing a slider.
///
/// Configuration is validated once at construction so that a bad domain or
/// an over-wide margin fails here instead of inside the first drag.
#[derive(Debug, Error)]
pub enum SliderError {
    /// Domain or range rejected by the scale.
    #[error("invalid scale: {0}")]
    Scale(#[from] ScaleError),

    /// Container width leaves no room for the track once margins are removed.
    #[error("track too narrow: width {width} must exceed margins {left} + {right}")]
    TrackTooNarrow {
        /// Container width in pixels
        width: f32,
        /// Left margin
        left: f32,
        /// Right margin
        right: f32,
    },

    /// Margins must be finite and non-negative.
    #[error("invalid margin: left {left}, right {right}")]
    InvalidMargin {
        /// Left margin
        left: f32,
        /// Right margin
        right: f32,
    },

    /// Height must be finite and positive.
    #[error("invalid height: {0}")]
    InvalidHeight(f32),

    /// Tick count is above what the tick generator will produce.
    #[error("too many ticks: {count} (at most {max})")]
    TooManyTicks {
        /// Configured count
        count: usize,
        /// Largest accepted count
        max: usize,
    },

    /// Builder finished without a value-changed callback.
    #[error("no value-changed callback was provided")]
    MissingCallback,

    /// YAML configuration could not be parsed.
    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON configuration could not be parsed.
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),
}
