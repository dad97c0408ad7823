//! Slider configuration and default resolution.
//!
//! [`SliderConfig`] holds what the caller asked for; [`SliderConfig::resolve`]
//! turns it into a [`ResolvedConfig`] in one step, filling every derived
//! default (tick formatter from value formatter, display name from the
//! identifier) before any component reads it.

use crate::error::SliderError;
use serde::{Deserialize, Serialize};
use slidekit_core::{Color, ScaleKind, MAX_TICK_COUNT};
use std::fmt;
use std::sync::Arc;

/// Formats a value for display.
pub type Formatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Default layout class applied to the slider's outer element.
pub const DEFAULT_CLASS_NAME: &str = "form-group col-xs-6 col-md-6";

/// Default value formatter: shortest round-trip decimal, `0.5`, `50`, `-3`.
#[must_use]
pub fn default_format() -> Formatter {
    Arc::new(|value: f64| format!("{value}"))
}

/// Horizontal margins between the container edge and the track ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    /// Left margin in pixels
    pub left: f32,
    /// Right margin in pixels
    pub right: f32,
}

impl Margin {
    /// Create margins.
    #[must_use]
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Total horizontal margin.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(15.0, 15.0)
    }
}

/// Visual constants for the track, tick row and handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderStyle {
    /// Vertical offset of the track line inside the widget
    pub track_offset_y: f32,
    /// Vertical offset of the tick labels below the track line
    pub tick_offset_y: f32,
    /// Tick label font size
    pub tick_font_size: f32,
    /// Outer track stroke color
    pub track_color: Color,
    /// Outer track stroke width
    pub track_width: f32,
    /// Inner track stroke color
    pub track_inset_color: Color,
    /// Inner track stroke width
    pub track_inset_width: f32,
    /// Height of the invisible band around the track that starts drags
    pub overlay_width: f32,
    /// Handle radius
    pub handle_radius: f32,
    /// Handle fill
    pub handle_fill: Color,
    /// Handle outline color
    pub handle_stroke: Color,
    /// Handle outline width
    pub handle_stroke_width: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_offset_y: 10.0,
            tick_offset_y: 18.0,
            tick_font_size: 10.0,
            track_color: Color::BLACK.with_alpha(0.3),
            track_width: 10.0,
            track_inset_color: Color::rgb8(221, 221, 221),
            track_inset_width: 8.0,
            overlay_width: 50.0,
            handle_radius: 9.0,
            handle_fill: Color::WHITE,
            handle_stroke: Color::BLACK.with_alpha(0.5),
            handle_stroke_width: 1.25,
        }
    }
}

/// Slider options as supplied by the caller.
///
/// Every field has a default; the numeric and textual ones can also be read
/// from YAML or JSON using the option names `scale`, `height`, `width`,
/// `margin`, `domain`, `initial`, `ticks`, `displayName`, `className` and
/// `style`. Formatters are code and only settable through the builder.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    scale: ScaleKind,
    height: f32,
    width: f32,
    #[serde(skip)]
    format: Option<Formatter>,
    #[serde(skip)]
    tick_format: Option<Formatter>,
    margin: Margin,
    domain: (f64, f64),
    initial: f64,
    ticks: usize,
    display_name: Option<String>,
    class_name: String,
    style: SliderStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            scale: ScaleKind::Linear,
            height: 35.0,
            width: 0.0,
            format: None,
            tick_format: None,
            margin: Margin::default(),
            domain: (0.0, 1.0),
            initial: 0.0,
            ticks: 3,
            display_name: None,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            style: SliderStyle::default(),
        }
    }
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("scale", &self.scale)
            .field("height", &self.height)
            .field("width", &self.width)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .field("tick_format", &self.tick_format.as_ref().map(|_| "<fn>"))
            .field("margin", &self.margin)
            .field("domain", &self.domain)
            .field("initial", &self.initial)
            .field("ticks", &self.ticks)
            .field("display_name", &self.display_name)
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

impl SliderConfig {
    /// Create a config with every option at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, SliderError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse options from JSON.
    pub fn from_json(json: &str) -> Result<Self, SliderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the data options to YAML.
    pub fn to_yaml(&self) -> Result<String, SliderError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set the scale factory.
    #[must_use]
    pub const fn scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    /// Set the widget height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the widget width (0 measures the container).
    #[must_use]
    pub const fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the value formatter.
    #[must_use]
    pub fn format(mut self, format: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }

    /// Set the tick label formatter (defaults to the value formatter).
    #[must_use]
    pub fn tick_format(mut self, format: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.tick_format = Some(Arc::new(format));
        self
    }

    /// Set both margins.
    #[must_use]
    pub const fn margin(mut self, left: f32, right: f32) -> Self {
        self.margin = Margin::new(left, right);
        self
    }

    /// Set the value domain.
    #[must_use]
    pub const fn domain(mut self, lo: f64, hi: f64) -> Self {
        self.domain = (lo, hi);
        self
    }

    /// Set the initial value.
    ///
    /// `0` (and NaN) mean "unset": the slider then starts at `invert(0)`,
    /// the domain's lower bound.
    #[must_use]
    pub const fn initial(mut self, initial: f64) -> Self {
        self.initial = initial;
        self
    }

    /// Set how many tick intervals to aim for.
    #[must_use]
    pub const fn ticks(mut self, ticks: usize) -> Self {
        self.ticks = ticks;
        self
    }

    /// Set the display name (defaults to the identifier).
    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the layout class name.
    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    /// Set the visual style.
    #[must_use]
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Resolve every default and validate the options that do not depend on
    /// the container.
    pub fn resolve(self, name: &str) -> Result<ResolvedConfig, SliderError> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(SliderError::InvalidHeight(self.height));
        }
        let Margin { left, right } = self.margin;
        if !left.is_finite() || !right.is_finite() || left < 0.0 || right < 0.0 {
            return Err(SliderError::InvalidMargin { left, right });
        }
        if self.ticks > MAX_TICK_COUNT {
            return Err(SliderError::TooManyTicks {
                count: self.ticks,
                max: MAX_TICK_COUNT,
            });
        }
        // Scale-level checks (domain order, exponent) happen once here so a
        // bad config never reaches the container measurement.
        self.scale.build(self.domain, (0.0, 1.0))?;

        let format = self.format.unwrap_or_else(default_format);
        let tick_format = self.tick_format.unwrap_or_else(|| Arc::clone(&format));
        let width = (self.width != 0.0).then_some(self.width);

        Ok(ResolvedConfig {
            scale: self.scale,
            height: self.height,
            width,
            format,
            tick_format,
            margin: self.margin,
            domain: self.domain,
            initial: self.initial,
            ticks: self.ticks,
            display_name: self.display_name.unwrap_or_else(|| name.to_string()),
            class_name: self.class_name,
            style: self.style,
        })
    }
}

/// Configuration with every default filled in.
#[derive(Clone)]
pub struct ResolvedConfig {
    /// Scale factory
    pub scale: ScaleKind,
    /// Widget height
    pub height: f32,
    /// Fixed width, or `None` to measure the container
    pub width: Option<f32>,
    /// Value formatter
    pub format: Formatter,
    /// Tick label formatter
    pub tick_format: Formatter,
    /// Track margins
    pub margin: Margin,
    /// Value domain
    pub domain: (f64, f64),
    /// Initial value as configured (before the zero fallback)
    pub initial: f64,
    /// Tick interval count
    pub ticks: usize,
    /// Name shown next to the value label
    pub display_name: String,
    /// Layout class
    pub class_name: String,
    /// Visual style
    pub style: SliderStyle,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("scale", &self.scale)
            .field("height", &self.height)
            .field("width", &self.width)
            .field("margin", &self.margin)
            .field("domain", &self.domain)
            .field("initial", &self.initial)
            .field("ticks", &self.ticks)
            .field("display_name", &self.display_name)
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

impl ResolvedConfig {
    /// Format a value with the value formatter.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        (self.format)(value)
    }

    /// Track width for a given container width, validating the margins fit.
    pub fn track_width(&self, container_width: f32) -> Result<f64, SliderError> {
        let Margin { left, right } = self.margin;
        if !container_width.is_finite() || container_width <= left + right {
            return Err(SliderError::TrackTooNarrow {
                width: container_width,
                left,
                right,
            });
        }
        Ok(f64::from(container_width - left - right))
    }
}
