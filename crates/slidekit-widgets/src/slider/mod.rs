//! Slider widget for value selection.
//!
//! A slider owns one [`SliderState`]: a scale fitted to the track and the
//! handle position on it. Two paths mutate that state. Pointer drags go
//! through the [`InteractionController`] and fire the value-changed
//! callback; container resizes go through the [`ResizeController`] and only
//! move pixels.
//!
//! # Examples
//!
//! ```
//! use slidekit_widgets::{FixedWidth, LabelBuffer, Slider, SliderConfig};
//!
//! let label = LabelBuffer::new();
//! let (mut slider, subscription) = Slider::new(
//!     FixedWidth(200.0),
//!     label.clone(),
//!     "opacity",
//!     |value| println!("opacity = {value}"),
//!     SliderConfig::new().domain(0.0, 100.0).initial(50.0),
//! )
//! .unwrap();
//!
//! assert_eq!(slider.handle_x(), 85.0);
//! assert_eq!(label.text(), "50");
//!
//! slider.resize(Some(300.0)).unwrap();
//! assert_eq!(slider.handle_x(), 135.0);
//!
//! subscription.dispose();
//! ```

mod config;
mod interaction;
mod resize;
mod state;
mod ticks;

pub use config::{
    default_format, Formatter, Margin, ResolvedConfig, SliderConfig, SliderStyle,
    DEFAULT_CLASS_NAME,
};
pub use interaction::{DragState, InteractionController, PointerInput, TrackGeometry};
pub use resize::{ResizeController, ResizeSubscription};
pub use state::SliderState;
pub use ticks::{Tick, TickRenderer};

use crate::error::SliderError;
use crate::host::{Container, LabelTarget};
use slidekit_core::{
    Canvas, Constraints, Event, LayoutResult, Point, Rect, Size, StrokeStyle, Transform2D,
    TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use tracing::{debug, trace, warn};

/// Value-changed callback.
pub type ChangeCallback = Box<dyn FnMut(f64) + Send + Sync>;

/// Message emitted when a drag changes the slider value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    /// The new value
    pub value: f64,
}

/// Draggable single-handle slider.
pub struct Slider {
    name: String,
    config: ResolvedConfig,
    state: SliderState,
    interaction: InteractionController,
    resizer: ResizeController,
    ticks: TickRenderer,
    container: Box<dyn Container>,
    label: Box<dyn LabelTarget>,
    callback: ChangeCallback,
    bounds: Rect,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("interaction", &self.interaction)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Build a slider inside `container`, mirroring its value into `label`.
    ///
    /// The returned [`ResizeSubscription`] keeps the slider reacting to
    /// [`Event::Resize`]; dispose it when tearing the widget down.
    pub fn new<C, L, F>(
        container: C,
        label: L,
        name: impl Into<String>,
        callback: F,
        config: SliderConfig,
    ) -> Result<(Self, ResizeSubscription), SliderError>
    where
        C: Container + 'static,
        L: LabelTarget + 'static,
        F: FnMut(f64) + Send + Sync + 'static,
    {
        Self::construct(
            Box::new(container),
            Box::new(label),
            name.into(),
            Box::new(callback),
            config,
        )
    }

    /// Start a builder for a slider named `name`.
    pub fn builder(name: impl Into<String>) -> SliderBuilder {
        SliderBuilder::new(name)
    }

    fn construct(
        container: Box<dyn Container>,
        mut label: Box<dyn LabelTarget>,
        name: String,
        callback: ChangeCallback,
        config: SliderConfig,
    ) -> Result<(Self, ResizeSubscription), SliderError> {
        let config = config.resolve(&name)?;
        let width = config
            .width
            .unwrap_or_else(|| container.measure_width());
        let track = config.track_width(width)?;
        let scale = config.scale.build(config.domain, (0.0, track))?;

        // 0 and NaN count as "no initial value".
        let initial = if config.initial == 0.0 || config.initial.is_nan() {
            scale.invert(0.0)
        } else {
            config.initial
        };

        let ticks = TickRenderer::new(config.ticks, config.tick_format.clone());
        let mut state = SliderState::new(scale, 0.0, width);
        state.place_handle(initial);
        state.ticks = ticks.render(state.scale.as_ref());
        state.label_text = config.format_value(initial);
        label.set_text(&state.label_text);

        debug!(
            slider = %name,
            width,
            track,
            initial,
            handle_x = state.handle_x,
            ticks = state.ticks.len(),
            "slider created"
        );

        let resizer = ResizeController::new();
        let subscription = resizer.subscription();
        let slider = Self {
            name,
            config,
            state,
            interaction: InteractionController::new(),
            resizer,
            ticks,
            container,
            label,
            callback,
            bounds: Rect::default(),
        };
        Ok((slider, subscription))
    }

    // =========================================================================
    // Public operations
    // =========================================================================

    /// Move the handle to `value` without firing the callback or touching the
    /// label. Used to sync the slider to state changed elsewhere.
    pub fn move_to(&mut self, value: f64) {
        self.state.place_handle(value);
        trace!(slider = %self.name, value, handle_x = self.state.handle_x, "move");
    }

    /// Move the handle to `value` and fire the callback with `value`, as a
    /// drag would. The label is left alone.
    pub fn change(&mut self, value: f64) {
        self.state.place_handle(value);
        trace!(slider = %self.name, value, handle_x = self.state.handle_x, "change");
        (self.callback)(value);
    }

    /// Refit the track to a new width, keeping the current value.
    ///
    /// `None` (or `Some(0.0)`) re-measures the container. Never fires the
    /// callback. Returns the preserved value.
    pub fn resize(&mut self, width: Option<f32>) -> Result<f64, SliderError> {
        let width = match width {
            Some(w) if w != 0.0 => w,
            _ => self.container.measure_width(),
        };
        self.resizer
            .relayout(&mut self.state, self.config.margin, &self.ticks, width)
    }

    /// Apply a pointer at track-local `local_x`: the value, the label, the
    /// handle and the callback all come from the same inverted value.
    pub fn drag_to(&mut self, local_x: f64) -> f64 {
        let value = self.state.scale.invert(local_x);
        self.state.label_text = self.config.format_value(value);
        self.label.set_text(&self.state.label_text);
        self.state.place_handle(value);
        (self.callback)(value);
        trace!(slider = %self.name, local_x, value, "drag");
        value
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Identifier the slider was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label prefix shown before the value, e.g. `"Opacity = "`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} = ", self.config.display_name)
    }

    /// Current value, read back from the handle position.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.state.value()
    }

    /// Handle centre in track-local pixels.
    #[must_use]
    pub fn handle_x(&self) -> f64 {
        self.state.handle_x
    }

    /// Current pixel range of the track.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.state.scale.range()
    }

    /// Container width the track is laid out for.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.state.width
    }

    /// Ticks for the current layout.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.state.ticks
    }

    /// Text last written to the value label.
    #[must_use]
    pub fn label_text(&self) -> &str {
        &self.state.label_text
    }

    /// Resolved configuration.
    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Whether resize events are still acted on.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.resizer.is_subscribed()
    }

    fn track_origin(&self) -> Point {
        Point::new(
            self.bounds.x + self.config.margin.left,
            self.bounds.y + self.config.style.track_offset_y,
        )
    }

    fn geometry(&self) -> TrackGeometry {
        let (start, end) = self.range();
        TrackGeometry {
            origin: self.track_origin(),
            width: (end - start) as f32,
            half_height: self.config.style.overlay_width / 2.0,
            handle_x: self.state.handle_x as f32,
            handle_radius: self.config.style.handle_radius,
        }
    }
}

impl Widget for Slider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.state.width, self.config.height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = &self.config.style;
        let (start, end) = self.range();
        let from = Point::new(start as f32, 0.0);
        let to = Point::new(end as f32, 0.0);
        let origin = self.track_origin();

        canvas.push_transform(Transform2D::translate(origin.x, origin.y));

        canvas.draw_line(
            from,
            to,
            &StrokeStyle::new(style.track_color, style.track_width).round(),
        );
        canvas.draw_line(
            from,
            to,
            &StrokeStyle::new(style.track_inset_color, style.track_inset_width).round(),
        );

        TickRenderer::paint(&self.state.ticks, style, canvas);

        let handle = Point::new(self.state.handle_x as f32, 0.0);
        canvas.fill_circle(handle, style.handle_radius, style.handle_fill);
        canvas.stroke_circle(
            handle,
            style.handle_radius,
            style.handle_stroke,
            style.handle_stroke_width,
        );

        canvas.pop_transform();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::Resize { .. } = event {
            if self.resizer.is_subscribed() {
                if let Err(err) = self.resize(None) {
                    warn!(slider = %self.name, error = %err, "resize ignored");
                }
            }
            return None;
        }

        let input = PointerInput::from_event(event)?;
        let geometry = self.geometry();
        let local_x = self.interaction.handle(input, &geometry)?;
        let value = self.drag_to(local_x);
        Some(Box::new(SliderChanged { value }))
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Builder for [`Slider`] when the callback is supplied separately from the
/// rest of the construction inputs.
pub struct SliderBuilder {
    name: String,
    config: SliderConfig,
    callback: Option<ChangeCallback>,
}

impl fmt::Debug for SliderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderBuilder")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl SliderBuilder {
    /// Create a builder with default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: SliderConfig::default(),
            callback: None,
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn config(mut self, config: SliderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the value-changed callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(f64) + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Build the slider.
    pub fn build(
        self,
        container: impl Container + 'static,
        label: impl LabelTarget + 'static,
    ) -> Result<(Slider, ResizeSubscription), SliderError> {
        let callback = self.callback.ok_or(SliderError::MissingCallback)?;
        Slider::construct(
            Box::new(container),
            Box::new(label),
            self.name,
            callback,
            self.config,
        )
    }
}
