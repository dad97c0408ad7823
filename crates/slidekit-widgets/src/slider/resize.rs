//! Value-preserving relayout and the resize subscription handle.

use super::config::Margin;
use super::state::SliderState;
use super::ticks::TickRenderer;
use crate::error::SliderError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Relayouts the track for a new container width.
#[derive(Debug, Clone)]
pub struct ResizeController {
    active: Arc<AtomicBool>,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeController {
    /// Create a controller with a live subscription.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Handle that turns off automatic resizing.
    pub fn subscription(&self) -> ResizeSubscription {
        ResizeSubscription {
            active: Arc::clone(&self.active),
        }
    }

    /// Whether resize signals should still be acted on.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Refit the scale to `container_width` and realign the handle to the
    /// value it held before.
    ///
    /// The previous value is read back from the handle position, not from a
    /// cache. On error the state is left unchanged.
    pub fn relayout(
        &self,
        state: &mut SliderState,
        margin: Margin,
        ticks: &TickRenderer,
        container_width: f32,
    ) -> Result<f64, SliderError> {
        let previous = state.value();
        if !container_width.is_finite() || container_width <= margin.horizontal() {
            return Err(SliderError::TrackTooNarrow {
                width: container_width,
                left: margin.left,
                right: margin.right,
            });
        }
        let track = f64::from(container_width - margin.left - margin.right);
        state.scale.set_range((0.0, track))?;
        state.width = container_width;
        state.ticks = ticks.render(state.scale.as_ref());
        state.place_handle(previous);

        tracing::debug!(
            width = container_width,
            track,
            value = previous,
            handle_x = state.handle_x,
            "slider relayout"
        );
        Ok(previous)
    }
}

/// Disposal handle for a slider's resize subscription.
///
/// Call [`ResizeSubscription::dispose`] when the widget is torn down. After
/// that, resize events reaching the slider are ignored; explicit
/// [`resize`](super::Slider::resize) calls still work. Dropping the handle
/// without disposing keeps the subscription alive.
#[must_use = "dispose the subscription when the slider is torn down"]
#[derive(Debug, Clone)]
pub struct ResizeSubscription {
    active: Arc<AtomicBool>,
}

impl ResizeSubscription {
    /// Stop reacting to resize signals.
    pub fn dispose(self) {
        self.active.store(false, Ordering::Release);
        tracing::trace!("resize subscription disposed");
    }
}
