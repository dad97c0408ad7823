//! Mutable slider state shared by the interaction and resize paths.

use super::ticks::Tick;
use slidekit_core::Scale;

/// Live state of one slider.
///
/// The handle position is the only stored coordinate. The current value is
/// always `scale.invert(handle_x)`, so it stays inside the domain.
#[derive(Debug)]
pub struct SliderState {
    /// Value-to-pixel mapping for the current track width
    pub scale: Box<dyn Scale>,
    /// Handle centre in track-local pixels
    pub handle_x: f64,
    /// Container width the track was laid out for
    pub width: f32,
    /// Text last written to the value label
    pub label_text: String,
    /// Ticks rendered for the current range
    pub ticks: Vec<Tick>,
}

impl SliderState {
    /// Create state with the handle at `handle_x`.
    #[must_use]
    pub fn new(scale: Box<dyn Scale>, handle_x: f64, width: f32) -> Self {
        Self {
            scale,
            handle_x,
            width,
            label_text: String::new(),
            ticks: Vec::new(),
        }
    }

    /// Current value, derived from the handle position.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.scale.invert(self.handle_x)
    }

    /// Place the handle at `value` through the scale.
    pub fn place_handle(&mut self, value: f64) {
        self.handle_x = self.scale.forward(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::ScaleKind;

    fn state(handle_x: f64) -> SliderState {
        let scale = ScaleKind::Linear
            .build((0.0, 100.0), (0.0, 170.0))
            .unwrap();
        SliderState::new(scale, handle_x, 200.0)
    }

    #[test]
    fn test_value_derived_from_handle() {
        assert_eq!(state(85.0).value(), 50.0);
        assert_eq!(state(0.0).value(), 0.0);
    }

    #[test]
    fn test_value_clamped_when_handle_outside_track() {
        assert_eq!(state(-40.0).value(), 0.0);
        assert_eq!(state(500.0).value(), 100.0);
    }

    #[test]
    fn test_place_handle() {
        let mut s = state(0.0);
        s.place_handle(25.0);
        assert_eq!(s.handle_x, 42.5);
        s.place_handle(1000.0);
        assert_eq!(s.handle_x, 170.0);
    }
}
