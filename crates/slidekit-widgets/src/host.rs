//! Host-side collaborators a slider needs from the surrounding layout.
//!
//! The markup around a slider (title row, value label, container) is built by
//! the host. The slider only needs to measure its container and to write the
//! live value into a label.

use std::sync::{Arc, Mutex, PoisonError};

/// A container whose current width can be measured.
pub trait Container: Send + Sync {
    /// Current rendered width in pixels.
    fn measure_width(&self) -> f32;
}

/// Target for the live value label.
pub trait LabelTarget: Send + Sync {
    /// Replace the label text.
    fn set_text(&mut self, text: &str);
}

/// Container with a fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidth(pub f32);

impl Container for FixedWidth {
    fn measure_width(&self) -> f32 {
        self.0
    }
}

/// Container whose width the host updates from outside (e.g. on window
/// resize). Clones share the same width.
#[derive(Debug, Clone, Default)]
pub struct SharedWidth(Arc<Mutex<f32>>);

impl SharedWidth {
    /// Create a shared width.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self(Arc::new(Mutex::new(width)))
    }

    /// Update the width every clone observes.
    pub fn set(&self, width: f32) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = width;
    }
}

impl Container for SharedWidth {
    fn measure_width(&self) -> f32 {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Label text the host can read back. Clones share the same text.
#[derive(Debug, Clone, Default)]
pub struct LabelBuffer(Arc<Mutex<String>>);

impl LabelBuffer {
    /// Create an empty label buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current label text.
    #[must_use]
    pub fn text(&self) -> String {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LabelTarget for LabelBuffer {
    fn set_text(&mut self, text: &str) {
        let mut current = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        current.clear();
        current.push_str(text);
    }
}

/// Label target that discards updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLabel;

impl LabelTarget for NoLabel {
    fn set_text(&mut self, _text: &str) {}
}
