//! Size limits passed down during measurement.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Smallest and largest size a widget may take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Lower bound
    pub min: Size,
    /// Upper bound; either side may be infinite
    pub max: Size,
}

impl Constraints {
    /// Create constraints from explicit bounds.
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(Size::ZERO, size)
    }

    /// Clamp a preferred size into these bounds.
    #[must_use]
    pub fn constrain(&self, preferred: Size) -> Size {
        Size::new(
            preferred.width.clamp(self.min.width, self.max.width),
            preferred.height.clamp(self.min.height, self.max.height),
        )
    }
}
