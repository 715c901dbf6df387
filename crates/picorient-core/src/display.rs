//! Display metrics collaborator.

/// Supplies the current screen size in pixels.
pub trait DisplayMetrics: Send + Sync {
    /// Returns `(width, height)` of the display as currently oriented.
    fn display_size(&self) -> (u32, u32);
}

/// A display of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDisplay {
    pub width: u32,
    pub height: u32,
}

impl FixedDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl DisplayMetrics for FixedDisplay {
    fn display_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Aspect ratio as `height / width`, or `None` if either side is zero.
pub fn display_ratio(width: u32, height: u32) -> Option<f64> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(height as f64 / width as f64)
}
