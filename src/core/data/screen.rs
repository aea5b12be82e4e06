use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ScreenSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "screen size must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for ScreenSizeError {}

/// The pixel dimensions of the rendered surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    width: u32,
    height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenSizeError> {
        if width == 0 || height == 0 {
            return Err(ScreenSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A position on the screen in pixel coordinates. Fractional values are kept
/// because pointer events report sub-pixel positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned screen rectangle with non-negative extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Builds the normalized rectangle spanned by two points, independent of
    /// which corner the drag started from.
    #[must_use]
    pub fn from_corners(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// A zero-area rectangle is what a click without movement produces; it
    /// never makes a valid zoom target.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
