use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for PlaneRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "plane rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PlaneRectError {}

/// The visible window in the complex plane. The top-left corner holds the
/// minimum real and imaginary parts; rows grow towards larger imaginary parts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl PlaneRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, PlaneRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(PlaneRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }
}
