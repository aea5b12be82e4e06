use crate::core::data::colour::Colour;
use crate::core::escape::EscapeLevel;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooFewLevels { levels: usize },
    TooManyLevels { levels: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLevels { levels } => {
                write!(f, "palette needs at least 2 levels, got {}", levels)
            }
            Self::TooManyLevels { levels } => {
                write!(
                    f,
                    "palette cannot exceed {} levels, got {}",
                    LevelPalette::MAX_LEVELS,
                    levels
                )
            }
        }
    }
}

impl Error for PaletteError {}

/// A fixed lookup table mapping each escape level to a display colour.
///
/// The table holds exactly `max_level + 1` entries and is validated once at
/// construction; after that `colour_for` indexes it directly. Passing a level
/// above `max_level` is a programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPalette {
    colours: Vec<Colour>,
}

// Control points for the Ultra Fractal gradient, taken from the classic
// Mandelbrot colouring: position along [0, 1] and the RGB value there.
const ULTRA_FRACTAL_STOPS: [(f64, [f64; 3]); 8] = [
    (0.0, [0.0, 0.0, 0.0]),
    (0.0625, [0.0, 7.0, 100.0]),
    (0.16, [32.0, 107.0, 203.0]),
    (0.42, [237.0, 255.0, 255.0]),
    (0.6425, [255.0, 170.0, 0.0]),
    (0.8575, [0.0, 7.0, 100.0]),
    (0.92875, [0.0, 5.0, 0.0]),
    (1.0, [0.0, 0.0, 0.0]),
];

impl LevelPalette {
    /// Escape levels are u16, so the table is capped at one entry per level.
    pub const MAX_LEVELS: usize = EscapeLevel::MAX as usize + 1;

    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.len() < 2 {
            return Err(PaletteError::TooFewLevels {
                levels: colours.len(),
            });
        }

        if colours.len() > Self::MAX_LEVELS {
            return Err(PaletteError::TooManyLevels {
                levels: colours.len(),
            });
        }

        Ok(Self { colours })
    }

    /// Builds a palette by sampling the Ultra Fractal gradient at `levels`
    /// evenly spaced positions. The final entry (the in-set level) is black.
    pub fn ultra_fractal(levels: usize) -> Result<Self, PaletteError> {
        if levels < 2 {
            return Err(PaletteError::TooFewLevels { levels });
        }

        let colours = (0..levels)
            .map(|idx| {
                let t = idx as f64 / (levels - 1) as f64;
                let [r, g, b] = sample_gradient(t);
                Colour::opaque(r, g, b)
            })
            .collect();

        Self::new(colours)
    }

    #[must_use]
    pub fn max_level(&self) -> EscapeLevel {
        (self.colours.len() - 1) as EscapeLevel
    }

    #[must_use]
    pub fn colour_for(&self, level: EscapeLevel) -> Colour {
        self.colours[level as usize]
    }
}

fn sample_gradient(t: f64) -> [u8; 3] {
    let mut segment = &ULTRA_FRACTAL_STOPS[..2];
    for window in ULTRA_FRACTAL_STOPS.windows(2) {
        if t <= window[1].0 {
            segment = window;
            break;
        }
    }

    let (start_t, start_rgb) = segment[0];
    let (end_t, end_rgb) = segment[1];
    let local_t = (t - start_t) / (end_t - start_t);

    let mut rgb = [0u8; 3];
    for channel in 0..3 {
        let value = start_rgb[channel] + local_t * (end_rgb[channel] - start_rgb[channel]);
        rgb[channel] = value.round().clamp(0.0, 255.0) as u8;
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_minimum_length() {
        let result = LevelPalette::new(vec![Colour::BLACK]);

        assert_eq!(result, Err(PaletteError::TooFewLevels { levels: 1 }));
    }

    #[test]
    fn test_max_level_is_one_less_than_table_length() {
        let palette = LevelPalette::new(vec![Colour::BLACK; 100]).unwrap();

        assert_eq!(palette.max_level(), 99);
    }

    #[test]
    fn test_colour_for_indexes_the_table() {
        let palette = LevelPalette::new(vec![
            Colour::opaque(10, 0, 0),
            Colour::opaque(0, 20, 0),
            Colour::opaque(0, 0, 30),
        ])
        .unwrap();

        assert_eq!(palette.colour_for(0), Colour::opaque(10, 0, 0));
        assert_eq!(palette.colour_for(2), Colour::opaque(0, 0, 30));
    }

    #[test]
    #[should_panic]
    fn test_colour_for_panics_past_max_level() {
        let palette = LevelPalette::new(vec![Colour::BLACK; 4]).unwrap();

        let _ = palette.colour_for(4);
    }

    #[test]
    fn test_ultra_fractal_has_requested_length() {
        let palette = LevelPalette::ultra_fractal(256).unwrap();

        assert_eq!(palette.max_level(), 255);
    }

    #[test]
    fn test_ultra_fractal_in_set_level_is_black() {
        let palette = LevelPalette::ultra_fractal(100).unwrap();

        assert_eq!(palette.colour_for(palette.max_level()), Colour::BLACK);
    }

    #[test]
    fn test_ultra_fractal_starts_black() {
        let palette = LevelPalette::ultra_fractal(100).unwrap();

        assert_eq!(palette.colour_for(0), Colour::BLACK);
    }

    #[test]
    fn test_ultra_fractal_rejects_single_level() {
        assert!(LevelPalette::ultra_fractal(1).is_err());
    }
}
