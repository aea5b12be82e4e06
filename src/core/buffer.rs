use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::screen::ScreenSize;
use crate::core::escape::{EscapeLevel, escape_level};
use crate::core::mapper::pixel_to_plane;
use crate::core::palette::LevelPalette;
use rayon::prelude::*;
use std::time::Instant;

/// The per-viewport render cache: one escape level and one RGBA colour per
/// pixel, each stored as a single contiguous row-major allocation.
///
/// Both grids are sized once at construction and fully overwritten by
/// `rebuild`; nothing grows or shrinks per frame. Addressing is
/// `row * width + col`.
#[derive(Debug)]
pub struct FractalBuffer {
    size: ScreenSize,
    levels: Vec<EscapeLevel>,
    colours: Vec<u8>,
}

const BYTES_PER_PIXEL: usize = 4;

impl FractalBuffer {
    #[must_use]
    pub fn new(size: ScreenSize) -> Self {
        Self {
            size,
            levels: vec![0; size.pixel_count()],
            colours: vec![0; size.pixel_count() * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn size(&self) -> ScreenSize {
        self.size
    }

    /// Recomputes every pixel for the given plane window. Rows are fanned out
    /// across rayon workers, each owning a disjoint band of both grids; the
    /// call returns only after all rows are done.
    pub fn rebuild(&mut self, plane: PlaneRect, palette: &LevelPalette) {
        let size = self.size;
        let max_level = palette.max_level();
        let width = size.width() as usize;
        let start = Instant::now();

        self.levels
            .par_chunks_mut(width)
            .zip(self.colours.par_chunks_mut(width * BYTES_PER_PIXEL))
            .enumerate()
            .for_each(|(row, (level_row, colour_row))| {
                fill_row(row as u32, size, plane, palette, max_level, level_row, colour_row);
            });

        log::debug!(
            "rebuilt {}x{} buffer for plane window {:?} in {:?}",
            size.width(),
            size.height(),
            plane,
            start.elapsed()
        );
    }

    /// Single-threaded rebuild. Kept so tests can check the parallel path
    /// against it pixel for pixel.
    pub fn rebuild_sequential(&mut self, plane: PlaneRect, palette: &LevelPalette) {
        let size = self.size;
        let max_level = palette.max_level();
        let width = size.width() as usize;

        for (row, (level_row, colour_row)) in self
            .levels
            .chunks_mut(width)
            .zip(self.colours.chunks_mut(width * BYTES_PER_PIXEL))
            .enumerate()
        {
            fill_row(row as u32, size, plane, palette, max_level, level_row, colour_row);
        }
    }

    /// Reads a cached escape level. Out-of-range coordinates are a
    /// programming error.
    #[must_use]
    pub fn sample(&self, row: u32, col: u32) -> EscapeLevel {
        assert!(row < self.size.height(), "row {} out of bounds", row);
        assert!(col < self.size.width(), "col {} out of bounds", col);

        self.levels[row as usize * self.size.width() as usize + col as usize]
    }

    /// The colour grid as flat RGBA bytes, row-major, ready for upload to the
    /// display surface.
    #[must_use]
    pub fn colour_bytes(&self) -> &[u8] {
        &self.colours
    }
}

fn fill_row(
    row: u32,
    size: ScreenSize,
    plane: PlaneRect,
    palette: &LevelPalette,
    max_level: EscapeLevel,
    level_row: &mut [EscapeLevel],
    colour_row: &mut [u8],
) {
    for col in 0..level_row.len() {
        let c = pixel_to_plane(row, col as u32, size, plane);
        let level = escape_level(c, max_level);

        level_row[col] = level;
        let offset = col * BYTES_PER_PIXEL;
        colour_row[offset..offset + BYTES_PER_PIXEL]
            .copy_from_slice(&palette.colour_for(level).to_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn full_set_view() -> PlaneRect {
        PlaneRect::new(
            Complex {
                real: -2.0,
                imag: -1.5,
            },
            Complex {
                real: 1.0,
                imag: 1.5,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_buffer_allocations_match_screen_size() {
        let size = ScreenSize::new(64, 48).unwrap();

        let buffer = FractalBuffer::new(size);

        assert_eq!(buffer.colour_bytes().len(), 64 * 48 * 4);
        assert_eq!(buffer.sample(47, 63), 0);
    }

    #[test]
    fn test_rebuild_interior_pixel_reaches_the_cap() {
        let palette = LevelPalette::ultra_fractal(100).unwrap();
        let size = ScreenSize::new(100, 100).unwrap();
        let mut buffer = FractalBuffer::new(size);

        buffer.rebuild(full_set_view(), &palette);

        // col 33, row 50 maps to roughly -1.01 + 0i, inside the period-2 bulb.
        assert_eq!(buffer.sample(50, 33), 99);
    }

    #[test]
    fn test_rebuild_corner_pixel_escapes_immediately() {
        let palette = LevelPalette::ultra_fractal(100).unwrap();
        let size = ScreenSize::new(100, 100).unwrap();
        let mut buffer = FractalBuffer::new(size);

        buffer.rebuild(full_set_view(), &palette);

        // (0, 0) maps to -2 - 1.5i, whose modulus is already above 2.
        assert!(buffer.sample(0, 0) < 5);
    }

    #[test]
    fn test_sample_is_stable_between_reads() {
        let palette = LevelPalette::ultra_fractal(64).unwrap();
        let size = ScreenSize::new(40, 30).unwrap();
        let mut buffer = FractalBuffer::new(size);

        buffer.rebuild(full_set_view(), &palette);

        assert_eq!(buffer.sample(15, 20), buffer.sample(15, 20));
    }

    #[test]
    fn test_rebuild_matches_direct_evaluation_at_corners() {
        let palette = LevelPalette::ultra_fractal(100).unwrap();
        let size = ScreenSize::new(50, 40).unwrap();
        let mut buffer = FractalBuffer::new(size);
        let plane = full_set_view();

        buffer.rebuild(plane, &palette);

        for (row, col) in [(0, 0), (0, 49), (39, 0), (39, 49)] {
            let c = pixel_to_plane(row, col, size, plane);
            let expected = escape_level(c, palette.max_level());
            assert_eq!(buffer.sample(row, col), expected);
        }
    }

    #[test]
    fn test_rebuild_overwrites_previous_viewport_completely() {
        let palette = LevelPalette::ultra_fractal(100).unwrap();
        let size = ScreenSize::new(50, 50).unwrap();
        let mut buffer = FractalBuffer::new(size);

        buffer.rebuild(full_set_view(), &palette);
        let zoomed = PlaneRect::new(
            Complex {
                real: -0.2,
                imag: -0.2,
            },
            Complex {
                real: 0.2,
                imag: 0.2,
            },
        )
        .unwrap();
        buffer.rebuild(zoomed, &palette);

        for (row, col) in [(0, 0), (0, 49), (49, 0), (49, 49)] {
            let c = pixel_to_plane(row, col, size, zoomed);
            let expected = escape_level(c, palette.max_level());
            assert_eq!(buffer.sample(row, col), expected);
        }
    }

    #[test]
    fn test_parallel_rebuild_matches_sequential() {
        let palette = LevelPalette::ultra_fractal(128).unwrap();
        let size = ScreenSize::new(80, 60).unwrap();
        let plane = full_set_view();

        let mut parallel = FractalBuffer::new(size);
        parallel.rebuild(plane, &palette);

        let mut sequential = FractalBuffer::new(size);
        sequential.rebuild_sequential(plane, &palette);

        for row in 0..60 {
            for col in 0..80 {
                assert_eq!(parallel.sample(row, col), sequential.sample(row, col));
            }
        }
        assert_eq!(parallel.colour_bytes(), sequential.colour_bytes());
    }

    #[test]
    fn test_colour_grid_matches_palette_lookup() {
        let palette = LevelPalette::ultra_fractal(100).unwrap();
        let size = ScreenSize::new(10, 10).unwrap();
        let mut buffer = FractalBuffer::new(size);

        buffer.rebuild(full_set_view(), &palette);

        let level = buffer.sample(3, 7);
        let offset = (3 * 10 + 7) * 4;
        assert_eq!(
            &buffer.colour_bytes()[offset..offset + 4],
            &palette.colour_for(level).to_bytes()
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_sample_panics_out_of_bounds() {
        let buffer = FractalBuffer::new(ScreenSize::new(10, 10).unwrap());

        let _ = buffer.sample(10, 0);
    }
}
