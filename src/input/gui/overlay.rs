//! Direct-to-frame overlay drawing for the selection rectangle and the
//! centre crosshair. The frame is the RGBA byte grid the pixels surface
//! presents; everything here clamps, so overlays near an edge are clipped
//! rather than wrapped.

use crate::core::data::colour::Colour;
use crate::core::data::screen::{ScreenRect, ScreenSize};

fn put_pixel(frame: &mut [u8], size: ScreenSize, x: u32, y: u32, colour: Colour) {
    if x >= size.width() || y >= size.height() {
        return;
    }

    let offset = (y as usize * size.width() as usize + x as usize) * 4;
    frame[offset..offset + 4].copy_from_slice(&colour.to_bytes());
}

/// Draws a one-pixel rectangle outline. Parts outside the frame are clipped.
pub fn draw_rect_outline(frame: &mut [u8], size: ScreenSize, rect: ScreenRect, colour: Colour) {
    let x0 = rect.x.max(0.0) as u32;
    let y0 = rect.y.max(0.0) as u32;
    let x1 = ((rect.x + rect.width).max(0.0) as u32).min(size.width().saturating_sub(1));
    let y1 = ((rect.y + rect.height).max(0.0) as u32).min(size.height().saturating_sub(1));

    for x in x0..=x1 {
        put_pixel(frame, size, x, y0, colour);
        put_pixel(frame, size, x, y1, colour);
    }
    for y in y0..=y1 {
        put_pixel(frame, size, x0, y, colour);
        put_pixel(frame, size, x1, y, colour);
    }
}

/// Draws the full-width and full-height centre lines marking the middle of
/// the view.
pub fn draw_crosshair(frame: &mut [u8], size: ScreenSize, colour: Colour) {
    let mid_x = size.width() / 2;
    let mid_y = size.height() / 2;

    for x in 0..size.width() {
        put_pixel(frame, size, x, mid_y, colour);
    }
    for y in 0..size.height() {
        put_pixel(frame, size, mid_x, y, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_frame(size: ScreenSize) -> Vec<u8> {
        vec![0; size.pixel_count() * 4]
    }

    fn pixel_at(frame: &[u8], size: ScreenSize, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * size.width() as usize + x as usize) * 4;
        frame[offset..offset + 4].try_into().unwrap()
    }

    #[test]
    fn test_rect_outline_marks_corners() {
        let size = ScreenSize::new(20, 20).unwrap();
        let mut frame = blank_frame(size);
        let rect = ScreenRect {
            x: 2.0,
            y: 3.0,
            width: 10.0,
            height: 8.0,
        };

        draw_rect_outline(&mut frame, size, rect, Colour::WHITE);

        assert_eq!(pixel_at(&frame, size, 2, 3), Colour::WHITE.to_bytes());
        assert_eq!(pixel_at(&frame, size, 12, 11), Colour::WHITE.to_bytes());
        // interior stays untouched
        assert_eq!(pixel_at(&frame, size, 7, 7), [0, 0, 0, 0]);
    }

    #[test]
    fn test_rect_outline_clips_at_the_frame_edge() {
        let size = ScreenSize::new(10, 10).unwrap();
        let mut frame = blank_frame(size);
        let rect = ScreenRect {
            x: 5.0,
            y: 5.0,
            width: 100.0,
            height: 100.0,
        };

        draw_rect_outline(&mut frame, size, rect, Colour::WHITE);

        assert_eq!(pixel_at(&frame, size, 9, 5), Colour::WHITE.to_bytes());
        assert_eq!(pixel_at(&frame, size, 5, 9), Colour::WHITE.to_bytes());
    }

    #[test]
    fn test_crosshair_spans_the_frame() {
        let size = ScreenSize::new(11, 11).unwrap();
        let mut frame = blank_frame(size);

        draw_crosshair(&mut frame, size, Colour::RED);

        assert_eq!(pixel_at(&frame, size, 0, 5), Colour::RED.to_bytes());
        assert_eq!(pixel_at(&frame, size, 10, 5), Colour::RED.to_bytes());
        assert_eq!(pixel_at(&frame, size, 5, 0), Colour::RED.to_bytes());
        assert_eq!(pixel_at(&frame, size, 5, 10), Colour::RED.to_bytes());
    }
}
