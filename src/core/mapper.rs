use crate::core::data::complex::Complex;
use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
use crate::core::data::screen::{ScreenRect, ScreenSize};

/// Maps a (possibly fractional) screen position into the complex plane.
///
/// The position is first scaled to a normalized [-1, 1] range on each axis,
/// then mapped affinely onto the visible plane window. Columns map to the
/// real axis, rows to the imaginary axis.
#[must_use]
pub fn point_to_plane(x: f64, y: f64, size: ScreenSize, plane: PlaneRect) -> Complex {
    let norm_x = 2.0 * x / f64::from(size.width()) - 1.0;
    let norm_y = 2.0 * y / f64::from(size.height()) - 1.0;

    let half_width = plane.width() / 2.0;
    let half_height = plane.height() / 2.0;
    let centre = Complex {
        real: plane.top_left().real + half_width,
        imag: plane.top_left().imag + half_height,
    };

    Complex {
        real: centre.real + norm_x * half_width,
        imag: centre.imag + norm_y * half_height,
    }
}

/// Maps an integer pixel coordinate into the complex plane. Callers iterate
/// `row` in `[0, height)` and `col` in `[0, width)`, so the result always
/// lies inside the plane window.
#[must_use]
pub fn pixel_to_plane(row: u32, col: u32, size: ScreenSize, plane: PlaneRect) -> Complex {
    point_to_plane(f64::from(col), f64::from(row), size, plane)
}

/// Maps a screen-space rectangle back into the plane, producing the window a
/// committed zoom selects. Fails only if the rectangle has no area.
pub fn screen_rect_to_plane(
    rect: ScreenRect,
    size: ScreenSize,
    plane: PlaneRect,
) -> Result<PlaneRect, PlaneRectError> {
    let top_left = point_to_plane(f64::from(rect.x), f64::from(rect.y), size, plane);
    let bottom_right = point_to_plane(
        f64::from(rect.x + rect.width),
        f64::from(rect.y + rect.height),
        size,
        plane,
    );

    PlaneRect::new(top_left, bottom_right)
}
