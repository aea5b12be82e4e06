use crate::core::data::complex::Complex;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::screen::{ScreenRect, ScreenSize};
use crate::core::mapper::screen_rect_to_plane;

/// The classic full-set framing: the whole Mandelbrot set with a little
/// margin on every side.
#[must_use]
pub fn default_plane_rect() -> PlaneRect {
    PlaneRect::new(
        Complex {
            real: -2.1,
            imag: -1.5,
        },
        Complex {
            real: 0.9,
            imag: 1.5,
        },
    )
    .expect("default mandelbrot view is valid")
}

/// Owns the currently visible plane window. Nothing else mutates it: zooms
/// and resets go through here, and each successful change marks the cached
/// buffer stale until the owner rebuilds it.
#[derive(Debug)]
pub struct ViewportState {
    plane: PlaneRect,
    home: PlaneRect,
    stale: bool,
}

impl ViewportState {
    #[must_use]
    pub fn new(home: PlaneRect) -> Self {
        Self {
            plane: home,
            home,
            stale: true,
        }
    }

    #[must_use]
    pub fn plane(&self) -> PlaneRect {
        self.plane
    }

    /// Replaces the visible window with the plane region under the committed
    /// screen rectangle. Degenerate rectangles are ignored; a click without
    /// a drag is not a zoom.
    pub fn commit_zoom(&mut self, selection: ScreenRect, screen: ScreenSize) {
        if selection.is_degenerate() {
            return;
        }

        if let Ok(plane) = screen_rect_to_plane(selection, screen, self.plane) {
            log::info!("zooming to plane window {:?}", plane);
            self.plane = plane;
            self.stale = true;
        }
    }

    /// Forces a rebuild without changing the plane window. Needed when the
    /// pixel grid itself changes, e.g. on a window resize.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Restores the default full-set view.
    pub fn reset(&mut self) {
        self.plane = self.home;
        self.stale = true;
    }

    /// True once per viewport change: reports whether the buffer must be
    /// rebuilt and clears the flag.
    pub fn take_stale(&mut self) -> bool {
        std::mem::replace(&mut self.stale, false)
    }
}
