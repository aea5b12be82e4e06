mod controllers;
mod core;
mod input;
mod storage;

pub use crate::controllers::snapshot::render_snapshot;
pub use crate::core::buffer::FractalBuffer;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
pub use crate::core::data::screen::{ScreenPoint, ScreenRect, ScreenSize, ScreenSizeError};
pub use crate::core::escape::{EscapeLevel, escape_level};
pub use crate::core::mapper::{pixel_to_plane, point_to_plane, screen_rect_to_plane};
pub use crate::core::palette::{LevelPalette, PaletteError};
pub use crate::core::viewport::{ViewportState, default_plane_rect};
pub use crate::input::region_selector::RegionSelector;
pub use crate::storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
