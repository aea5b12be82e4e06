use crate::core::buffer::FractalBuffer;
use crate::core::data::screen::ScreenSize;
use crate::core::palette::LevelPalette;
use crate::core::viewport::{ViewportState, default_plane_rect};
use crate::storage::write_ppm::write_ppm;
use std::path::Path;
use std::time::Instant;

const SNAPSHOT_WIDTH: u32 = 800;
const SNAPSHOT_HEIGHT: u32 = 600;
const PALETTE_LEVELS: usize = 256;

/// Renders the default full-set view headlessly and writes it as a PPM.
/// Exercises the whole pipeline without a window.
pub fn render_snapshot(filepath: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let size = ScreenSize::new(SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT)?;
    let palette = LevelPalette::ultra_fractal(PALETTE_LEVELS)?;
    let mut viewport = ViewportState::new(default_plane_rect());
    let mut buffer = FractalBuffer::new(size);

    log::info!(
        "rendering {}x{} snapshot, {} palette levels",
        size.width(),
        size.height(),
        PALETTE_LEVELS
    );

    let start = Instant::now();
    if viewport.take_stale() {
        buffer.rebuild(viewport.plane(), &palette);
    }
    log::info!("rendered in {:?}", start.elapsed());

    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_ppm(&buffer, &filepath)?;
    log::info!("saved to {}", filepath.as_ref().display());

    Ok(())
}
