use crate::core::buffer::FractalBuffer;
use std::io::Write;
use std::path::Path;

/// Writes the buffer's colour grid as a binary P6 PPM. The grid is RGBA but
/// PPM carries packed RGB, so the alpha channel is dropped.
pub fn write_ppm(buffer: &FractalBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    let width = buffer.size().width();
    let height = buffer.size().height();

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;

    let mut rgb = Vec::with_capacity(buffer.size().pixel_count() * 3);
    for pixel in buffer.colour_bytes().chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    file.write_all(&rgb)?;

    Ok(())
}
