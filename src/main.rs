fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    mandelzoom::render_snapshot("output/mandelbrot.ppm")?;

    Ok(())
}
