//! Main GUI application loop: drag to select a region, release to zoom.

use crate::core::buffer::FractalBuffer;
use crate::core::data::colour::Colour;
use crate::core::data::screen::{ScreenPoint, ScreenSize};
use crate::core::palette::LevelPalette;
use crate::core::viewport::{ViewportState, default_plane_rect};
use crate::input::gui::overlay;
use crate::input::region_selector::RegionSelector;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Mandelzoom";
const PALETTE_LEVELS: usize = 256;

/// Application state: the pixels framebuffer plus the fractal engine.
struct App {
    pixels: Pixels<'static>,
    size: ScreenSize,
    palette: LevelPalette,
    viewport: ViewportState,
    buffer: FractalBuffer,
    selector: RegionSelector,
    cursor: Option<ScreenPoint>,
    show_level_readout: bool,
}

impl App {
    /// Creates the App with a pixels surface tied to the window. Surface or
    /// palette failure here is fatal; there is no frame loop to recover into.
    fn new(window: &'static Window) -> Self {
        let inner = window.inner_size();
        let size = ScreenSize::new(inner.width, inner.height)
            .expect("window starts with a non-zero size");
        let surface_texture = SurfaceTexture::new(inner.width, inner.height, window);
        let pixels = Pixels::new(inner.width, inner.height, surface_texture)
            .expect("Failed to create pixels surface");
        let palette =
            LevelPalette::ultra_fractal(PALETTE_LEVELS).expect("default palette is valid");

        Self {
            pixels,
            size,
            palette,
            viewport: ViewportState::new(default_plane_rect()),
            buffer: FractalBuffer::new(size),
            selector: RegionSelector::new(),
            cursor: None,
            show_level_readout: false,
        }
    }

    /// Renders the cached buffer plus overlays to the window, rebuilding
    /// first if the viewport changed. The rebuild runs to completion on this
    /// thread; a zoom may visibly stall one frame.
    fn render(&mut self) -> Result<(), pixels::Error> {
        if self.viewport.take_stale() {
            self.buffer.rebuild(self.viewport.plane(), &self.palette);
        }

        let frame = self.pixels.frame_mut();
        frame.copy_from_slice(self.buffer.colour_bytes());

        overlay::draw_crosshair(frame, self.size, Colour::RED);
        if let Some(rect) = self.selector.active_rect() {
            overlay::draw_rect_outline(frame, self.size, rect, Colour::WHITE);
        }

        self.pixels.render()
    }

    /// Handles window resize by recreating the pixels surface and the
    /// fractal buffer at the new dimensions.
    fn resize(&mut self, width: u32, height: u32) {
        let Ok(size) = ScreenSize::new(width, height) else {
            // Minimized; keep the old buffer until a real size arrives.
            return;
        };

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");

        self.size = size;
        self.buffer = FractalBuffer::new(size);
        self.viewport.invalidate();
    }

    fn begin_drag(&mut self) {
        if let Some(position) = self.cursor {
            self.selector.begin(position);
        }
    }

    fn move_cursor(&mut self, position: ScreenPoint) {
        self.cursor = Some(position);
        self.selector.update(position);
    }

    /// Ends the drag gesture and commits the selection as the new viewport.
    /// A zero-area selection (a plain click) zooms nothing.
    fn end_drag(&mut self) {
        if let Some(selection) = self.selector.finish() {
            self.viewport.commit_zoom(selection, self.size);
        }
    }

    /// The cached escape level under the cursor, or `None` when the cursor
    /// is outside the buffer (e.g. stale position across a resize).
    fn level_under_cursor(&self) -> Option<(u32, u32, u16)> {
        let cursor = self.cursor?;
        if cursor.x < 0.0 || cursor.y < 0.0 {
            return None;
        }

        let col = cursor.x as u32;
        let row = cursor.y as u32;
        if row >= self.size.height() || col >= self.size.width() {
            return None;
        }

        Some((row, col, self.buffer.sample(row, col)))
    }

    /// Shows the level readout in the window title while toggled on.
    fn refresh_title(&self, window: &Window) {
        if !self.show_level_readout {
            window.set_title(WINDOW_TITLE);
            return;
        }

        match self.level_under_cursor() {
            Some((row, col, level)) => window.set_title(&format!(
                "{WINDOW_TITLE} - level {level} at ({row}, {col})"
            )),
            None => window.set_title(WINDOW_TITLE),
        }
    }
}

/// Runs the GUI application.
///
/// Left-drag selects a zoom region, `r` resets to the full-set view, `d`
/// toggles the level readout, `q` or Escape quits. Does not return until the
/// window is closed.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(900.0, 900.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = App::new(window);
    let mut redraw_pending = true;

    event_loop
        .run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;
                        app.refresh_title(window);

                        if let Err(e) = app.render() {
                            log::error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(new_size) => {
                        app.resize(new_size.width, new_size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { .. } => {
                        let new_size = window.inner_size();
                        app.resize(new_size.width, new_size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        app.move_cursor(ScreenPoint {
                            x: position.x as f32,
                            y: position.y as f32,
                        });
                        redraw_pending = true;
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if *button == MouseButton::Left {
                            match state {
                                ElementState::Pressed => app.begin_drag(),
                                ElementState::Released => app.end_drag(),
                            }
                            redraw_pending = true;
                        }
                    }
                    WindowEvent::KeyboardInput {
                        event: key_event, ..
                    } => {
                        if key_event.state == ElementState::Pressed && !key_event.repeat {
                            match key_event.logical_key.as_ref() {
                                Key::Named(NamedKey::Escape) | Key::Character("q") => {
                                    elwt.exit();
                                }
                                Key::Character("d") => {
                                    app.show_level_readout = !app.show_level_readout;
                                    redraw_pending = true;
                                }
                                Key::Character("r") => {
                                    app.viewport.reset();
                                    redraw_pending = true;
                                }
                                _ => {}
                            }
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
