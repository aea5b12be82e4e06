mod app;
mod overlay;

pub use app::run_gui;
