pub mod colour;
pub mod complex;
pub mod plane_rect;
pub mod screen;
