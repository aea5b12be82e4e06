pub mod buffer;
pub mod data;
pub mod escape;
pub mod mapper;
pub mod palette;
pub mod viewport;
