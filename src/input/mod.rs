#[cfg(feature = "gui")]
pub mod gui;
pub mod region_selector;
