pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
