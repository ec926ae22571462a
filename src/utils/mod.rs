pub mod cli;
pub mod date;
