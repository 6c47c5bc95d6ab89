pub mod args;
pub mod commands;

pub use commands::{generate_command, run};
