pub mod cli;
pub mod config;
pub mod generator;
pub mod params;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use generator::{codegen, parser};
pub use params::{Namespace, ParamType, Parameter};
