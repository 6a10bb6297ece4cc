mod config;
pub use config::{Config, CompilerConfig, ConfigLayer};
