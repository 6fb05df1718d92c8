//! Environment configuration loading and application.
mod apply;
mod loader;
pub mod types;


pub use apply::apply_config;
pub use loader::{load_config, resolve_config_path};

pub(crate) use loader::load_config_file;
