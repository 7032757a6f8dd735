//! Server settings: loading, validation, and management.

mod loader;
mod manager;
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    Settings,
    ValidationError,
};
