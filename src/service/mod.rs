//! Service-level composition of contract state and static settings.

pub mod config_handler;

pub use config_handler::{ConfigHandler, ConfigSnapshot};
