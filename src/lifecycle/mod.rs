//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → gateway client → cache → contract handler → config handler
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful HTTP shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then core, then listeners
//! - Fail fast: any startup error is fatal

pub mod signals;
pub mod startup;

pub use signals::shutdown_signal;
pub use startup::{build_config_handler, initialize, StartupError};
