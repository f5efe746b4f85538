//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters and histograms via the `metrics` facade)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Metric calls are no-ops until a recorder is installed, so library users
//!   and tests pay nothing
//! - Log level comes from config, `RUST_LOG` overrides it

pub mod logging;
pub mod metrics;
