//! Shared tracing setup for prepchat binaries.
//!
//! ```no_run
//! let config = prepchat_observability::ObservabilityConfig::new("prepchat")
//!     .with_log_level("debug");
//! prepchat_observability::init(config).unwrap();
//!
//! tracing::info!("session started");
//! ```
//!
//! `RUST_LOG` overrides the configured level as usual.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
