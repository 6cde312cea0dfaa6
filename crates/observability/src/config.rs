//! Configuration for tracing setup.

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name used as the default filter target
    pub service_name: String,

    /// Log level filter (e.g. "info", "debug", "trace"); defaults to "info"
    pub log_level: Option<String>,

    /// Write logs to stderr so they never interleave with chat output
    pub use_stderr: bool,
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: None,
            use_stderr: true,
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Read overrides from `SERVICE_NAME` and `RUST_LOG`.
    pub fn from_env(default_service: &str) -> Self {
        let service_name =
            std::env::var("SERVICE_NAME").unwrap_or_else(|_| default_service.to_string());
        let log_level = std::env::var("RUST_LOG").ok();
        Self {
            service_name,
            log_level,
            use_stderr: true,
        }
    }
}
