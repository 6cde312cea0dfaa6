//! Error types for observability setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("failed to initialize observability: {0}")]
    InitFailed(String),
}
