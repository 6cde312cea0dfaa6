use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepchatError {
    #[error("session error: {0}")]
    Session(String),

    #[error("attachment error: {0}")]
    Attachment(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PrepchatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error() {
        let err = PrepchatError::Session("already running".to_string());
        assert_eq!(err.to_string(), "session error: already running");
    }

    #[test]
    fn test_config_error() {
        let err = PrepchatError::Config("missing model id".to_string());
        assert_eq!(err.to_string(), "config error: missing model id");
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PrepchatError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }
}
