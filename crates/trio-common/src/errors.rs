use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures reported by the surface host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("surface creation failed for {provider} in {pane} pane: {reason}")]
    SurfaceCreation {
        pane: String,
        provider: String,
        reason: String,
    },

    #[error("no surface attached to {0} pane")]
    NoSurface(String),

    #[error("surface error: {0}")]
    Surface(String),
}

/// Failures reported by the history / favorites store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TrioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("degenerate geometry: {available}px available")]
    GeometryDegenerate { available: f64 },

    #[error("authorization required for {0}")]
    AuthRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("panes.split_ratio out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: panes.split_ratio out of range"
        );
    }

    #[test]
    fn host_error_display() {
        let err = HostError::SurfaceCreation {
            pane: "right".into(),
            provider: "claude".into(),
            reason: "webview2 missing".into(),
        };
        assert_eq!(
            err.to_string(),
            "surface creation failed for claude in right pane: webview2 missing"
        );
        assert_eq!(
            HostError::NoSurface("third".into()).to_string(),
            "no surface attached to third pane"
        );
    }

    #[test]
    fn storage_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StorageError = io_err.into();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn trio_error_wraps_collaborator_errors() {
        let err: TrioError = HostError::Surface("closed".into()).into();
        assert!(matches!(err, TrioError::Host(_)));

        let err: TrioError = StorageError::Unavailable("disk full".into()).into();
        assert!(matches!(err, TrioError::Storage(_)));
        assert_eq!(err.to_string(), "storage unavailable: disk full");

        let err: TrioError = ConfigError::ParseError("bad toml".into()).into();
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn trio_error_own_variants() {
        let err = TrioError::GeometryDegenerate { available: -40.0 };
        assert_eq!(err.to_string(), "degenerate geometry: -40px available");

        let err = TrioError::AuthRequired("perplexity".into());
        assert_eq!(err.to_string(), "authorization required for perplexity");
    }
}
