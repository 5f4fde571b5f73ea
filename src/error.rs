use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,  // recoverable
    Error,    // operation failed
    Critical, // modal - requires user action
}

/// Failure reported by a remote service call (backend or search).
///
/// `status_code` is the HTTP-like code the backend attached, if any.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("remote call failed ({}): {message}", status_label(.status_code))]
pub struct RemoteError {
    pub status_code: Option<u16>,
    pub message: String,
}

fn status_label(code: &Option<u16>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "no status".to_string(),
    }
}

impl RemoteError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    /// A failure without a status code (connection dropped, timeout, ...)
    pub fn without_status(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status_code == Some(400)
    }

    /// Code as shown to the user in the generic error message.
    pub fn code_for_display(&self) -> String {
        status_label(&self.status_code)
    }
}

/// Domain-specific errors for the script picker
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Failed to parse snapshot: {0}")]
    SnapshotParse(#[from] serde_json::Error),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl PickerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SnapshotParse(_) => ErrorSeverity::Error,
            Self::Io { .. } => ErrorSeverity::Error,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::Remote(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::SnapshotParse(e) => format!("Invalid snapshot format: {}", e),
            Self::Io { path, .. } => format!("Could not read {}", path),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::Remote(e) => e.message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use script_picker::error::ResultExt;
///
/// let related = search.find_related(kind, id).await.warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

/// Panic in debug mode, log error in release mode.
///
/// Use for "impossible" states such as registry data that references
/// ids the registry itself does not contain.
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            tracing::error!("IMPOSSIBLE STATE: {}", format_args!($($fmt_arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_classification() {
        assert!(RemoteError::new(404, "missing").is_not_found());
        assert!(RemoteError::new(400, "bad").is_bad_request());
        assert!(!RemoteError::new(500, "boom").is_bad_request());
        assert!(!RemoteError::without_status("offline").is_not_found());
    }

    #[test]
    fn test_remote_error_display_includes_code() {
        let err = RemoteError::new(500, "boom");
        assert_eq!(err.to_string(), "remote call failed (500): boom");
        assert_eq!(err.code_for_display(), "500");
        assert_eq!(
            RemoteError::without_status("x").code_for_display(),
            "no status"
        );
    }

    #[test]
    fn test_picker_error_severity() {
        let err = PickerError::from(RemoteError::new(500, "boom"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.user_message(), "boom");
        assert_eq!(
            PickerError::Config("bad".into()).severity(),
            ErrorSeverity::Warning
        );
    }

    #[test]
    fn test_log_err_returns_value_or_none() {
        let ok: std::result::Result<u8, String> = Ok(3);
        assert_eq!(ok.log_err(), Some(3));
        let err: std::result::Result<u8, String> = Err("nope".into());
        assert_eq!(err.warn_on_err(), None);
    }
}
