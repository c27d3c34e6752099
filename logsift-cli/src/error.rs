//! CLI-specific error types and exit code mapping

use logsift_report::ReportError;

/// CLI-specific error type.
///
/// Each variant carries a ready-to-print message. The `exit_code()` method
/// maps errors to the documented exit codes, so callers can distinguish
/// failure kinds without parsing message text.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Missing or unusable command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Path does not exist, or exists but is not a regular file.
    #[error("{0}")]
    BadPath(String),

    /// The file was read but contained an invalid log line.
    #[error("{0}")]
    InvalidLog(String),

    /// Any other unexpected failure while reading the file.
    #[error("unexpected error while reading the log file: {0}")]
    Io(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                                   |
    /// |------|-------------------------------------------|
    /// | 0    | Success                                   |
    /// | 1    | Missing / unusable arguments              |
    /// | 2    | Path does not exist or is not a file      |
    /// | 3    | File contained an invalid log line        |
    /// | 4    | Any other failure while reading           |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 1,
            Self::BadPath(_) => 2,
            Self::InvalidLog(_) => 3,
            Self::Io(_) | Self::JsonSerialize(_) => 4,
        }
    }
}

impl From<ReportError> for CliError {
    fn from(err: ReportError) -> Self {
        match &err {
            ReportError::PathNotFound { .. } | ReportError::NotAFile { .. } => {
                Self::BadPath(err.to_string())
            }
            ReportError::InvalidLine { .. } => Self::InvalidLog(err.to_string()),
            ReportError::Io(_) => Self::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsift_core::ValidationError;

    #[test]
    fn test_exit_code_usage_error() {
        let err = CliError::Usage("no path given".to_owned());
        assert_eq!(err.exit_code(), 1, "usage error should return exit code 1");
    }

    #[test]
    fn test_exit_code_bad_path() {
        let err = CliError::BadPath("path does not exist: x".to_owned());
        assert_eq!(err.exit_code(), 2, "bad path should return exit code 2");
    }

    #[test]
    fn test_exit_code_invalid_log() {
        let err = CliError::InvalidLog("invalid log line at line 2".to_owned());
        assert_eq!(err.exit_code(), 3, "invalid log should return exit code 3");
    }

    #[test]
    fn test_exit_code_io_error() {
        let err = CliError::Io("permission denied".to_owned());
        assert_eq!(err.exit_code(), 4, "io error should return exit code 4");
    }

    #[test]
    fn test_exit_code_json_serialize_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json")
            .expect_err("should fail parsing");
        let err = CliError::JsonSerialize(json_err);
        assert_eq!(err.exit_code(), 4, "json error should return exit code 4");
    }

    #[test]
    fn test_from_report_error_path_not_found() {
        let report_err = ReportError::PathNotFound {
            path: "/missing.log".to_owned(),
        };
        let cli_err: CliError = report_err.into();
        assert_eq!(cli_err.exit_code(), 2);
        assert!(cli_err.to_string().contains("/missing.log"));
    }

    #[test]
    fn test_from_report_error_not_a_file() {
        let report_err = ReportError::NotAFile {
            path: "/tmp".to_owned(),
        };
        let cli_err: CliError = report_err.into();
        assert_eq!(cli_err.exit_code(), 2);
    }

    #[test]
    fn test_from_report_error_invalid_line() {
        let report_err = ReportError::InvalidLine {
            line: 2,
            reason: ValidationError::BadTimestamp,
            raw: "2024-01-05 99:99:99 INFO bad time".to_owned(),
        };
        let cli_err: CliError = report_err.into();
        assert_eq!(cli_err.exit_code(), 3);
        assert!(
            cli_err.to_string().contains("invalid date or time format"),
            "should keep the validation reason"
        );
        assert!(
            cli_err.to_string().contains("line 2"),
            "should keep the line number"
        );
    }

    #[test]
    fn test_from_report_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let cli_err: CliError = ReportError::from(io_err).into();
        assert_eq!(cli_err.exit_code(), 4);
        assert!(cli_err.to_string().contains("access denied"));
    }
}
