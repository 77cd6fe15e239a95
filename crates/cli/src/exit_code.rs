//! Exit codes for the gqlparse CLI.
//!
//! This module defines distinct exit codes for different error types,
//! allowing scripts and CI systems to distinguish between different
//! failure modes.

use gqlparse_introspection::IntrospectionError;

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no errors
    Success = 0,
    /// Usage error (missing or conflicting arguments)
    UsageError = 1,
    /// I/O error (input file unreadable)
    IoError = 2,
    /// Decode error (malformed JSON or incompatible document shape)
    DecodeError = 3,
    /// Schema error (query or requested mutation root type not found)
    SchemaError = 4,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }

    /// Classifies a reported error by its root cause.
    #[must_use]
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.root_cause().downcast_ref::<std::io::Error>().is_some() {
            Self::IoError
        } else if error
            .root_cause()
            .downcast_ref::<IntrospectionError>()
            .is_some()
        {
            Self::DecodeError
        } else {
            Self::SchemaError
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::UsageError => write!(f, "usage error"),
            Self::IoError => write!(f, "I/O error"),
            Self::DecodeError => write!(f, "decode error"),
            Self::SchemaError => write!(f, "schema error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_map_to_io_code() {
        let error =
            anyhow::Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
                .context("Failed to read schema.json");
        assert_eq!(ExitCode::for_error(&error), ExitCode::IoError);
    }

    #[test]
    fn test_decode_errors_map_to_decode_code() {
        let error = anyhow::Error::from(IntrospectionError::Parse("bad".to_string()))
            .context("Failed to decode schema.json");
        assert_eq!(ExitCode::for_error(&error), ExitCode::DecodeError);
    }

    #[test]
    fn test_untyped_errors_map_to_schema_code() {
        let error = anyhow::anyhow!("Could not find query type with name 'Query'");
        assert_eq!(ExitCode::for_error(&error), ExitCode::SchemaError);
    }

    #[test]
    fn test_codes_are_distinct_and_success_is_zero() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_ne!(ExitCode::IoError as i32, ExitCode::DecodeError as i32);
        assert_ne!(ExitCode::DecodeError as i32, ExitCode::SchemaError as i32);
    }
}
