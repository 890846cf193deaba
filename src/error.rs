//! Error types shared by every fallible operation in the crate.

use std::io;

use thiserror::Error;

/// Errors produced by a [`StatusLine`](crate::StatusLine) and its builder.
///
/// A refresh that is skipped because of throttling or contention is *not* an error;
/// see [`RefreshOutcome`](crate::RefreshOutcome).
#[derive(Debug, Error)]
pub enum Error {
    /// A counter operation was called with a negative value.
    #[error("{field} must be non-negative, got {value}")]
    InvalidArgument {
        /// The counter argument that was rejected (`progress`, `total`, ...).
        field: &'static str,
        /// The offending value.
        value: i64,
    },

    /// The status line cannot be built as configured.
    #[error("invalid status line configuration: {0}")]
    Configuration(&'static str),

    /// Writing or flushing the output sink failed.
    #[error("failed to write to output sink: {0}")]
    Sink(#[from] io::Error),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Sink(inner) => inner,
            Error::InvalidArgument { .. } => Self::new(io::ErrorKind::InvalidInput, err),
            Error::Configuration(_) => Self::other(err),
        }
    }
}

/// Rejects negative counter arguments.
pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<i64> {
    if value < 0 {
        Err(Error::InvalidArgument { field, value })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{Error, non_negative};

    #[test]
    fn test_negative_rejected() {
        assert!(non_negative("progress", 0).is_ok());
        let err = non_negative("total", -3).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                field: "total",
                value: -3
            }
        ));
        assert_eq!(err.to_string(), "total must be non-negative, got -3");
    }

    /// Sink errors keep their original kind when converted back to `io::Error`.
    #[test]
    fn test_into_io_error() {
        let err: io::Error = Error::Sink(io::Error::new(io::ErrorKind::BrokenPipe, "gone")).into();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err: io::Error = Error::InvalidArgument {
            field: "progress",
            value: -1,
        }
        .into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
