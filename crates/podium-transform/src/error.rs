//! Error types for result table transformations.

use thiserror::Error;

/// Errors raised by the transformation pipeline.
///
/// Missing data never produces an error; it is represented by nulls and
/// sentinel values. Errors signal a broken caller contract.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the operation depends on is not in the table.
    #[error("column '{column}' not found in result table")]
    MissingColumn { column: String },

    /// An argument outside the accepted range.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::MissingColumn {
            column: "Position".to_string(),
        };
        assert_eq!(err.to_string(), "column 'Position' not found in result table");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let err: TransformError = polars_err.into();
        assert!(matches!(err, TransformError::DataFrame { .. }));
    }
}
