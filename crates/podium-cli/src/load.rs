//! Loading result exports from CSV.

use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use thiserror::Error;
use tracing::info;

use podium_model::columns::REQUIRED_COLUMNS;

/// Errors that can occur while loading a results export.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Export file not found.
    #[error("results file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The export lacks columns of the result schema.
    #[error("{path} is missing columns: {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
}

/// Read a results export and check it carries the full result schema.
pub fn load_results(path: &Path) -> Result<DataFrame, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let parse_error = |e: polars::prelude::PolarsError| LoadError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| df.column(name).is_err())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    info!(path = %path.display(), rows = df.height(), "loaded results");
    Ok(df)
}
