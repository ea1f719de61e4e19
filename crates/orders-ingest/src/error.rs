use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },
    #[error("read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no csv files in {path}")]
    NoCsvFiles { path: PathBuf },
    #[error("read {path}: {source}")]
    CsvRead { path: PathBuf, source: csv::Error },
    #[error("{path}: missing header row")]
    MissingHeader { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
