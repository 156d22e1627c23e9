use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running a sampling pass.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("sample size must be a positive integer (got {0})")]
    InvalidCapacity(i64),
    #[error("cannot open input '{}': {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },
    #[error("cannot create output '{}': {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, SampleError>;
