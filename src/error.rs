use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or querying an aircraft parameter model.
///
/// The loader variants are all non-fatal: they are reported where they
/// occur and construction continues with whatever data parsed cleanly.
/// Only the accessor contract (`MissingParameter`) surfaces to callers.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    #[error("failed to read resource {}: {}", .path.display(), .source)]
    ResourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid aircraft name: {0:?}")]
    InvalidReference(String),

    #[error("unparsable line {:?} in {}", .line, .path.display())]
    ParseFailure { path: PathBuf, line: String },

    #[error("parameter {0} was never populated")]
    MissingParameter(&'static str),
}
