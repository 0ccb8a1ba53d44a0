use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("PATTERN must start with '/': '{0}'")]
    InvalidPattern(String),

    #[error("failed to list objects in '{bucket}': {message}")]
    Listing { bucket: String, message: String },

    #[error("'{}' exists and is not a directory", .0.display())]
    Directory(PathBuf),

    #[error("failed to download '{key}': {message}")]
    Download { key: String, message: String },

    #[error("failed to read '{}' as gzip: {message}", .path.display())]
    Decompression { path: PathBuf, message: String },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
