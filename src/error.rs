use std::path::PathBuf;
use thiserror::Error;

/// Regeneration error types
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum RegenError {
    #[error("Magento root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Failed to read directory: {path}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete {path}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to change permissions on {path}")]
    ChmodFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed")]
    Walk(#[from] walkdir::Error),

    #[error("failed to spawn {command}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
