//! Local filesystem operations: listing, deletion, recursive permission
//! changes.
//!
//! [`FsDriver`] is the constructor-injected filesystem collaborator consumed
//! by the deployment manager; [`LocalFs`] is the real implementation backed
//! by `std::fs` and `walkdir`. Errors carry the failing path and propagate
//! unmodified, there is no local recovery.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::RegenError;

/// Filesystem driver and directory-write operations
pub trait FsDriver {
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Immediate children of a directory, sorted for deterministic order
    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, RegenError>;

    fn delete_file(&self, path: &Path) -> Result<(), RegenError>;

    /// Delete a directory and everything beneath it
    fn delete_directory(&self, path: &Path) -> Result<(), RegenError>;

    /// Create a directory (and missing parents) at an exact mode.
    /// The mode is applied explicitly so the process umask cannot mask it
    fn create_directory(&self, path: &Path, mode: u32) -> Result<(), RegenError>;

    /// Apply dir_mode / file_mode to the path and every entry beneath it
    fn chmod_recursive(&self, path: &Path, dir_mode: u32, file_mode: u32)
        -> Result<(), RegenError>;

    /// Remove a directory's contents, keeping the directory itself.
    /// A missing directory is a no-op
    fn clear_directory(&self, path: &Path) -> Result<(), RegenError> {
        if !self.exists(path) {
            return Ok(());
        }
        for child in self.list_children(path)? {
            if self.is_file(&child) {
                self.delete_file(&child)?;
            } else {
                self.delete_directory(&child)?;
            }
        }
        Ok(())
    }
}

/// Real filesystem implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FsDriver for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, RegenError> {
        let read_dir = fs::read_dir(path).map_err(|e| RegenError::ReadDirFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut children = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| RegenError::ReadDirFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
            children.push(entry.path());
        }
        children.sort();
        Ok(children)
    }

    fn delete_file(&self, path: &Path) -> Result<(), RegenError> {
        fs::remove_file(path).map_err(|e| RegenError::DeleteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn delete_directory(&self, path: &Path) -> Result<(), RegenError> {
        fs::remove_dir_all(path).map_err(|e| RegenError::DeleteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn create_directory(&self, path: &Path, mode: u32) -> Result<(), RegenError> {
        fs::create_dir_all(path).map_err(|e| RegenError::CreateDirFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        // mkdir honours the umask, so set the requested mode explicitly
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| {
            RegenError::ChmodFailed {
                path: path.to_path_buf(),
                source: e,
            }
        })
    }

    fn chmod_recursive(
        &self,
        path: &Path,
        dir_mode: u32,
        file_mode: u32,
    ) -> Result<(), RegenError> {
        for entry in WalkDir::new(path) {
            let entry = entry?;
            let mode = if entry.file_type().is_dir() {
                dir_mode
            } else {
                file_mode
            };
            fs::set_permissions(entry.path(), fs::Permissions::from_mode(mode)).map_err(|e| {
                RegenError::ChmodFailed {
                    path: entry.path().to_path_buf(),
                    source: e,
                }
            })?;
        }
        Ok(())
    }
}
