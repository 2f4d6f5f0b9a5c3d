//! Directory registry for the managed deployment directories.
//!
//! Maps symbolic directory codes (cache, generated code, DI cache, static
//! view, temporary materialization) to absolute paths under a single Magento
//! root, following the standard Magento 2 filesystem layout.

use std::fmt;
use std::path::{Path, PathBuf};

/// Symbolic code identifying a managed directory role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryCode {
    /// Cache storage: var/cache
    Cache,
    /// Generated code: var/generation
    Generation,
    /// Dependency-injection cache: var/di
    Di,
    /// Deployed static view files: pub/static
    StaticView,
    /// Temporary materialization of preprocessed views: var/view_preprocessed
    TmpMaterialization,
}

impl DirectoryCode {
    /// Path of the directory relative to the Magento root
    #[inline]
    pub fn relative_path(&self) -> &'static str {
        match self {
            DirectoryCode::Cache => "var/cache",
            DirectoryCode::Generation => "var/generation",
            DirectoryCode::Di => "var/di",
            DirectoryCode::StaticView => "pub/static",
            DirectoryCode::TmpMaterialization => "var/view_preprocessed",
        }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryCode::Cache => "cache",
            DirectoryCode::Generation => "generation",
            DirectoryCode::Di => "di",
            DirectoryCode::StaticView => "static",
            DirectoryCode::TmpMaterialization => "view_preprocessed",
        }
    }
}

impl fmt::Display for DirectoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves directory codes to absolute paths under one Magento root
#[derive(Debug, Clone)]
pub struct DirectoryList {
    root: PathBuf,
}

impl DirectoryList {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The Magento root this registry resolves against
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for a directory code
    pub fn path(&self, code: DirectoryCode) -> PathBuf {
        self.root.join(code.relative_path())
    }
}
