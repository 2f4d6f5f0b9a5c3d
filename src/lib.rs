//! # Magento Static Regen
//!
//! Deployment filesystem manager for Magento 2.
//!
//! Regenerates static content and generated code in a fixed sequence: clear
//! the cache and generated-code directories, stage `pub/static` permissions,
//! shell out to the sibling `bin/magento` commands that compile static
//! assets, CSS and DI code, then lock the generated directories down.
//!
//! ## Features
//!
//! - Directory registry resolving symbolic codes to Magento-layout paths
//! - Pattern-based preservation of `pub/static` marker files during cleanup
//! - Recursive permission staging and locking (0750 dirs / 0640 files)
//! - Delegation to `bin/magento` in isolated subprocesses
//!
//! ## Usage
//!
//! ```ignore
//! use magento_static_regen::dirs::DirectoryList;
//! use magento_static_regen::filesystem::DeployFilesystem;
//!
//! let manager = DeployFilesystem::new(DirectoryList::new(root), fs, store, shell);
//! manager.regenerate_static(&mut sink)?;
//! ```

/// CLI configuration and argument parsing
pub mod config;

/// Directory registry mapping symbolic codes to paths
pub mod dirs;

/// Error types for regeneration operations
pub mod error;

/// Deployment filesystem manager and regeneration sequence
pub mod filesystem;

/// Filesystem driver: listing, deletion, recursive permissions
pub mod fsops;

/// Synchronous execution of sibling bin/magento commands
pub mod shell;

/// Store configuration: locales and theme/locale pairs
pub mod store;

/// Theme and locale identifier types
pub mod theme;
