//! Deployment filesystem manager.
//!
//! Orchestrates static content regeneration as a fixed linear sequence:
//! cleanup of cache and generated-code directories, permission staging of
//! `pub/static`, delegated static content / CSS deployment, delegated DI
//! compilation, and a final permission lock on the generated directories.
//! The first failing step aborts the rest; completed steps are not rolled
//! back.

use crate::dirs::{DirectoryCode, DirectoryList};
use crate::error::RegenError;
use crate::fsops::FsDriver;
use crate::shell::Shell;
use crate::store::StoreConfig;

/// File access permissions applied when locking generated directories
pub const PERMISSIONS_FILE: u32 = 0o640;

/// Directory access permissions
pub const PERMISSIONS_DIR: u32 = 0o750;

/// Default theme when no theme is stored in configuration
pub const DEFAULT_THEME: &str = "Magento/blank";

/// pub/static entries preserved during cleanup by default
pub const DEFAULT_KEEP_PATTERNS: &[&str] = &[".htaccess", "deployed_version.txt"];

/// Destination for the textual output of the delegated commands
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

/// Writes lines to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Manages the deployment directories and the regeneration sequence.
/// All collaborators are constructor-injected
pub struct DeployFilesystem<F, S, X> {
    dirs: DirectoryList,
    fs: F,
    store: S,
    shell: X,
    keep_patterns: Vec<String>,
    default_theme: String,
}

impl<F: FsDriver, S: StoreConfig, X: Shell> DeployFilesystem<F, S, X> {
    pub fn new(dirs: DirectoryList, fs: F, store: S, shell: X) -> Self {
        Self {
            dirs,
            fs,
            store,
            shell,
            keep_patterns: DEFAULT_KEEP_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Replace the set of pub/static entries preserved during cleanup
    pub fn with_keep_patterns(mut self, patterns: Vec<String>) -> Self {
        self.keep_patterns = patterns;
        self
    }

    /// Replace the theme used for pairs with no configured theme
    pub fn with_default_theme(mut self, theme: impl Into<String>) -> Self {
        self.default_theme = theme.into();
        self
    }

    /// Regenerate static content and generated code.
    ///
    /// Steps, strictly ordered: clean the cache, generated-code and static
    /// view directories, stage pub/static permissions, deploy static
    /// content, deploy CSS, compile (which re-cleans first), lock the
    /// generated directories
    pub fn regenerate_static(&self, output: &mut dyn OutputSink) -> Result<(), RegenError> {
        self.cleanup(&[
            DirectoryCode::Cache,
            DirectoryCode::Generation,
            DirectoryCode::Di,
            DirectoryCode::TmpMaterialization,
            DirectoryCode::StaticView,
        ])?;
        self.change_permissions(
            &[DirectoryCode::StaticView],
            PERMISSIONS_DIR,
            PERMISSIONS_DIR,
        )?;

        self.deploy_static_content(output)?;
        self.deploy_css(output)?;
        self.compile(output)?;
        self.lock_static_resources()?;
        Ok(())
    }

    /// Delete the contents of the given directories.
    ///
    /// The static view directory is special-cased: entries whose name
    /// matches a keep pattern (access-control and deployed-version markers
    /// by default) survive, everything else is removed
    pub fn cleanup(&self, codes: &[DirectoryCode]) -> Result<(), RegenError> {
        for &code in codes {
            let path = self.dirs.path(code);
            if code == DirectoryCode::StaticView {
                if !self.fs.exists(&path) {
                    continue;
                }
                'children: for child in self.fs.list_children(&path)? {
                    let name = child
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    for pattern in &self.keep_patterns {
                        if name.contains(pattern.as_str()) {
                            continue 'children;
                        }
                    }
                    if self.fs.is_file(&child) {
                        self.fs.delete_file(&child)?;
                    } else {
                        self.fs.delete_directory(&child)?;
                    }
                }
            } else {
                self.fs.clear_directory(&path)?;
            }
        }
        Ok(())
    }

    /// Recursively apply permissions to each directory, creating missing
    /// ones at dir_mode. The exists check is not atomic against concurrent
    /// deleters; the sequence assumes it is the sole writer
    fn change_permissions(
        &self,
        codes: &[DirectoryCode],
        dir_mode: u32,
        file_mode: u32,
    ) -> Result<(), RegenError> {
        for &code in codes {
            let path = self.dirs.path(code);
            if self.fs.exists(&path) {
                self.fs.chmod_recursive(&path, dir_mode, file_mode)?;
            } else {
                self.fs.create_directory(&path, dir_mode)?;
            }
        }
        Ok(())
    }

    /// One setup:static-content:deploy invocation carrying all locales
    fn deploy_static_content(&self, output: &mut dyn OutputSink) -> Result<(), RegenError> {
        output.write_line("Static content deployment start");

        let mut args = vec!["setup:static-content:deploy".to_string()];
        args.extend(self.store.locales().iter().map(|l| l.as_str().to_string()));

        let exec_output = self.shell.execute(&args)?;
        output.write_line(exec_output.trim_end());
        output.write_line("Static content deployment complete");
        Ok(())
    }

    /// One dev:css:deploy invocation per theme/locale pair, sequential
    fn deploy_css(&self, output: &mut dyn OutputSink) -> Result<(), RegenError> {
        for pair in self.store.theme_locale_pairs() {
            let theme = pair
                .theme
                .as_ref()
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| self.default_theme.clone());

            let args = vec![
                "dev:css:deploy".to_string(),
                "less".to_string(),
                format!("--theme={theme}"),
                format!("--locale={}", pair.locale),
            ];

            let exec_output = self.shell.execute(&args)?;
            output.write_line(exec_output.trim_end());
        }
        output.write_line("CSS deployment complete");
        Ok(())
    }

    /// Run the DI compiler in an isolated subprocess.
    ///
    /// Cleans cache/generation/di again first: the compiler must not observe
    /// stale artifacts left by the earlier deployment steps
    fn compile(&self, output: &mut dyn OutputSink) -> Result<(), RegenError> {
        output.write_line("Start compilation");
        self.cleanup(&[
            DirectoryCode::Cache,
            DirectoryCode::Generation,
            DirectoryCode::Di,
        ])?;

        let exec_output = self
            .shell
            .execute(&["setup:di:compile-multi-tenant".to_string()])?;
        output.write_line(exec_output.trim_end());
        output.write_line("Compilation complete");
        Ok(())
    }

    /// Tighten permissions on the generated directories after regeneration
    pub fn lock_static_resources(&self) -> Result<(), RegenError> {
        self.change_permissions(
            &[
                DirectoryCode::Generation,
                DirectoryCode::Di,
                DirectoryCode::TmpMaterialization,
            ],
            PERMISSIONS_DIR,
            PERMISSIONS_FILE,
        )
    }
}
