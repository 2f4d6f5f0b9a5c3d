//! Synchronous execution of sibling bin/magento commands.
//!
//! Each delegated step runs in its own subprocess. Compilation in particular
//! must run out of process: generated-code state already loaded by the
//! current process would otherwise mask classes the compiler needs to
//! (re)generate. Timeout and retry policy deliberately do not exist here; a
//! failing command aborts the whole regeneration sequence.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::RegenError;

/// Process executor collaborator: runs one command to completion and
/// captures its stdout. Raises on non-zero exit
pub trait Shell {
    fn execute(&self, args: &[String]) -> Result<String, RegenError>;
}

/// Runs `bin/magento` subcommands with the Magento root as working directory
#[derive(Debug, Clone)]
pub struct MagentoShell {
    magento_bin: PathBuf,
    work_dir: PathBuf,
}

impl MagentoShell {
    pub fn new(root: &Path) -> Self {
        Self {
            magento_bin: root.join("bin").join("magento"),
            work_dir: root.to_path_buf(),
        }
    }

    fn command_line(&self, args: &[String]) -> String {
        let mut line = self.magento_bin.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Shell for MagentoShell {
    fn execute(&self, args: &[String]) -> Result<String, RegenError> {
        let output = Command::new(&self.magento_bin)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| RegenError::SpawnFailed {
                command: self.command_line(args),
                source: e,
            })?;

        if !output.status.success() {
            return Err(RegenError::CommandFailed {
                command: self.command_line(args),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Install a fake bin/magento script under a temp root
    fn install_magento_stub(root: &Path, script: &str) {
        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let bin = bin_dir.join("magento");
        fs::write(&bin, script).unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_execute_captures_stdout() {
        let temp = TempDir::new().unwrap();
        install_magento_stub(temp.path(), "#!/bin/sh\necho \"deployed $@\"\n");

        let shell = MagentoShell::new(temp.path());
        let output = shell
            .execute(&args(&["setup:static-content:deploy", "en_US"]))
            .unwrap();

        assert_eq!(output.trim(), "deployed setup:static-content:deploy en_US");
    }

    #[test]
    fn test_execute_nonzero_exit() {
        let temp = TempDir::new().unwrap();
        install_magento_stub(temp.path(), "#!/bin/sh\necho broken >&2\nexit 3\n");

        let shell = MagentoShell::new(temp.path());
        let result = shell.execute(&args(&["setup:di:compile-multi-tenant"]));

        match result {
            Err(RegenError::CommandFailed { code, stderr, command }) => {
                assert_eq!(code, 3);
                assert!(stderr.contains("broken"));
                assert!(command.contains("setup:di:compile-multi-tenant"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_spawn_failure() {
        let temp = TempDir::new().unwrap();
        // No bin/magento installed
        let shell = MagentoShell::new(temp.path());

        let result = shell.execute(&args(&["cache:flush"]));

        assert!(matches!(result, Err(RegenError::SpawnFailed { .. })));
    }

    #[test]
    fn test_execute_runs_in_root_dir() {
        let temp = TempDir::new().unwrap();
        install_magento_stub(temp.path(), "#!/bin/sh\npwd\n");

        let shell = MagentoShell::new(temp.path());
        let output = shell.execute(&args(&["dev:css:deploy"])).unwrap();

        let reported = fs::canonicalize(output.trim()).unwrap();
        assert_eq!(reported, fs::canonicalize(temp.path()).unwrap());
    }
}
