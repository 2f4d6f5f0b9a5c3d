use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use magento_static_regen::config::{Cli, Config};
use magento_static_regen::dirs::DirectoryList;
use magento_static_regen::filesystem::{DeployFilesystem, StdoutSink};
use magento_static_regen::fsops::LocalFs;
use magento_static_regen::shell::MagentoShell;
use magento_static_regen::store::StoreView;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;

    // Validate Magento root
    if !config.magento_root.exists() {
        bail!("Magento root not found: {}", config.magento_root.display());
    }

    let env_php = config.magento_root.join("app").join("etc").join("env.php");
    if !env_php.exists() {
        bail!(
            "Not a Magento installation: {} (app/etc/env.php not found)",
            config.magento_root.display()
        );
    }

    if config.verbose {
        eprintln!(
            "Regenerating static content in {} for {} locale(s), {} theme/locale pair(s)",
            config.magento_root.display(),
            config.locales.len(),
            config.pairs.len()
        );
    }

    let manager = DeployFilesystem::new(
        DirectoryList::new(&config.magento_root),
        LocalFs,
        StoreView::new(config.locales.clone(), config.pairs.clone()),
        MagentoShell::new(&config.magento_root),
    )
    .with_keep_patterns(config.keep.clone())
    .with_default_theme(config.default_theme.clone());

    let mut sink = StdoutSink;
    manager
        .regenerate_static(&mut sink)
        .context("static content regeneration failed")?;

    Ok(ExitCode::SUCCESS)
}
