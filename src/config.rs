//! CLI configuration and runtime settings for static content regeneration.

use clap::Parser;
use std::path::PathBuf;

use crate::store::ThemeLocalePair;
use crate::theme::LocaleCode;

/// Static content and generated code regeneration for Magento 2
#[derive(Parser, Debug)]
#[command(name = "magento-static-regen")]
#[command(version)]
#[command(about = "Cleans, regenerates and locks Magento 2 static content and generated code")]
pub struct Cli {
    /// Magento root directory
    #[arg(default_value = ".")]
    pub magento_root: PathBuf,

    /// Locales passed to setup:static-content:deploy (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_value = "en_US")]
    pub locale: Vec<String>,

    /// Theme/locale pairs for CSS deployment in Vendor/theme:locale format
    /// (comma-separated); defaults to one theme-less pair per locale
    #[arg(short, long, value_delimiter = ',')]
    pub theme_locale: Option<Vec<String>>,

    /// Theme used for pairs without a configured theme
    #[arg(long, default_value = "Magento/blank")]
    pub default_theme: String,

    /// pub/static entries preserved during cleanup (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = ".htaccess,deployed_version.txt")]
    pub keep: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runtime configuration parsed from CLI
#[derive(Debug, Clone)]
pub struct Config {
    /// Magento root directory
    pub magento_root: PathBuf,
    /// Locales to deploy (type-safe)
    pub locales: Vec<LocaleCode>,
    /// Theme/locale pairs driving CSS deployment
    pub pairs: Vec<ThemeLocalePair>,
    /// Theme substituted for pairs with no theme
    pub default_theme: String,
    /// pub/static entries preserved during cleanup
    pub keep: Vec<String>,
    /// Enable verbose output
    pub verbose: bool,
}

impl Config {
    /// Create Config from CLI arguments
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let magento_root = cli.magento_root.canonicalize().unwrap_or(cli.magento_root);

        let mut locales = Vec::with_capacity(cli.locale.len());
        for locale_str in cli.locale {
            match LocaleCode::validated(&locale_str) {
                Ok(locale) => locales.push(locale),
                Err(msg) => anyhow::bail!(msg),
            }
        }

        let pairs = match cli.theme_locale {
            Some(raw_pairs) => {
                let mut pairs = Vec::with_capacity(raw_pairs.len());
                for raw in raw_pairs {
                    match ThemeLocalePair::parse(&raw) {
                        Ok(pair) => pairs.push(pair),
                        Err(msg) => anyhow::bail!(msg),
                    }
                }
                pairs
            }
            None => locales
                .iter()
                .map(|locale| ThemeLocalePair {
                    theme: None,
                    locale: locale.clone(),
                })
                .collect(),
        };

        Ok(Config {
            magento_root,
            locales,
            pairs,
            default_theme: cli.default_theme,
            keep: cli.keep,
            verbose: cli.verbose,
        })
    }
}
