pub mod cli;
pub mod rules_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::Path;
use std::path::PathBuf;

/// Files rewritten when neither the command line nor a rules file names any.
pub const DEFAULT_TARGETS: [&str; 3] = [
    "auth-flow.spec.ts",
    "cross-platform.spec.ts",
    "workout-logging.spec.ts",
];

pub fn default_targets() -> Vec<PathBuf> {
    DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "e2e-batch-fix")]
#[command(about = "Rewrite verbose E2E test steps into shared helper calls")]
pub struct CliConfig {
    /// Target files, relative to --base-dir
    pub files: Vec<PathBuf>,

    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// TOML rule table replacing the built-in rules
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[arg(long, help = "Report what would change without writing files")]
    pub dry_run: bool,

    #[arg(long, help = "Print the run report as JSON")]
    pub json: bool,

    #[arg(long, help = "Print the active rule table as TOML and exit")]
    pub print_rules: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn target_files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            default_targets()
        } else {
            self.files.clone()
        }
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir.to_string_lossy())?;
        for file in &self.files {
            validate_path("files", &file.to_string_lossy())?;
        }
        if let Some(rules) = &self.rules {
            validate_path("rules", &rules.to_string_lossy())?;
        }
        Ok(())
    }
}
