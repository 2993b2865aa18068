pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, rules_config::RulesConfig};
pub use self::core::{batch::BatchFixer, rewriter::FileRewriter, rules::RuleTable};
pub use utils::error::{FixError, Result};
