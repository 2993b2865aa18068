use crate::core::rules::builtin_rules;
use crate::domain::model::RuleSpec;
use crate::utils::error::{FixError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_path, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rule table loaded from TOML, replacing the built-in one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub rules: Vec<RuleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<TargetsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    pub files: Vec<String>,
}

impl RulesConfig {
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            targets: None,
        }
    }

    /// 從 TOML 檔案載入規則
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FixError::io(path, e))?;
        Self::parse(&content, path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| FixError::RulesFileError {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FixError::InvalidConfigValueError {
            field: "rules".to_string(),
            value: format!("{} rules", self.rules.len()),
            reason: format!("TOML serialization failed: {}", e),
        })
    }

    pub fn target_files(&self) -> Option<Vec<PathBuf>> {
        self.targets
            .as_ref()
            .map(|t| t.files.iter().map(PathBuf::from).collect())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_list("rules", &self.rules)?;

        for rule in &self.rules {
            validate_non_empty_string("rules.name", &rule.name)?;
            if rule.pattern.is_empty() {
                return Err(FixError::InvalidConfigValueError {
                    field: format!("rules.{}.pattern", rule.name),
                    value: String::new(),
                    reason: "An empty pattern matches everywhere".to_string(),
                });
            }
        }

        validate_unique("rules.name", self.rules.iter().map(|r| r.name.as_str()))?;

        if let Some(targets) = &self.targets {
            for file in &targets.files {
                validate_path("targets.files", file)?;
            }
        }

        Ok(())
    }
}

impl Validate for RulesConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
