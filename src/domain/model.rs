use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Uncompiled rule as it appears in the built-in table or a rules file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: String,
    pub count: usize,
}

/// Result of running the rule table over one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub hits: Vec<RuleHit>,
}

impl Rewrite {
    pub fn total(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    Fixed,
    Unchanged,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    pub fixes: usize,
    pub hits: Vec<RuleHit>,
}

impl FileReport {
    pub fn missing(path: PathBuf) -> Self {
        Self {
            path,
            outcome: FileOutcome::Missing,
            fixes: 0,
            hits: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub total_fixes: usize,
}

impl RunReport {
    pub fn push(&mut self, report: FileReport) {
        self.total_fixes += report.fixes;
        self.files.push(report);
    }

    pub fn missing_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Missing)
    }
}
