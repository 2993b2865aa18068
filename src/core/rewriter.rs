use crate::core::rules::RuleTable;
use crate::core::Storage;
use crate::domain::model::{FileOutcome, FileReport};
use crate::utils::error::Result;
use std::path::Path;

pub struct FileRewriter<S: Storage> {
    table: RuleTable,
    storage: S,
    dry_run: bool,
}

impl<S: Storage> FileRewriter<S> {
    pub fn new(table: RuleTable, storage: S) -> Self {
        Self {
            table,
            storage,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Rewrites one file in place and returns the number of replacements.
    pub fn fix_file(&self, path: &Path) -> Result<usize> {
        Ok(self.process(path)?.fixes)
    }

    /// The file is only written when the rewritten content differs.
    pub fn process(&self, path: &Path) -> Result<FileReport> {
        let name = display_name(path);
        tracing::info!("Processing {}...", name);

        let original = self.storage.read_to_string(path)?;
        let rewrite = self.table.rewrite(&original);

        for hit in &rewrite.hits {
            tracing::info!("  ✓ Fixed {} occurrence(s) of rule: {}", hit.count, hit.rule);
        }

        let fixes = rewrite.total();
        let outcome = if rewrite.content == original {
            tracing::info!("  ℹ️  No changes needed in {}", name);
            FileOutcome::Unchanged
        } else if self.dry_run {
            tracing::info!("  🔍 {} fixes would be applied to {}", fixes, name);
            FileOutcome::Fixed
        } else {
            self.storage.write(path, &rewrite.content)?;
            tracing::info!("  ✅ {} total fixes applied to {}", fixes, name);
            FileOutcome::Fixed
        };

        Ok(FileReport {
            path: path.to_path_buf(),
            outcome,
            fixes,
            hits: rewrite.hits,
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
