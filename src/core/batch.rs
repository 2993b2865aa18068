use crate::core::rewriter::FileRewriter;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{FileReport, RunReport};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Follow-up instructions printed after every run.
pub const NEXT_STEPS: [&str; 2] = [
    "1. Manually review changes",
    "2. Run tests: npx playwright test e2e/auth-flow.spec.ts --reporter=line",
];

pub struct BatchFixer<S: Storage> {
    rewriter: FileRewriter<S>,
    targets: Vec<PathBuf>,
}

impl<S: Storage> BatchFixer<S> {
    pub fn new(rewriter: FileRewriter<S>, targets: Vec<PathBuf>) -> Self {
        Self { rewriter, targets }
    }

    pub fn from_config<C: ConfigProvider>(rewriter: FileRewriter<S>, config: &C) -> Self {
        Self::new(rewriter.with_dry_run(config.dry_run()), config.target_files())
    }

    pub fn rewriter(&self) -> &FileRewriter<S> {
        &self.rewriter
    }

    /// Processes targets in order. Missing files are skipped with a warning;
    /// any other failure aborts and leaves earlier files as written.
    pub fn run(&self) -> Result<RunReport> {
        let dry_run = self.rewriter.is_dry_run();
        tracing::debug!(
            "Applying {} rules to {} files (dry run: {})",
            self.rewriter.table().len(),
            self.targets.len(),
            dry_run
        );

        let mut report = RunReport {
            dry_run,
            ..RunReport::default()
        };

        for path in &self.targets {
            if self.rewriter.storage().exists(path) {
                report.push(self.rewriter.process(path)?);
            } else {
                tracing::warn!("⚠️  File not found: {}", path.display());
                report.push(FileReport::missing(path.clone()));
            }
        }

        Ok(report)
    }
}
