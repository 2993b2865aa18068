pub mod batch;
pub mod rewriter;
pub mod rules;

pub use crate::domain::model::{FileOutcome, FileReport, Rewrite, RuleSpec, RunReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
