use anyhow::Context;
use clap::Parser;
use e2e_batch_fix::core::batch::NEXT_STEPS;
use e2e_batch_fix::core::{ConfigProvider, FileOutcome};
use e2e_batch_fix::utils::{logger, validation::Validate};
use e2e_batch_fix::{
    BatchFixer, CliConfig, FileRewriter, FixError, LocalStorage, RuleTable, RulesConfig,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        tracing::error!("❌ Batch fix failed: {:#}", e);
        match e.downcast_ref::<FixError>() {
            Some(fix_error) => {
                eprintln!("❌ {}", fix_error.user_friendly_message());
                eprintln!("💡 Suggestion: {}", fix_error.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(mut config: CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    // 載入規則表
    let rules_config = match &config.rules {
        Some(path) => {
            tracing::info!("📁 Loading rules from: {}", path.display());
            RulesConfig::from_file(path)?
        }
        None => RulesConfig::builtin(),
    };
    rules_config.validate()?;

    if config.print_rules {
        print!("{}", rules_config.to_toml_string()?);
        return Ok(());
    }

    if config.files.is_empty() {
        if let Some(files) = rules_config.target_files() {
            config.files = files;
        }
    }

    // 所有規則必須在處理任何檔案之前編譯成功
    let table = RuleTable::compile(&rules_config.rules)?;
    let storage = LocalStorage::new(config.base_dir());
    let fixer = BatchFixer::from_config(FileRewriter::new(table, storage), &config);

    let report = fixer
        .run()
        .with_context(|| format!("batch fix aborted in {}", config.base_dir.display()))?;

    println!();
    if report.dry_run {
        println!(
            "🔍 Dry run complete! Fixes that would be applied: {}",
            report.total_fixes
        );
    } else {
        println!("✅ Batch fix complete! Total fixes: {}", report.total_fixes);
    }

    let missing = report.missing_files().count();
    if missing > 0 {
        println!("⚠️  {} target file(s) were not found", missing);
    }

    println!();
    println!("Next steps:");
    for step in NEXT_STEPS {
        println!("{}", step);
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    tracing::debug!(
        "Fixed {} of {} files",
        report
            .files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Fixed)
            .count(),
        report.files.len()
    );

    Ok(())
}
