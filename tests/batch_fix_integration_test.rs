use anyhow::Result;
use e2e_batch_fix::config::default_targets;
use e2e_batch_fix::core::{FileOutcome, Storage};
use e2e_batch_fix::{BatchFixer, FileRewriter, LocalStorage, RuleTable};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const AUTH_FLOW: &str = r#"import { test, expect } from '@playwright/test';

test.describe('Authentication Flows', () => {
  test('login redirects to dashboard', async ({ page }) => {
    await page.goto(`${APP_URL}/(auth)/login`);
    await page.waitForLoadState('networkidle');

    await fillLoginForm(page, user.email, user.password);
    await submitLoginForm(page);

    await page.waitForURL(/.*\(tabs\).*/, { timeout: 10000 });
    await expect(page.locator('text=/Dashboard|Today\'s Workout/i')).toBeVisible({ timeout: 5000 });

    const token = await page.evaluate(() => localStorage.getItem('@fitflow/auth_token'));
    expect(token).toBeTruthy();
  });

  test('register then logout', async ({ page }) => {
    await page.goto(`${APP_URL}/(auth)/register`);
    await page.waitForLoadState('networkidle');

    await page.click('text=Settings');
    await page.waitForTimeout(1000);
    await logoutUser(page);

    await page.waitForURL(/.*\(auth\)\/login.*/, { timeout: 10000 });
    await expect(page.locator('input[type="email"]')).toBeVisible();
  });
});
"#;

const AUTH_FLOW_FIXED: &str = r#"import { test, expect } from '@playwright/test';

test.describe('Authentication Flows', () => {
  test('login redirects to dashboard', async ({ page }) => {
    await navigateToLogin(page);

    await fillLoginForm(page, user.email, user.password);
    await submitLoginForm(page);

    await verifyOnDashboard(page);

    const token = await getStoredToken(page);
    expect(token).toBeTruthy();
  });

  test('register then logout', async ({ page }) => {
    await navigateToRegister(page);

    await navigateToTab(page, 'settings');
    await logoutUser(page);

    await verifyOnLoginScreen(page);
  });
});
"#;

const WORKOUT_LOGGING: &str = r#"test.beforeEach(async ({ page }) => {
  await page.goto(APP_URL);
  await page.waitForLoadState('networkidle');
});
"#;

const CROSS_PLATFORM_CLEAN: &str = r#"test('renders on mobile viewport', async ({ page }) => {
  await page.setViewportSize({ width: 375, height: 812 });
  await navigateToLogin(page);
});
"#;

fn write(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn fixer(dir: &Path, targets: Vec<PathBuf>) -> Result<BatchFixer<LocalStorage>> {
    let rewriter = FileRewriter::new(RuleTable::builtin()?, LocalStorage::new(dir));
    Ok(BatchFixer::new(rewriter, targets))
}

#[test]
fn test_full_auth_flow_file_is_migrated() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write(temp_dir.path(), "auth-flow.spec.ts", AUTH_FLOW)?;

    let rewriter = FileRewriter::new(RuleTable::builtin()?, LocalStorage::new(temp_dir.path()));
    let fixes = rewriter.fix_file(Path::new("auth-flow.spec.ts"))?;

    assert_eq!(fixes, 6);
    assert_eq!(fs::read_to_string(&path)?, AUTH_FLOW_FIXED);
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write(temp_dir.path(), "auth-flow.spec.ts", AUTH_FLOW)?;
    let rewriter = FileRewriter::new(RuleTable::builtin()?, LocalStorage::new(temp_dir.path()));

    rewriter.fix_file(Path::new("auth-flow.spec.ts"))?;
    let after_first = fs::read(&path)?;
    let modified_first = fs::metadata(&path)?.modified()?;

    let second = rewriter.process(Path::new("auth-flow.spec.ts"))?;

    assert_eq!(second.fixes, 0);
    assert_eq!(second.outcome, FileOutcome::Unchanged);
    assert_eq!(fs::read(&path)?, after_first);
    assert_eq!(fs::metadata(&path)?.modified()?, modified_first);
    Ok(())
}

#[test]
fn test_file_without_idioms_keeps_bytes_and_mtime() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write(temp_dir.path(), "cross-platform.spec.ts", CROSS_PLATFORM_CLEAN)?;
    let modified_before = fs::metadata(&path)?.modified()?;

    let rewriter = FileRewriter::new(RuleTable::builtin()?, LocalStorage::new(temp_dir.path()));
    let fixes = rewriter.fix_file(Path::new("cross-platform.spec.ts"))?;

    assert_eq!(fixes, 0);
    assert_eq!(fs::read(&path)?, CROSS_PLATFORM_CLEAN.as_bytes());
    assert_eq!(fs::metadata(&path)?.modified()?, modified_before);
    Ok(())
}

#[test]
fn test_missing_target_is_skipped_and_not_counted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(temp_dir.path(), "auth-flow.spec.ts", AUTH_FLOW)?;
    write(temp_dir.path(), "workout-logging.spec.ts", WORKOUT_LOGGING)?;

    let report = fixer(temp_dir.path(), default_targets())?.run()?;

    assert_eq!(report.files.len(), 3);
    assert_eq!(report.total_fixes, 7);

    let outcomes: Vec<FileOutcome> = report.files.iter().map(|f| f.outcome).collect();
    assert_eq!(
        outcomes,
        vec![FileOutcome::Fixed, FileOutcome::Missing, FileOutcome::Fixed]
    );

    let missing: Vec<&Path> = report.missing_files().map(|f| f.path.as_path()).collect();
    assert_eq!(missing, vec![Path::new("cross-platform.spec.ts")]);
    assert!(!temp_dir.path().join("cross-platform.spec.ts").exists());

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("workout-logging.spec.ts"))?,
        "test.beforeEach(async ({ page }) => {\n  await navigateToLogin(page); // Unauthenticated users redirect to login\n});\n"
    );
    Ok(())
}

#[test]
fn test_all_targets_missing_reports_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let report = fixer(temp_dir.path(), default_targets())?.run()?;

    assert_eq!(report.total_fixes, 0);
    assert_eq!(report.missing_files().count(), 3);
    Ok(())
}

#[test]
fn test_report_tracks_rule_hits_per_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(temp_dir.path(), "auth-flow.spec.ts", AUTH_FLOW)?;

    let report = fixer(temp_dir.path(), vec![PathBuf::from("auth-flow.spec.ts")])?.run()?;
    let file = &report.files[0];

    let rules: Vec<&str> = file.hits.iter().map(|h| h.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec![
            "navigate-to-login",
            "navigate-to-register",
            "stored-token-expression",
            "settings-tab-click",
            "protected-route-dashboard",
            "protected-route-login",
        ]
    );
    assert_eq!(file.fixes, file.hits.iter().map(|h| h.count).sum::<usize>());
    Ok(())
}

#[test]
fn test_dry_run_leaves_files_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write(temp_dir.path(), "auth-flow.spec.ts", AUTH_FLOW)?;

    let rewriter = FileRewriter::new(RuleTable::builtin()?, LocalStorage::new(temp_dir.path()))
        .with_dry_run(true);
    let report = BatchFixer::new(rewriter, vec![PathBuf::from("auth-flow.spec.ts")]).run()?;

    assert!(report.dry_run);
    assert_eq!(report.total_fixes, 6);
    assert_eq!(fs::read_to_string(&path)?, AUTH_FLOW);
    Ok(())
}

#[test]
fn test_unreadable_target_aborts_after_earlier_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(temp_dir.path(), "auth-flow.spec.ts", AUTH_FLOW)?;
    // A directory exists but cannot be read as text.
    fs::create_dir(temp_dir.path().join("cross-platform.spec.ts"))?;

    let result = fixer(temp_dir.path(), default_targets())?.run();

    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("auth-flow.spec.ts"))?,
        AUTH_FLOW_FIXED
    );
    Ok(())
}

#[test]
fn test_storage_exists_matches_filesystem() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(temp_dir.path(), "auth-flow.spec.ts", "")?;
    let storage = LocalStorage::new(temp_dir.path());

    assert!(storage.exists(Path::new("auth-flow.spec.ts")));
    assert!(!storage.exists(Path::new("workout-logging.spec.ts")));
    Ok(())
}
