use crate::domain::model::{Rewrite, RuleHit, RuleSpec};
use crate::utils::error::{FixError, Result};
use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;

/// Built-in migration rules as (name, pattern, replacement), applied in order.
///
/// `stored-token-expression` runs before `stored-token-declaration`, and
/// `protected-route-dashboard` runs before `dashboard-fixed-timeouts`; the
/// earlier rule of each pair claims every idiom the later one would match.
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    // Navigation
    (
        "navigate-to-login",
        r#"await page\.goto\(`\$\{APP_URL\}/\(auth\)/login`\);?\s*await page\.waitForLoadState\('networkidle'\);?"#,
        "await navigateToLogin(page);",
    ),
    (
        "navigate-to-register",
        r#"await page\.goto\(`\$\{APP_URL\}/\(auth\)/register`\);?\s*await page\.waitForLoadState\('networkidle'\);?"#,
        "await navigateToRegister(page);",
    ),
    (
        "navigate-to-root",
        r#"await page\.goto\(APP_URL\);?\s*await page\.waitForLoadState\('networkidle'\);?"#,
        "await navigateToLogin(page); // Unauthenticated users redirect to login",
    ),
    // Storage
    (
        "stored-token-expression",
        r#"await page\.evaluate\(\(\) => localStorage\.getItem\('@fitflow/auth_token'\)\)"#,
        "await getStoredToken(page)",
    ),
    (
        "stored-token-declaration",
        r#"const token = await page\.evaluate\(\(\) => localStorage\.getItem\('@fitflow/auth_token'\)\);"#,
        "const token = await getStoredToken(page);",
    ),
    // Tab links
    (
        "settings-tab-click",
        r#"await page\.click\('text=Settings'\);?\s*await page\.waitForTimeout\(\d+\);?"#,
        "await navigateToTab(page, 'settings');",
    ),
    // Protected routes
    (
        "protected-route-dashboard",
        r#"await page\.waitForURL\(/\.\*\\\(tabs\\\)\.\*/,\s*\{\s*timeout:\s*\d+\s*\}\);?\s*await expect\(page\.locator\('text=/Dashboard\|Today\\'s Workout/i'\)\)\.toBeVisible\(\{[^}]+\}\);"#,
        "await verifyOnDashboard(page);",
    ),
    (
        "protected-route-login",
        r#"await page\.waitForURL\(/\.\*\\\(auth\\\)\\/login\.\*/,\s*\{\s*timeout:\s*\d+\s*\}\);?\s*await expect\(page\.locator\('input\[type="email"\]'\)\)\.toBeVisible\(\);"#,
        "await verifyOnLoginScreen(page);",
    ),
    // Dashboard verification
    (
        "dashboard-fixed-timeouts",
        r#"await page\.waitForURL\(/\.\*\\\(tabs\\\)\.\*/, \{\s*timeout: 10000\s*\}\);?\s*await expect\(page\.locator\('text=/Dashboard\|Today\\'s Workout/i'\)\)\.toBeVisible\(\{\s*timeout: 5000,?\s*\}\);"#,
        "await verifyOnDashboard(page);",
    ),
];

pub fn builtin_rules() -> Vec<RuleSpec> {
    BUILTIN_RULES
        .iter()
        .map(|(name, pattern, replacement)| RuleSpec::new(name, pattern, replacement))
        .collect()
}

#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Idioms span statements, so `.` crosses newlines and `^`/`$` are per line.
    pub fn compile(spec: &RuleSpec) -> Result<Self> {
        let regex = RegexBuilder::new(&spec.pattern)
            .multi_line(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| FixError::InvalidPatternError {
                rule: spec.name.clone(),
                source,
            })?;

        Ok(Self {
            name: spec.name.clone(),
            regex,
            replacement: spec.replacement.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces every non-overlapping match with the literal replacement text.
    pub fn apply<'a>(&self, content: &'a str) -> (usize, Cow<'a, str>) {
        let count = self.regex.find_iter(content).count();
        if count == 0 {
            return (0, Cow::Borrowed(content));
        }
        let replaced = self
            .regex
            .replace_all(content, NoExpand(self.replacement.as_str()));
        (count, replaced)
    }
}

#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compiles every rule up front; the first bad pattern aborts.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs.iter().map(Rule::compile).collect::<Result<Vec<_>>>()?;
        tracing::debug!("Compiled {} rewrite rules", rules.len());
        Ok(Self { rules })
    }

    pub fn builtin() -> Result<Self> {
        Self::compile(&builtin_rules())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule in order, each over the previous rule's output.
    pub fn rewrite(&self, content: &str) -> Rewrite {
        let mut current = content.to_string();
        let mut hits = Vec::new();

        for rule in &self.rules {
            let (count, replaced) = rule.apply(&current);
            if count == 0 {
                continue;
            }
            current = replaced.into_owned();
            hits.push(RuleHit {
                rule: rule.name().to_string(),
                count,
            });
        }

        Rewrite {
            content: current,
            hits,
        }
    }
}
