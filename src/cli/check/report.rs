//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Breaks trails: a parent reference that does not resolve.
    Error,
    /// Resolves, but probably not as intended.
    Warning,
}

/// A single finding
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    /// Entry id the finding is about.
    pub target: String,
    pub reason: String,
}

/// Findings grouped by hierarchy level (`sidebar`, `menu`, `submenu`, `link`)
#[derive(Debug, Default)]
pub struct CheckReport {
    pub levels: BTreeMap<&'static str, Vec<Finding>>,
}

impl CheckReport {
    pub fn error(&mut self, level: &'static str, target: &str, reason: impl Into<String>) {
        self.push(level, Severity::Error, target, reason.into());
    }

    pub fn warn(&mut self, level: &'static str, target: &str, reason: impl Into<String>) {
        self.push(level, Severity::Warning, target, reason.into());
    }

    fn push(&mut self, level: &'static str, severity: Severity, target: &str, reason: String) {
        self.levels.entry(level).or_default().push(Finding {
            severity,
            target: target.to_string(),
            reason,
        });
    }

    fn count(&self, severity: Severity) -> usize {
        self.levels
            .values()
            .flatten()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn is_clean(&self) -> bool {
        self.levels.is_empty()
    }

    /// Findings for one level, errors first.
    pub fn findings(&self, level: &str) -> Vec<&Finding> {
        let mut findings: Vec<_> = self.levels.get(level).into_iter().flatten().collect();
        findings.sort_by_key(|f| f.severity);
        findings
    }

    /// Print all findings to stderr, grouped by level.
    pub fn print(&self) {
        for level in self.levels.keys() {
            let findings = self.findings(level);
            eprintln!();
            eprintln!(
                "{} {}",
                level.red().bold(),
                format!("({} finding{})", findings.len(), plural_s(findings.len())).dimmed()
            );
            for finding in findings {
                let marker = match finding.severity {
                    Severity::Error => "✗".red().to_string(),
                    Severity::Warning => "⚠".yellow().to_string(),
                };
                eprintln!(
                    "{} {}{}{} {}",
                    marker,
                    "[".dimmed(),
                    finding.target.cyan(),
                    "]".dimmed(),
                    finding.reason
                );
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 && warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }
        write!(
            f,
            "{} error{}, {} warning{}",
            errors,
            plural_s(errors),
            warnings,
            plural_s(warnings)
        )
    }
}
