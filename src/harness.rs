//! Demo evaluation harness.
//!
//! Every pattern module exposes a `demo_suite` that feeds literal inputs to its
//! pattern and records the outcome of each literal expectation in a [`Suite`].
//! [`run`] collects those suites into a [`Report`] for the CLI.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::behavioral::{chain, observer};
use crate::config::PlaygroundConfig;
use crate::creational::{builder, factory, prototype, shared_state};
use crate::error::PlaygroundError;
use crate::structural::{adapter, decorator};

// ============================================================================
// Pattern catalog
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Adapter,
    Builder,
    ChainOfResponsibility,
    Decorator,
    FactoryMethod,
    Observer,
    Prototype,
    Singleton,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::Adapter,
        Pattern::Builder,
        Pattern::ChainOfResponsibility,
        Pattern::Decorator,
        Pattern::FactoryMethod,
        Pattern::Observer,
        Pattern::Prototype,
        Pattern::Singleton,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Adapter => "adapter",
            Pattern::Builder => "builder",
            Pattern::ChainOfResponsibility => "chain-of-responsibility",
            Pattern::Decorator => "decorator",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Observer => "observer",
            Pattern::Prototype => "prototype",
            Pattern::Singleton => "singleton",
        }
    }

    pub fn family(self) -> &'static str {
        match self {
            Pattern::Builder | Pattern::FactoryMethod | Pattern::Prototype | Pattern::Singleton => {
                "creational"
            }
            Pattern::Adapter | Pattern::Decorator => "structural",
            Pattern::ChainOfResponsibility | Pattern::Observer => "behavioral",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "adapter" => Ok(Pattern::Adapter),
            "builder" => Ok(Pattern::Builder),
            "chain" | "chain-of-responsibility" => Ok(Pattern::ChainOfResponsibility),
            "decorator" => Ok(Pattern::Decorator),
            "factory" | "factory-method" => Ok(Pattern::FactoryMethod),
            "observer" => Ok(Pattern::Observer),
            "prototype" => Ok(Pattern::Prototype),
            "singleton" | "shared-state" => Ok(Pattern::Singleton),
            _ => Err(PlaygroundError::UnknownPattern(s.to_string())),
        }
    }
}

// ============================================================================
// Suites and reports
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suite {
    pub pattern: Pattern,
    pub cases: Vec<CaseOutcome>,
}

impl Suite {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            cases: Vec::new(),
        }
    }

    /// Record whether `actual` equals `expected`.
    pub fn check_eq<T>(&mut self, case: &str, actual: T, expected: T)
    where
        T: PartialEq + fmt::Debug,
    {
        let passed = actual == expected;
        let detail = (!passed).then(|| format!("expected {expected:?}, got {actual:?}"));
        self.record(case, passed, detail);
    }

    pub fn check(&mut self, case: &str, condition: bool) {
        let detail = (!condition).then(|| "condition was false".to_string());
        self.record(case, condition, detail);
    }

    fn record(&mut self, case: &str, passed: bool, detail: Option<String>) {
        if !passed {
            tracing::warn!(pattern = %self.pattern, case, "demo case failed");
        }
        self.cases.push(CaseOutcome {
            name: case.to_string(),
            passed,
            detail,
        });
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub suites: Vec<Suite>,
}

impl Report {
    pub fn total(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    pub fn failed(&self) -> usize {
        self.suites.iter().map(Suite::failed).sum()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

// ============================================================================
// Running
// ============================================================================

pub fn run_pattern(pattern: Pattern, config: &PlaygroundConfig) -> Suite {
    let suite = match pattern {
        Pattern::Adapter => adapter::demo_suite(&config.pricing),
        Pattern::Builder => builder::demo_suite(),
        Pattern::ChainOfResponsibility => chain::demo_suite(),
        Pattern::Decorator => decorator::demo_suite(),
        Pattern::FactoryMethod => factory::demo_suite(),
        Pattern::Observer => observer::demo_suite(),
        Pattern::Prototype => prototype::demo_suite(),
        Pattern::Singleton => shared_state::demo_suite(),
    };
    tracing::info!(
        pattern = %pattern,
        passed = suite.passed(),
        failed = suite.failed(),
        "suite finished"
    );
    suite
}

/// Run the given patterns in order. An empty slice runs the whole catalog.
pub fn run(patterns: &[Pattern], config: &PlaygroundConfig) -> Report {
    let selected: &[Pattern] = if patterns.is_empty() {
        &Pattern::ALL
    } else {
        patterns
    };

    Report {
        suites: selected
            .iter()
            .map(|&pattern| run_pattern(pattern, config))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_parsing() {
        assert_eq!("chain".parse::<Pattern>().unwrap(), Pattern::ChainOfResponsibility);
        assert_eq!("Factory_Method".parse::<Pattern>().unwrap(), Pattern::FactoryMethod);
        assert_eq!("shared-state".parse::<Pattern>().unwrap(), Pattern::Singleton);
        assert_eq!(
            "visitor".parse::<Pattern>(),
            Err(PlaygroundError::UnknownPattern("visitor".to_string()))
        );
    }

    #[test]
    fn test_pattern_names_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn test_suite_records_failures() {
        let mut suite = Suite::new(Pattern::Adapter);
        suite.check_eq("equal", 1, 1);
        suite.check_eq("different", 1, 2);
        suite.check("truthy", true);

        assert_eq!(suite.passed(), 2);
        assert_eq!(suite.failed(), 1);
        assert!(!suite.is_success());
        assert_eq!(suite.cases[1].detail.as_deref(), Some("expected 2, got 1"));
    }

    #[test]
    fn test_full_catalog_passes_with_defaults() {
        let report = run(&[], &PlaygroundConfig::default());

        assert_eq!(report.suites.len(), Pattern::ALL.len());
        assert!(report.total() > 0);
        assert!(report.all_passed(), "failures: {:#?}", report);
    }

    #[test]
    fn test_selected_patterns_only() {
        let report = run(&[Pattern::Observer], &PlaygroundConfig::default());
        assert_eq!(report.suites.len(), 1);
        assert_eq!(report.suites[0].pattern, Pattern::Observer);
    }

    #[test]
    fn test_changed_pricing_breaks_adapter_expectations() {
        let mut config = PlaygroundConfig::default();
        config.pricing.force_majeure = 0;

        let report = run(&[Pattern::Adapter], &config);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_extreme_pricing_from_config_does_not_panic() {
        let config = PlaygroundConfig::from_toml_str(
            "[pricing]\ncustoms_per_horsepower = 9223372036854775807",
        )
        .unwrap();

        let report = run(&[Pattern::Adapter], &config);
        assert_eq!(report.total(), 2);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let report = run(&[Pattern::Builder], &PlaygroundConfig::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["suites"][0]["pattern"], "builder");
        assert!(json["suites"][0]["cases"][0].get("detail").is_none());
    }
}
