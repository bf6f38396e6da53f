//! Test runner and report
//!
//! Suites run in registration order. A suite's setup runs once before its
//! first selected test; if it fails, every selected test of that suite is
//! recorded as failed without being invoked. Each body runs exactly once,
//! and a body that panics is recorded as a failure without stopping the run.

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use colored::Colorize;
use serde::Serialize;

use crate::check::{Failure, TestResult};
use crate::context::TestContext;
use crate::registry::{Registry, Suite, TestCase};

/// What happened to one test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every check held
    Passed,
    /// A check failed, the body panicked, or the suite setup failed
    Failed,
    /// Excluded by the name filter
    Skipped,
}

/// Result of one registered test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Suite the test belongs to
    pub suite: String,
    /// Test name
    pub name: &'static str,
    /// Result
    pub status: Status,
    /// Failure description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    /// `suite/name`, as matched by the run filter.
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.suite, self.name)
    }
}

/// Every outcome of a run, in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Per-test outcomes
    pub outcomes: Vec<Outcome>,
    /// Wall-clock time of the run
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl Report {
    fn count(&self, status: Status) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Tests that passed.
    pub fn passed(&self) -> usize {
        self.count(Status::Passed)
    }

    /// Tests that failed.
    pub fn failed(&self) -> usize {
        self.count(Status::Failed)
    }

    /// Tests excluded by the filter.
    pub fn skipped(&self) -> usize {
        self.count(Status::Skipped)
    }

    /// Tests that were selected to run.
    pub fn executed(&self) -> usize {
        self.outcomes.len().saturating_sub(self.skipped())
    }

    /// Whether no selected test failed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Outcome of `suite/name`.
    pub fn outcome(&self, suite: &str, name: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.suite == suite && o.name == name)
    }

    /// Human-readable report, one line per executed test and a summary.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let mut suite: Option<&str> = None;
        for outcome in &self.outcomes {
            if outcome.status == Status::Skipped {
                continue;
            }
            if suite != Some(outcome.suite.as_str()) {
                writeln!(out)?;
                writeln!(out, "{}", format!("Suite {}", outcome.suite).cyan().bold())?;
                suite = Some(outcome.suite.as_str());
            }
            match (&outcome.status, &outcome.message) {
                (Status::Failed, Some(message)) => {
                    writeln!(out, "  {} {}", "✗".red().bold(), outcome.name.red())?;
                    writeln!(out, "      {}", message.dimmed())?;
                }
                (Status::Failed, None) => {
                    writeln!(out, "  {} {}", "✗".red().bold(), outcome.name.red())?;
                }
                _ => writeln!(out, "  {} {}", "✓".green(), outcome.name)?,
            }
        }

        writeln!(out)?;
        let summary = format!(
            "{} run, {} passed, {} failed, {} skipped in {:.2}s",
            self.executed(),
            self.passed(),
            self.failed(),
            self.skipped(),
            self.elapsed.as_secs_f64()
        );
        if self.all_passed() {
            writeln!(out, "{}", summary.green().bold())
        } else {
            writeln!(out, "{}", summary.red().bold())
        }
    }

    /// Report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_secs<S: serde::Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

fn qualified_name(suite: &str, name: &str) -> String {
    format!("{suite}/{name}")
}

/// Run every registered test whose `suite/name` contains `filter`.
pub fn run(registry: &Registry, ctx: &mut TestContext<'_>, filter: Option<&str>) -> Report {
    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(registry.test_count());
    for suite in registry.suites() {
        run_suite(suite, ctx, filter, &mut outcomes);
    }
    let report = Report {
        outcomes,
        elapsed: start.elapsed(),
    };
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        skipped = report.skipped(),
        "run finished"
    );
    report
}

fn run_suite(suite: &Suite, ctx: &mut TestContext<'_>, filter: Option<&str>, outcomes: &mut Vec<Outcome>) {
    let selected = |test: &TestCase| filter.map_or(true, |f| qualified_name(suite.name(), test.name).contains(f));

    let setup_failure = if suite.tests().iter().any(|t| selected(t)) {
        suite.setup().and_then(|setup| {
            tracing::debug!(suite = suite.name(), "running suite setup");
            invoke(setup, ctx).err().map(|failure| format!("suite setup failed: {failure}"))
        })
    } else {
        None
    };
    if let Some(message) = &setup_failure {
        tracing::warn!(suite = suite.name(), %message, "suite setup failed, tests not run");
    }

    for test in suite.tests() {
        let (status, message) = if !selected(test) {
            (Status::Skipped, None)
        } else if let Some(message) = &setup_failure {
            (Status::Failed, Some(message.clone()))
        } else {
            tracing::debug!(suite = suite.name(), test = test.name, "running");
            match invoke(test.body, ctx) {
                Ok(()) => (Status::Passed, None),
                Err(failure) => {
                    tracing::debug!(suite = suite.name(), test = test.name, %failure, "failed");
                    (Status::Failed, Some(failure.to_string()))
                }
            }
        };
        outcomes.push(Outcome {
            suite: suite.name().to_string(),
            name: test.name,
            status,
            message,
        });
    }
}

fn invoke(body: fn(&mut TestContext<'_>) -> TestResult, ctx: &mut TestContext<'_>) -> TestResult {
    match panic::catch_unwind(AssertUnwindSafe(|| body(ctx))) {
        Ok(result) => result,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            Err(Failure::new(format!("panicked: {detail}"), file!(), line!()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PlatformConfig;
    use platform_hal::StubHal;

    fn pass(_: &mut TestContext<'_>) -> TestResult {
        Ok(())
    }

    fn fail(_: &mut TestContext<'_>) -> TestResult {
        crate::check_eq!(1u32, 2u32);
        Ok(())
    }

    fn explode(_: &mut TestContext<'_>) -> TestResult {
        panic!("boom");
    }

    fn bad_setup(_: &mut TestContext<'_>) -> TestResult {
        crate::check!(false, "databases unavailable");
        Ok(())
    }

    fn run_with(registry: &Registry, filter: Option<&str>) -> Report {
        let mut hal = StubHal::new();
        let config = PlatformConfig::default();
        let mut ctx = TestContext::new(&mut hal, &config);
        run(registry, &mut ctx, filter)
    }

    #[test]
    fn test_outcomes_follow_registration_order() {
        let mut registry = Registry::new();
        let suite = registry.add_suite("unit", None).unwrap();
        registry.add_test(suite, "pass", pass).unwrap();
        registry.add_test(suite, "fail", fail).unwrap();
        registry.add_test(suite, "explode", explode).unwrap();
        registry.add_test(suite, "pass_again", pass).unwrap();

        let report = run_with(&registry, None);
        let names: Vec<_> = report.outcomes.iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["pass", "fail", "explode", "pass_again"]);
        assert_eq!((report.passed(), report.failed(), report.skipped()), (2, 2, 0));

        let exploded = report.outcome("unit", "explode").unwrap();
        assert!(exploded.message.as_deref().unwrap().contains("boom"));
    }

    #[test]
    fn test_setup_failure_fails_whole_suite() {
        let mut registry = Registry::new();
        let broken = registry.add_suite("broken", Some(bad_setup)).unwrap();
        registry.add_test(broken, "pass", pass).unwrap();
        let healthy = registry.add_suite("healthy", None).unwrap();
        registry.add_test(healthy, "pass", pass).unwrap();

        let report = run_with(&registry, None);
        let broken = report.outcome("broken", "pass").unwrap();
        assert_eq!(broken.status, Status::Failed);
        assert!(broken.message.as_deref().unwrap().contains("databases unavailable"));
        assert_eq!(report.outcome("healthy", "pass").unwrap().status, Status::Passed);
    }

    #[test]
    fn test_filter_skips_unmatched() {
        let mut registry = Registry::new();
        let suite = registry.add_suite("unit", Some(bad_setup)).unwrap();
        registry.add_test(suite, "pass", pass).unwrap();
        let other = registry.add_suite("other", None).unwrap();
        registry.add_test(other, "fail", fail).unwrap();

        let report = run_with(&registry, Some("other/"));
        assert_eq!(report.outcome("unit", "pass").unwrap().status, Status::Skipped);
        assert_eq!(report.outcome("other", "fail").unwrap().status, Status::Failed);
        assert_eq!(report.executed(), 1);
    }

    #[test]
    fn test_render_and_json() {
        let mut registry = Registry::new();
        let suite = registry.add_suite("unit", None).unwrap();
        registry.add_test(suite, "pass", pass).unwrap();
        registry.add_test(suite, "fail", fail).unwrap();
        let report = run_with(&registry, None);

        colored::control::set_override(false);
        let mut text = Vec::new();
        report.render(&mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("Suite unit"));
        assert!(text.contains("2 run, 1 passed, 1 failed, 0 skipped"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["outcomes"][1]["status"], "failed");
        assert!(json["outcomes"][0].get("message").is_none());
    }
}
