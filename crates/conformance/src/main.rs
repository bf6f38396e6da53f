//! `hal-conformance`: run the platform HAL conformance suites
//!
//! Exit status: `0` when the suites were registered and run, `1` when the
//! configuration could not be loaded or a suite could not be created (no
//! test is run), `2` with `--strict` when any test failed, `3` when the
//! report could not be written. A closed stdout pipe is not an error.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use hal_conformance::{config, register_suites, runner, Capabilities, Level, Registry, Report, TestContext};
use platform_hal::mocks::SimulatedHal;
use platform_hal::{PlatformHal, StubHal};

const EXIT_SUCCESS: u8 = 0;
const EXIT_SETUP_FAILED: u8 = 1;
const EXIT_TESTS_FAILED: u8 = 2;
const EXIT_OUTPUT_FAILED: u8 = 3;

#[derive(Parser)]
#[command(name = "hal-conformance")]
#[command(about = "RDK-B platform HAL L1/L2 conformance suites", long_about = None)]
#[command(version)]
struct Cli {
    /// Platform configuration file (JSON with `MaxEthPort`)
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Suites to register
    #[arg(long, value_enum, default_value_t = LevelArg::All)]
    level: LevelArg,
    /// Platform has a thermal manager: register fan/thermal tests
    #[arg(long)]
    thermal_manager: bool,
    /// Platform has an LED manager: register LED tests
    #[arg(long)]
    led_manager: bool,
    /// HAL implementation to test
    #[arg(long, value_enum, default_value_t = Backend::Stub)]
    backend: Backend,
    /// Print registered tests and exit without running them
    #[arg(long)]
    list: bool,
    /// Run only tests whose `suite/name` contains this text
    #[arg(long)]
    filter: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Exit with status 2 when any test fails
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LevelArg {
    L1,
    L2,
    All,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::L1 => Level::L1,
            LevelArg::L2 => Level::L2,
            LevelArg::All => Level::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Shipped placeholder: every call succeeds without doing anything
    Stub,
    /// In-memory platform that honours the full contract
    Simulated,
}

impl Cli {
    fn capabilities(&self) -> Capabilities {
        let features = Capabilities::from_features();
        Capabilities {
            thermal_manager: features.thermal_manager || self.thermal_manager,
            led_manager: features.led_manager || self.led_manager,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(EXIT_SETUP_FAILED)
        }
    }
}

/// Load, register and run. `Err` is reserved for setup failures; output
/// errors are folded into the returned code by [`finish`].
fn run(cli: &Cli) -> Result<u8> {
    let config = config::load(&cli.config).context("platform configuration")?;

    let caps = cli.capabilities();
    let mut registry = Registry::new();
    let registered =
        register_suites(&mut registry, cli.level.into(), caps).context("suite registration")?;
    tracing::info!(tests = registered, "registration complete");

    if cli.list {
        return Ok(finish(list_tests(&registry), EXIT_SUCCESS));
    }

    let mut hal: Box<dyn PlatformHal> = match cli.backend {
        Backend::Stub => Box::new(StubHal::new()),
        Backend::Simulated => Box::new(SimulatedHal::new(config.max_eth_port)),
    };
    tracing::info!(backend = ?cli.backend, max_eth_port = config.max_eth_port, "running suites");

    let mut ctx = TestContext::new(hal.as_mut(), &config);
    let report = runner::run(&registry, &mut ctx, cli.filter.as_deref());

    let strict_failure = cli.strict && !report.all_passed();
    let code = if strict_failure { EXIT_TESTS_FAILED } else { EXIT_SUCCESS };
    Ok(finish(write_report(&report, cli.json, strict_failure), code))
}

fn list_tests(registry: &Registry) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for suite in registry.suites() {
        for name in suite.test_names() {
            writeln!(out, "{}/{}", suite.name(), name)?;
        }
    }
    out.flush()
}

fn write_report(report: &Report, json: bool, strict_failure: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", report.to_json().map_err(io::Error::from)?)?;
    } else {
        report.render(&mut out)?;
    }
    if strict_failure {
        writeln!(out, "{}", "strict mode: failing tests".red().bold())?;
    }
    out.flush()
}

/// Exit code for a run whose output went through `written`.
///
/// A reader that hung up early (`--list | head`) keeps `code`.
fn finish(written: io::Result<()>, code: u8) -> u8 {
    match written {
        Ok(()) => code,
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => code,
        Err(err) => {
            tracing::error!("cannot write output: {err}");
            EXIT_OUTPUT_FAILED
        }
    }
}
