use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use design_patterns_playground::{harness, logging, Pattern, PlaygroundConfig, Report};

/// Run the design pattern demos and report every checked case.
#[derive(Parser, Debug)]
#[command(name = "playground")]
#[command(about = "Runs the demo suite of each PATTERN (all of them when none is given)", long_about = None)]
#[command(version)]
struct Cli {
    /// Patterns to run, e.g. `observer chain factory-method`
    #[arg(value_name = "PATTERN")]
    patterns: Vec<Pattern>,

    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List the available patterns and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_report(report: &Report) {
    for suite in &report.suites {
        let header = format!("{} ({})", suite.pattern, suite.pattern.family());
        println!("{}", header.bold());

        for case in &suite.cases {
            if case.passed {
                println!("  {} {}", "✓".green(), case.name);
            } else {
                let detail = case.detail.as_deref().unwrap_or_default();
                println!("  {} {} {}", "✗".red(), case.name, detail.dimmed());
            }
        }
    }

    let summary = format!(
        "\n{} cases, {} passed, {} failed",
        report.total(),
        report.total() - report.failed(),
        report.failed()
    );
    if report.all_passed() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.red());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        for pattern in Pattern::ALL {
            println!("{:<24} {}", pattern.name(), pattern.family());
        }
        return ExitCode::SUCCESS;
    }

    let config = match &cli.config {
        Some(path) => match PlaygroundConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {err}", "error:".red());
                return ExitCode::from(2);
            }
        },
        None => PlaygroundConfig::default(),
    };

    logging::init(cli.verbose, &config.log_level);

    let report = harness::run(&cli.patterns, &config);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} failed to serialize report: {err}", "error:".red());
                return ExitCode::from(2);
            }
        }
    } else {
        print_report(&report);
    }

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
