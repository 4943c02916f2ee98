//! CLI interface for the verification suite runner

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jotbridge::error::HarnessError;
use jotbridge::fixture::FixtureStore;
use jotbridge::properties::ConnectorProperties;
use jotbridge::report::{Outcome, RunReport};
use jotbridge::scenario;

use super::client::ProxyClient;
use super::runner::ScenarioRunner;

#[derive(Parser)]
#[command(name = "verify")]
#[command(about = "Run connector verification scenarios against an ESB proxy")]
#[command(version)]
pub struct Cli {
    /// Proxy endpoint; overrides the properties file
    #[arg(long)]
    pub proxy_url: Option<String>,
    /// JSON connector properties file
    #[arg(long)]
    pub properties: Option<PathBuf>,
    /// Directory holding the fixture payloads
    #[arg(long, default_value = "fixtures")]
    pub fixtures: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full suite in execution order
    Run {
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the scenarios in execution order
    List,
    /// Run a single scenario by name, e.g. "getForm/mandatory"
    Scenario { name: String },
}

pub async fn handle_cli_command(cli: Cli) -> i32 {
    match cli.command {
        Commands::List => {
            for scenario in scenario::suite() {
                println!("{:<32} {}", scenario.name, scenario.fixture);
            }
            0
        }
        Commands::Run { json } => {
            let mut runner = match build_runner(&cli) {
                Ok(runner) => runner,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            };
            let report = runner.run_suite().await;
            if json {
                print_json_report(&report)
            } else {
                print_text_report(&report)
            }
        }
        Commands::Scenario { ref name } => {
            let mut runner = match build_runner(&cli) {
                Ok(runner) => runner,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            };
            match runner.run_named(name).await {
                Ok(()) => {
                    println!("PASS {name}");
                    0
                }
                Err(e) => {
                    println!("FAIL {name}: {e}");
                    1
                }
            }
        }
    }
}

fn build_runner(cli: &Cli) -> Result<ScenarioRunner, HarnessError> {
    let mut properties = ConnectorProperties::load(cli.properties.as_deref())?;
    if let Some(proxy_url) = &cli.proxy_url {
        properties.proxy_url = proxy_url.clone();
    }
    let client = ProxyClient::new(properties.proxy_url.clone());
    let fixtures = FixtureStore::new(cli.fixtures.clone());
    Ok(ScenarioRunner::new(client, fixtures, properties))
}

fn print_text_report(report: &RunReport) -> i32 {
    for result in &report.results {
        match &result.outcome {
            Outcome::Passed => println!("PASS {}", result.scenario),
            Outcome::Failed { reason } => println!("FAIL {}: {reason}", result.scenario),
        }
    }
    println!("{} passed, {} failed", report.passed(), report.failed());
    if report.all_passed() { 0 } else { 1 }
}

fn print_json_report(report: &RunReport) -> i32 {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            println!("{json}");
            if report.all_passed() { 0 } else { 1 }
        }
        Err(e) => {
            eprintln!("Error: failed to serialize report: {e}");
            1
        }
    }
}
