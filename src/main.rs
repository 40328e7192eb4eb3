//! RAG Validator CLI
//!
//! Runs the built-in scenarios against a RAG pipeline and a judge model.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rag_validator::{
    config::Config,
    eval::{ConsoleReporter, Evaluator, SCENARIOS, Scenario, find_scenario, run_scenarios},
    llm::LlmClient,
    logging::init_logging,
    retrieval::HttpRetriever,
};
use std::time::Instant;

/// RAG Validator - check a RAG pipeline's answers with an LLM judge
#[derive(Parser)]
#[command(name = "rag-validate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run scenarios (all of them by default)
    Run {
        /// Run only the named scenario
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// List the built-in scenarios
    List,

    /// Test judge model connection
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Run { scenario: None }) {
        Commands::Run { scenario } => cmd_run(config, scenario).await,
        Commands::List => cmd_list(),
        Commands::Test => cmd_test(config).await,
    }
}

async fn cmd_run(config: Config, scenario: Option<String>) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let selected: Vec<Scenario> = match scenario {
        Some(name) => vec![*find_scenario(&name)?],
        None => SCENARIOS.to_vec(),
    };

    println!("RAG endpoint: {}", config.retrieval.endpoint);
    println!("Judge model:  {}", config.llm.model);

    let evaluator = Evaluator::new(
        HttpRetriever::new(config.retrieval),
        LlmClient::new(config.llm),
        ConsoleReporter,
    );

    let start = Instant::now();
    let summary = run_scenarios(&evaluator, &selected)
        .await
        .context("Validation failed")?;

    println!(
        "\n{} of {} scenarios passed in {:.2?}",
        summary.passed.len(),
        selected.len(),
        start.elapsed()
    );

    Ok(())
}

fn cmd_list() -> Result<()> {
    println!("Scenarios");
    println!("{}", "─".repeat(60));
    for scenario in &SCENARIOS {
        println!("  {}", scenario.name);
        println!("    Question: {}", scenario.question);
        println!("    Expected: {}", scenario.expected_answer);
    }
    Ok(())
}

async fn cmd_test(config: Config) -> Result<()> {
    println!("Testing judge model connection...\n");

    println!("Configuration:");
    println!("  API Base:  {}", config.llm.api_base);
    println!("  Model:     {}", config.llm.model);
    if !config.llm.api_key.is_empty() {
        let prefix: String = config.llm.api_key.chars().take(8).collect();
        println!("  API Key:   {}...", prefix);
    }
    println!();

    config.validate().context("Invalid configuration")?;

    let client = LlmClient::new(config.llm);

    println!("Sending test request...");
    client
        .test_connection()
        .await
        .context("Connection test failed")?;
    println!("Connection successful!");

    Ok(())
}
