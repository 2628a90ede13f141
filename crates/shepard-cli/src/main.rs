use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use shepard_core::{config::Config, pipeline, registry::CaseRegistry, report};
use shepard_llm::OpenAiBackend;
use shepard_scholar::ScholarClient;
use tracing::info;

/// Extract negative case treatment from a pre-uploaded legal opinion.
#[derive(Parser)]
#[command(name = "shepard", version)]
struct Args {
    /// Case identifier (one of the known pre-uploaded cases; see --list).
    #[arg(required_unless_present = "list")]
    case_id: Option<String>,

    /// List the known case identifiers and exit.
    #[arg(long)]
    list: bool,
}

/// Ask for the API key on the terminal when the env var is absent.
/// Non-interactive runs cannot answer a prompt, so they fail instead.
fn prompt_for_api_key() -> Result<String> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("OPENAI_API_KEY is not set and stdin is not a terminal");
    }
    eprint!("OPENAI_API_KEY is not set. Please enter your OpenAI API key: ");
    std::io::stderr().flush()?;
    let mut key = String::new();
    std::io::stdin().lock().read_line(&mut key)?;
    let key = key.trim().to_string();
    if key.is_empty() {
        anyhow::bail!("no API key provided");
    }
    Ok(key)
}

// ── main ──────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shepard=info".into()),
        )
        .init();

    let args = Args::parse();
    let registry = CaseRegistry::new();

    if args.list {
        for entry in registry.entries() {
            println!("{}  {}", entry.identifier, entry.case_name);
        }
        return Ok(());
    }

    let Some(case_id) = args.case_id else {
        anyhow::bail!("a case identifier is required (see --list)");
    };

    let mut config = Config::from_env();
    if config.api_key.is_empty() {
        config.api_key = prompt_for_api_key()?;
    }

    info!(model = %config.model, "starting extraction run");
    println!("Fetching legal decision text for case: {case_id}");
    println!("Analyzing legal decision for negative case treatment using ChatGPT...");

    let source = ScholarClient::new(config.scholar_base_url.as_str(), config.http_timeout_s);
    let backend = OpenAiBackend::new(
        config.api_key.as_str(),
        config.model.as_str(),
        config.openai_base_url.as_str(),
        config.http_timeout_s,
    );

    let records = pipeline::run(&registry, &source, &backend, &case_id).await?;
    report::write_report(&records, &config.results_path)?;

    Ok(())
}
