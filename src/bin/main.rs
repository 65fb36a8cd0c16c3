#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use colored::*;
use hashledger::config::load_config;
use hashledger::ledger::Ledger;

/// Build a small ledger, mine a few records into it, then validate the chain.
#[derive(Parser)]
#[command(name = "hashledger-demo", version, about)]
struct Cli {
    /// Required count of leading zero hex digits per mined record
    /// (overrides the config file)
    #[arg(long)]
    difficulty: Option<u32>,

    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print the ledger as JSON instead of the plain listing
    #[arg(long)]
    json: bool,

    /// Payloads to append; falls back to the config file, then to the
    /// built-in demo transactions
    payloads: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    let difficulty = cli.difficulty.unwrap_or(config.mining.difficulty);

    let mut payloads = if cli.payloads.is_empty() {
        config.demo.payloads
    } else {
        cli.payloads
    };
    if payloads.is_empty() {
        payloads = vec![
            "Transaction 1: Alice sends 10 coins to Bob".to_string(),
            "Transaction 2: Bob sends 5 coins to Charlie".to_string(),
        ];
    }

    let mut ledger = Ledger::new(difficulty)?;

    for (i, payload) in payloads.into_iter().enumerate() {
        println!("{}", format!("Mining record {}...", i + 1).yellow());
        let started = Instant::now();
        let record = ledger.append(payload);
        println!(
            "  sealed {} (nonce {}) in {:.2?}",
            record.content_hash().bright_white(),
            record.search_counter(),
            started.elapsed()
        );
    }

    println!();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(ledger.records())?);
    } else {
        println!("{}", "Ledger contents:".bright_green().underline());
        for record in ledger.records() {
            println!(
                "  Record {} [Hash: {}, PrevHash: {}, Payload: {}]",
                record.position(),
                record.content_hash(),
                record.link_hash(),
                record.payload()
            );
        }
    }

    println!();
    let report = ledger.validate();
    if report.is_valid() {
        println!("{} {}", "Ledger valid:".bright_green(), "yes".bright_white());
    } else {
        println!("{} {}", "Ledger valid:".bright_red(), "no".bright_white());
        println!("  {}", report.to_string().red());
    }

    Ok(())
}
