//! xledger-inspect: type raw ledger transaction records and print them.

mod config;
mod render;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::PathBuf;

use config::{InspectConfig, OutputFormat};
use xledger_transactions::{Transaction, TxRecord};
use xledger_utils::LogFormat;

#[derive(Parser)]
#[command(name = "xledger-inspect", about = "Inspect ledger transaction records as typed transactions")]
struct Cli {
    /// JSON file holding one record or an array of records; "-" reads stdin.
    input: String,

    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "XLEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, env = "XLEDGER_OUTPUT")]
    output: Option<OutputFormat>,

    /// Print the record a signer would see instead of the typed view.
    #[arg(long)]
    signing_view: bool,

    /// Abort on the first record that cannot be typed.
    #[arg(long)]
    strict: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "XLEDGER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "XLEDGER_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

impl Cli {
    /// Layer flags over the file (or default) configuration.
    fn merge_into(self, base: InspectConfig) -> (String, InspectConfig) {
        let config = InspectConfig {
            log_level: self.log_level.unwrap_or(base.log_level),
            log_format: self.log_format.unwrap_or(base.log_format),
            output: self.output.unwrap_or(base.output),
            signing_view: self.signing_view || base.signing_view,
            skip_invalid: !self.strict && base.skip_invalid,
        };
        (self.input, config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => InspectConfig::from_toml_file(path)?,
        None => InspectConfig::default(),
    };
    let config_path = cli.config.clone();
    let (input, config) = cli.merge_into(file_config);

    xledger_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = config_path {
        tracing::info!(path = %path.display(), "loaded config");
    }

    let raw = read_input(&input)?;
    let transactions = type_records(raw, config.skip_invalid)?;
    tracing::info!(count = transactions.len(), "typed transactions");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_output(&mut out, &transactions, &config)?;
    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<Value> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("{input} is not valid JSON"))
}

/// Type each record in `raw` (an object or an array of objects).
fn type_records(raw: Value, skip_invalid: bool) -> anyhow::Result<Vec<Transaction>> {
    let values = match raw {
        Value::Array(values) => values,
        other => vec![other],
    };

    let mut transactions = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match TxRecord::from_value(value).and_then(Transaction::from_record) {
            Ok(tx) => {
                tracing::info!(index, tx_type = tx.transaction_type(), "loaded record");
                transactions.push(tx);
            }
            Err(e) if skip_invalid => {
                tracing::warn!(index, error = %e, "skipping record");
            }
            Err(e) => return Err(e).with_context(|| format!("record {index}")),
        }
    }
    Ok(transactions)
}

fn write_output(
    out: &mut impl Write,
    transactions: &[Transaction],
    config: &InspectConfig,
) -> anyhow::Result<()> {
    match (config.output, config.signing_view) {
        (OutputFormat::Text, false) => {
            for tx in transactions {
                writeln!(out, "{}", render::render_text(tx))?;
            }
        }
        (OutputFormat::Text, true) => {
            for tx in transactions {
                writeln!(out, "{}", serde_json::to_string_pretty(&render::render_signing(tx))?)?;
            }
        }
        (OutputFormat::Json, signing) => {
            let views: Vec<Value> = transactions
                .iter()
                .map(|tx| {
                    if signing {
                        render::render_signing(tx)
                    } else {
                        render::render_json(tx)
                    }
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?;
        }
    }
    Ok(())
}
