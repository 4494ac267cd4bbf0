//! Exchange CLI
//!
//! Runs the exchange use case from the command line.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use exchange_hex::ExchangeCurrencyUseCase;
use exchange_rates::{CurrencyCode, DEFAULT_API_URL, ProviderConfig, ProviderKind, build_provider};
use exchange_types::ExchangeCurrencyInput;

#[derive(Parser)]
#[command(name = "exchange")]
#[command(author, version, about = "Currency exchange CLI", long_about = None)]
struct Cli {
    /// Rate service to use (static, http)
    #[arg(long, env = "RATE_PROVIDER", default_value = "static")]
    provider: ProviderKind,

    /// Base URL of the HTTP rate service
    #[arg(long, env = "EXCHANGE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// API key for the HTTP rate service
    #[arg(long, env = "EXCHANGE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout for the HTTP rate service, in seconds
    #[arg(long, env = "EXCHANGE_API_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount from one currency to another
    Convert {
        /// Base currency code (e.g. USD)
        base: String,
        /// Target currency code (e.g. EUR)
        target: String,
        /// Amount in base currency units
        amount: f64,
    },
    /// List currencies known to the static rate table
    Currencies {
        /// Print the table as JSON, including base USD rates
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            kind: self.provider,
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn currency_table_json() -> serde_json::Value {
    CurrencyCode::all()
        .iter()
        .map(|currency| {
            serde_json::json!({
                "code": currency,
                "symbol": currency.symbol(),
                "name": currency.display_name(),
                "usdRate": currency.base_to_usd_rate(),
            })
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert {
            base,
            target,
            amount,
        } => {
            let config = cli.provider_config();
            tracing::debug!(provider = ?config.kind, api_url = %config.api_url, "building rate provider");
            let provider = build_provider(&config)?;
            let use_case = ExchangeCurrencyUseCase::new(provider);

            match use_case
                .run(ExchangeCurrencyInput::new(base, target, *amount))
                .await
            {
                Ok(output) => println!("{}", serde_json::to_string_pretty(&output)?),
                Err(err) => {
                    eprintln!("{}", serde_json::to_string_pretty(&err)?);
                    std::process::exit(1);
                }
            }
        }

        Commands::Currencies { json: true } => {
            println!("{}", serde_json::to_string_pretty(&currency_table_json())?);
        }

        Commands::Currencies { json: false } => {
            for currency in CurrencyCode::all() {
                println!(
                    "{}  {:<3} {}",
                    currency.code(),
                    currency.symbol(),
                    currency.display_name()
                );
            }
        }
    }

    Ok(())
}
