mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use morpho_client::{MorphoClient, VaultsResponse};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::cli::MorphoCli;

fn init_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout is reserved for the query result
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn log_summary(data: &Value) {
    match VaultsResponse::from_value(data.clone()) {
        Ok(response) => {
            for vault in response.items() {
                tracing::info!(
                    name = %vault.name,
                    symbol = %vault.symbol,
                    chain_id = vault.chain.id,
                    network = %vault.chain.network,
                    daily_apy = ?vault.daily_apy(),
                    "vault"
                );
            }
        }
        Err(e) => tracing::warn!("Response does not match the vaults query shape: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env only feeds RUST_LOG; the CLI itself reads no environment variables
    dotenv().ok();
    init_logger();

    let MorphoCli {
        endpoint,
        timeout_secs,
        summary,
    } = MorphoCli::parse();

    let endpoint = Url::parse(&endpoint).context("Invalid GraphQL endpoint")?;
    let mut builder = MorphoClient::builder().endpoint(endpoint);
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().context("Failed to build Morpho client")?;

    let data = client
        .get_vault_data()
        .await
        .context("Morpho vault query failed")?;

    if summary {
        log_summary(&data);
    }

    println!("serde_json::Value ({})", json_kind(&data));
    println!("{data}");

    Ok(())
}
