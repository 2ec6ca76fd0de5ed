// src/main.rs
//! SPG NFT command line entry point.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spg_nft_client::blockchain::EthereumWorkflowsClient;
use spg_nft_client::core::{config::ClientConfig, validation::parse_address};
use spg_nft_client::nft::{CollectionParams, NftClient, TxOptions, WaitOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "spg-nft")]
#[command(about = "Create and inspect SPG NFT collections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// TOML config file. Falls back to CONFIG_PATH, then to SPG_* environment variables only.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a collection from a JSON or TOML parameters file
    CreateCollection {
        #[arg(long)]
        params: PathBuf,
        /// Wait for the receipt and report the deployed contract
        #[arg(long)]
        wait: bool,
        /// Print the encoded call instead of sending it. Needs no RPC access or key.
        #[arg(long)]
        encode_only: bool,
        /// Default owner for an encode-only call when the params file sets none
        #[arg(long, value_name = "ADDRESS", requires = "encode_only")]
        from: Option<String>,
    },
    /// Show the mint fee and mint fee token of a deployed collection
    MintFee {
        #[arg(long)]
        contract: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let config = load_config(args.config.as_deref())?;
    info!(rpc_url = %config.rpc_url, chain = %config.chain, "Starting spg-nft v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Commands::CreateCollection { params, wait, encode_only, from } => {
            let params = load_params(&params)?;
            let client = if encode_only {
                offline_client(&config, &params, from.as_deref())?
            } else {
                connected_client(&config).await?
            };
            let tx_options = TxOptions {
                wait_for_transaction: wait,
                encoded_tx_data_only: encode_only,
                ..Default::default()
            };
            let result = client.create_collection(params, tx_options).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::MintFee { contract } => {
            let client = connected_client(&config).await?;
            let token = client.get_mint_fee_token(&contract).await?;
            let fee = client.get_mint_fee(&contract).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "mintFeeToken": token,
                    "mintFee": fee.to_string(),
                }))?
            );
        }
    }

    Ok(())
}

async fn connected_client(config: &ClientConfig) -> Result<NftClient> {
    let chain_client = Arc::new(EthereumWorkflowsClient::connect(config).await?);
    Ok(NftClient::from_chain_client(chain_client).with_wait_defaults(WaitOptions::from(config)))
}

/// Encode-only client: no RPC call and no signing key. The owner comes from
/// the params file, then from `--from`.
fn offline_client(
    config: &ClientConfig,
    params: &CollectionParams,
    from: Option<&str>,
) -> Result<NftClient> {
    let owner = params
        .owner
        .as_deref()
        .or(from)
        .context("Encode-only mode needs an owner: set `owner` in the params file or pass --from")?;
    let account = parse_address(owner)?;
    let chain_client = Arc::new(EthereumWorkflowsClient::offline(config, account)?);
    Ok(NftClient::from_chain_client(chain_client))
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    let path = path.map(Path::to_path_buf).or_else(|| std::env::var("CONFIG_PATH").ok().map(PathBuf::from));
    let config = match path {
        Some(p) => ClientConfig::from_file(&p)
            .with_context(|| format!("Failed to load config from {}", p.display()))?,
        None => ClientConfig::from_env()?,
    };
    Ok(config)
}

/// `.toml` files are parsed as TOML, anything else as JSON.
fn load_params(path: &Path) -> Result<CollectionParams> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read params file {}", path.display()))?;
    let params = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(params)
}
