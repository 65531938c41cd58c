//! # hub-submit
//!
//! Command-line client for publishing signed messages to a hub.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Apply command-line overrides
//! 3. Initialize logging (stderr)
//! 4. Run the subcommand; any error exits non-zero

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use shared_crypto::Ed25519KeyPair;
use shared_types::{decode_message, FarcasterNetwork, HashScheme, MessageType};
use tokio::sync::watch;
use tracing::{info, warn};

use hub_submit::{
    build_message_data, build_message_data_at_offset, init_logging, seal, verify_envelope,
    HttpSubmitter, MessageBody, SubmissionService, SubmitConfig,
};

/// hub-submit: sign and submit hub messages
#[derive(Parser, Debug)]
#[command(name = "hub-submit", version)]
#[command(about = "Build, sign and submit messages to a hub's HTTP API")]
struct Args {
    /// submitMessage endpoint URL [env: HUB_ENDPOINT]
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Author fid [env: HUB_FID]
    #[arg(short, long, global = true)]
    fid: Option<u64>,

    /// mainnet, testnet or devnet [env: HUB_NETWORK]
    #[arg(short, long, global = true)]
    network: Option<FarcasterNetwork>,

    /// Request timeout in seconds [env: HUB_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log as JSON lines [env: HUB_JSON_LOGS]
    #[arg(long, global = true)]
    json_logs: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Output::Text, global = true)]
    output: Output,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Publish a text cast
    Cast {
        text: String,

        /// Print the sealed envelope instead of posting it
        #[arg(long)]
        dry_run: bool,

        /// Seconds since 2021-01-01T00:00:00Z (default: now)
        #[arg(long)]
        timestamp: Option<u32>,

        /// Reply to a URL
        #[arg(long)]
        parent_url: Option<String>,

        /// URL to embed (repeatable)
        #[arg(long = "embed")]
        embeds: Vec<String>,
    },

    /// Generate a new signer seed
    Keygen,

    /// Decode and verify a hex-encoded envelope
    Verify { envelope: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SubmitConfig::from_env().context("Invalid environment configuration")?;
    apply_overrides(&mut config, &args);

    init_logging(&config.log).context("Failed to initialize logging")?;

    match args.command {
        Command::Cast {
            text,
            dry_run,
            timestamp,
            parent_url,
            embeds,
        } => {
            let body = MessageBody::cast(text, embeds, parent_url);
            cast(&config, body, timestamp, dry_run, args.output).await
        }
        Command::Keygen => keygen(args.output),
        Command::Verify { envelope } => verify(&envelope, args.output),
    }
}

fn apply_overrides(config: &mut SubmitConfig, args: &Args) {
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(fid) = args.fid {
        config.fid = fid;
    }
    if let Some(network) = args.network {
        config.network = network;
    }
    if let Some(timeout) = args.timeout {
        config.timeout = Duration::from_secs(timeout);
    }
    if args.json_logs {
        config.log.json_logs = true;
    }
}

async fn cast(
    config: &SubmitConfig,
    body: MessageBody,
    timestamp: Option<u32>,
    dry_run: bool,
    output: Output,
) -> Result<()> {
    config.validate().context("Configuration cannot be used to submit")?;
    let signer = config.signer().context("Invalid HUB_SIGNER_SEED")?;

    let data = match timestamp {
        Some(offset) => build_message_data_at_offset(config.fid, body, offset, config.network),
        None => build_message_data(config.fid, body, Utc::now(), config.network),
    }
    .context("Failed to build message")?;

    if dry_run {
        let sealed = seal(&data, HashScheme::Blake3, &signer).context("Failed to seal message")?;
        match output {
            Output::Text => println!("{}", sealed.to_hex()),
            Output::Json => println!(
                "{}",
                json!({
                    "hash": sealed.hash_hex(),
                    "envelope": sealed.to_hex(),
                    "envelope_len": sealed.bytes.len(),
                })
            ),
        }
        return Ok(());
    }

    let submitter = HttpSubmitter::new(&config.endpoint, config.timeout, config.connect_timeout)
        .context("Failed to create HTTP client")?;
    let service = SubmissionService::new(submitter, signer);
    info!(
        endpoint = %config.endpoint,
        fid = config.fid,
        network = %config.network,
        signer = %service.signer_hex(),
        "Submitting cast"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted");
            let _ = shutdown_tx.send(true);
        }
    });

    let receipt = service
        .submit_until(data, shutdown_rx)
        .await
        .context("Submission failed")?;

    match output {
        Output::Text => println!("{} (HTTP {})", receipt.hash_hex, receipt.status),
        Output::Json => println!("{}", serde_json::to_string(&receipt)?),
    }
    Ok(())
}

fn keygen(output: Output) -> Result<()> {
    let keypair = Ed25519KeyPair::generate();
    let seed = keypair.to_seed_hex();
    let public_key = keypair.public_key().to_hex();

    match output {
        Output::Text => {
            println!("seed:       {seed}");
            println!("public key: {public_key}");
        }
        Output::Json => println!("{}", json!({ "seed": seed, "public_key": public_key })),
    }
    Ok(())
}

fn verify(envelope_hex: &str, output: Output) -> Result<()> {
    let trimmed = envelope_hex.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).context("Envelope is not valid hex")?;

    let message = decode_message(&bytes).context("Envelope is not a valid message")?;
    let data = verify_envelope(&message).context("Envelope failed verification")?;

    let message_type = MessageType::try_from(data.r#type)
        .map(|t| format!("{t:?}"))
        .unwrap_or_else(|_| data.r#type.to_string());
    let network = FarcasterNetwork::try_from(data.network)
        .map(|n| n.to_string())
        .unwrap_or_else(|_| data.network.to_string());
    let hash = format!("0x{}", hex::encode(&message.hash));
    let signer = hex::encode(&message.signer);

    match output {
        Output::Text => {
            println!("valid");
            println!("hash:      {hash}");
            println!("signer:    {signer}");
            println!("fid:       {}", data.fid);
            println!("type:      {message_type}");
            println!("network:   {network}");
            println!("timestamp: {}", data.timestamp);
        }
        Output::Json => println!(
            "{}",
            json!({
                "valid": true,
                "hash": hash,
                "signer": signer,
                "fid": data.fid,
                "type": message_type,
                "network": network,
                "timestamp": data.timestamp,
            })
        ),
    }
    Ok(())
}
