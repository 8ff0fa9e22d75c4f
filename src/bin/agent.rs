use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use voltz_agent::backend::BackendGateway;
use voltz_agent::core::{AgentWallet, Config};
use voltz_agent::features::{RateLimitStore, DEFAULT_SWEEP_INTERVAL};
use voltz_agent::transport::{parse_console_line, ConsoleTransport, InboundMessage};
use voltz_agent::VoltzAgent;

/// Sender used for console lines without an `0x…:` prefix
const DEFAULT_CONSOLE_SENDER: &str = "0x000000000000000000000000000000000000c0de";

/// Forward stdin lines into the agent's inbound queue
async fn read_console(tx: mpsc::Sender<InboundMessage>, default_sender: String) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if tx.send(parse_console_line(&line, &default_sender)).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read console input: {e}");
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Missing XMTP_WALLET_KEY ends the process here with a non-zero status
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("🚀 Initializing Voltz Agent...");

    let wallet = AgentWallet::from_private_key(&config.wallet_key)?;
    info!("✅ Agent initialized for address: {}", wallet.address());
    info!("🌐 Environment: {}", config.xmtp_env);

    let gateway = BackendGateway::new(&config.api_url, config.api_timeout)?;
    gateway.connect().await;

    let rate_limits = Arc::new(RateLimitStore::default());
    let sweeper = Arc::clone(&rate_limits).spawn_sweeper();
    info!(
        "⏱️  Rate limit: {} messages per {}s",
        rate_limits.max_per_window(),
        rate_limits.window().as_secs()
    );

    let transport = Arc::new(ConsoleTransport::new(wallet.address()));
    let agent = Arc::new(VoltzAgent::new(Arc::new(gateway), transport, rate_limits));
    let conversation_sweeper = Arc::clone(&agent).spawn_conversation_sweeper(DEFAULT_SWEEP_INTERVAL);

    let default_sender =
        std::env::var("CONSOLE_SENDER").unwrap_or_else(|_| DEFAULT_CONSOLE_SENDER.to_string());
    info!("💬 Reading messages from stdin as `0xsender: text` (default sender {default_sender})");

    let (tx, rx) = mpsc::channel(64);
    tokio::spawn(read_console(tx, default_sender));

    tokio::select! {
        _ = agent.run(rx) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Received SIGINT, shutting down gracefully...");
        }
    }

    sweeper.abort();
    conversation_sweeper.abort();
    info!("✅ Agent stopped successfully");
    Ok(())
}
