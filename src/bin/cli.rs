use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use voltz_agent::backend::BackendGateway;
use voltz_agent::core::{AgentWallet, ApiSettings, Config};
use voltz_agent::features::RateLimitStore;
use voltz_agent::transport::{InboundMessage, MemoryTransport};
use voltz_agent::VoltzAgent;

/// How long `send` waits for the agent's replies
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

// CLI argument structure
#[derive(Parser, Debug)]
#[command(name = "voltz-agent-cli")]
#[command(about = "CLI for testing the Voltz agent")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the configured agent address and backend
    Info,
    /// Check that the backend answers /health
    TestConnection,
    /// Show agent message counts for the last 24 hours
    Stats,
    /// Run one message through an in-process agent and print its replies
    Send {
        message: String,
        /// Sender address to attribute the message to
        #[arg(short, long, default_value = "0x000000000000000000000000000000000000c0de")]
        from: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    // Only commands that act as the agent need the wallet key
    let settings = ApiSettings::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();

    let gateway = BackendGateway::new(&settings.api_url, settings.api_timeout)?;

    match args.command {
        Command::Info => {
            let config = Config::from_env()?;
            let wallet = AgentWallet::from_private_key(&config.wallet_key)?;
            println!("📋 Agent Information:");
            println!("Address: {}", wallet.address());
            println!("Environment: {}", config.xmtp_env);
            println!("Backend API: {}", config.api_url);
            println!("Log Level: {}", config.log_level);
        }
        Command::TestConnection => {
            let health = gateway
                .health()
                .await
                .ok_or_else(|| anyhow!("Could not reach backend at {}", gateway.base_url()))?;
            println!("✅ Backend status: {}", health.status);
            if let Some(environment) = health.environment {
                println!("Environment: {environment}");
            }
            if let Some(uptime) = health.uptime {
                println!("Uptime: {uptime:.0}s");
            }
        }
        Command::Stats => {
            let stats = gateway
                .get_agent_stats()
                .await
                .ok_or_else(|| anyhow!("Could not fetch agent stats"))?;
            println!("📊 Messages (24h): {}", stats.messages_last_24h);
            println!("👥 Unique users (24h): {}", stats.unique_users_last_24h);
        }
        Command::Send { message, from } => {
            let config = Config::from_env()?;
            let wallet = AgentWallet::from_private_key(&config.wallet_key)?;
            let transport = Arc::new(MemoryTransport::new(wallet.address()));
            let agent = VoltzAgent::new(
                Arc::new(gateway),
                transport.clone(),
                Arc::new(RateLimitStore::default()),
            );

            let inbound = InboundMessage::new(&from, &message, &format!("cli:{from}"));
            match timeout(SEND_TIMEOUT, agent.handle_message(inbound)).await {
                Ok(outcome) => info!("✅ Message processed: {outcome:?}"),
                Err(_) => info!("No response received (timeout)"),
            }

            for reply in transport.sent_texts() {
                println!("📩 Response:\n{reply}\n");
            }
        }
    }

    Ok(())
}
