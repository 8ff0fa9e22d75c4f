//! Console transport for running the agent locally
//!
//! Each stdin line is one message. `0xsender: text` sets the sender, anything else is
//! attributed to the default sender. One conversation per sender.

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use super::{ChatTransport, InboundMessage};

pub struct ConsoleTransport {
    address: String,
    stdout: Mutex<Stdout>,
}

impl ConsoleTransport {
    pub fn new(address: &str) -> Self {
        ConsoleTransport {
            address: address.to_string(),
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

#[async_trait]
impl ChatTransport for ConsoleTransport {
    fn address(&self) -> &str {
        &self.address
    }

    async fn send_text(&self, conversation_id: &str, text: &str) -> Result<()> {
        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(format!("\n[{conversation_id}] 🤖 Agent:\n{text}\n\n").as_bytes())
            .await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Parse one console line into an inbound message
pub fn parse_console_line(line: &str, default_sender: &str) -> InboundMessage {
    let (sender, content) = match line.split_once(':') {
        Some((prefix, rest)) if is_address(prefix.trim()) => (prefix.trim(), rest.trim()),
        _ => (default_sender, line.trim()),
    };
    InboundMessage::new(sender, content, &format!("console:{}", sender.to_lowercase()))
}

fn is_address(candidate: &str) -> bool {
    candidate
        .strip_prefix("0x")
        .map(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}
