//! In-process transport
//!
//! Records every reply and rebroadcasts it so a caller can wait for the agent's answer.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::broadcast;

use super::ChatTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub conversation_id: String,
    pub text: String,
}

pub struct MemoryTransport {
    address: String,
    sent: Mutex<Vec<SentMessage>>,
    events: broadcast::Sender<SentMessage>,
    failures_pending: AtomicUsize,
}

impl MemoryTransport {
    pub fn new(address: &str) -> Self {
        let (events, _) = broadcast::channel(64);
        MemoryTransport {
            address: address.to_string(),
            sent: Mutex::new(Vec::new()),
            events,
            failures_pending: AtomicUsize::new(0),
        }
    }

    /// Receive every reply sent after this call
    pub fn subscribe(&self) -> broadcast::Receiver<SentMessage> {
        self.events.subscribe()
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.text).collect()
    }

    /// Make the next `count` sends fail
    pub fn fail_next_sends(&self, count: usize) {
        self.failures_pending.store(count, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatTransport for MemoryTransport {
    fn address(&self) -> &str {
        &self.address
    }

    async fn send_text(&self, conversation_id: &str, text: &str) -> Result<()> {
        let should_fail = self
            .failures_pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(anyhow!("send to conversation {conversation_id} failed"));
        }

        let message = SentMessage {
            conversation_id: conversation_id.to_string(),
            text: text.to_string(),
        };
        self.sent
            .lock()
            .map_err(|_| anyhow!("sent log poisoned"))?
            .push(message.clone());
        // No subscribers is fine
        let _ = self.events.send(message);
        Ok(())
    }
}
