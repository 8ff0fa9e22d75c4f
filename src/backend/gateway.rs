//! HTTP client for the Voltz backend
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! Reads degrade to `None` or an empty list on any failure (network, non-2xx status,
//! malformed body) and writes only log their failures. Nothing here returns an error
//! to the caller once the client is built.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::models::{
    ActivityLog, AgentStats, AgentStatsEnvelope, Event, EventEnvelope, EventsEnvelope,
    HealthStatus, Match, MatchesEnvelope, Profile, ProfileEnvelope,
};
use super::BackendApi;

#[derive(Clone)]
pub struct BackendGateway {
    client: reqwest::Client,
    base_url: String,
}

impl BackendGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(BackendGateway {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {path}");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// Parsed `/health` body, `None` if the backend is unreachable
    pub async fn health(&self) -> Option<HealthStatus> {
        match self.get_json::<HealthStatus>("/health").await {
            Ok(status) => Some(status),
            Err(e) => {
                warn!("Backend health check failed: {e}");
                None
            }
        }
    }

    /// Agent message counters for the last 24 hours
    pub async fn get_agent_stats(&self) -> Option<AgentStats> {
        match self
            .get_json::<AgentStatsEnvelope>("/api/v1/agent/stats")
            .await
        {
            Ok(envelope) => Some(envelope.stats),
            Err(e) => {
                error!("Failed to fetch agent stats: {e}");
                None
            }
        }
    }

    /// Startup probe; logs the outcome
    pub async fn connect(&self) -> bool {
        let connected = self.test_connection().await;
        if connected {
            info!("✅ Connected to Voltz backend at {}", self.base_url);
        } else {
            warn!("⚠️  Could not connect to Voltz backend at {}", self.base_url);
        }
        connected
    }
}

#[async_trait]
impl BackendApi for BackendGateway {
    async fn test_connection(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Backend connection test failed: {e}");
                false
            }
        }
    }

    async fn get_user_profile(&self, address: &str) -> Option<Profile> {
        match self
            .get_json::<ProfileEnvelope>(&format!("/api/v1/profiles/{address}"))
            .await
        {
            Ok(envelope) => envelope.profile,
            Err(e) => {
                error!("Failed to fetch user profile: {e}");
                None
            }
        }
    }

    async fn get_user_matches(&self, address: &str) -> Vec<Match> {
        match self
            .get_json::<MatchesEnvelope>(&format!("/api/v1/matches/user/{address}"))
            .await
        {
            Ok(envelope) => envelope.matches,
            Err(e) => {
                error!("Failed to fetch user matches: {e}");
                Vec::new()
            }
        }
    }

    async fn get_user_events(&self, address: &str) -> Vec<Event> {
        match self
            .get_json::<EventsEnvelope>(&format!("/api/v1/events/user/{address}"))
            .await
        {
            Ok(envelope) => envelope.events,
            Err(e) => {
                error!("Failed to fetch user events: {e}");
                Vec::new()
            }
        }
    }

    async fn get_event_details(&self, event_id: &str) -> Option<Event> {
        match self
            .get_json::<EventEnvelope>(&format!("/api/v1/events/{event_id}"))
            .await
        {
            Ok(envelope) => envelope.event,
            Err(e) => {
                error!("Failed to fetch event details: {e}");
                None
            }
        }
    }

    async fn log_message_activity(&self, activity: ActivityLog) {
        let result = self
            .client
            .post(self.url("/api/v1/agent/log"))
            .json(&activity)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        if let Err(e) = result {
            error!("Failed to log message activity: {e}");
        }
    }
}
