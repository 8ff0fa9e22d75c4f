//! Backend API payloads
//!
//! Every field the agent reads is optional on the wire. Missing or null lists decode
//! as empty so "no data" and "zero items" are handled by the same emptiness check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /health`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Option<String>,
    pub uptime: Option<f64>,
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub goals: Vec<String>,
    pub reputation: Option<f64>,
    pub events_attended: Option<u64>,
    pub connections_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub name: Option<String>,
    /// 0.0 - 1.0
    pub score: Option<f64>,
    pub title: Option<String>,
    pub company: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub common_interests: Vec<String>,
    pub conversation_starter: Option<String>,
}

impl Match {
    /// Score as a rounded percentage
    pub fn score_percent(&self) -> i64 {
        (self.score.unwrap_or(0.0) * 100.0).round() as i64
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub attendee_count: Option<u64>,
    pub match_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchesEnvelope {
    #[serde(default, deserialize_with = "nullable_list")]
    pub matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventsEnvelope {
    #[serde(default, deserialize_with = "nullable_list")]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventEnvelope {
    pub event: Option<Event>,
}

/// `GET /api/v1/agent/stats`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    #[serde(default, rename = "messagesLast24h")]
    pub messages_last_24h: u64,
    #[serde(default, rename = "uniqueUsersLast24h")]
    pub unique_users_last_24h: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AgentStatsEnvelope {
    pub stats: AgentStats,
}

/// Which reply the agent sent, as recorded by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Welcome,
    Help,
    Profile,
    Matches,
    Events,
    Fallback,
}

/// `POST /api/v1/agent/log` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub from_address: String,
    pub to_address: String,
    pub message_type: MessageType,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    pub fn now(from_address: &str, to_address: &str, message_type: MessageType) -> Self {
        ActivityLog {
            from_address: from_address.to_string(),
            to_address: to_address.to_string(),
            message_type,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_missing_and_null_fields() {
        let envelope: ProfileEnvelope =
            serde_json::from_str(r#"{"profile": {"name": "Ada", "interests": null}}"#).unwrap();
        let profile = envelope.profile.unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert!(profile.interests.is_empty());
        assert!(profile.goals.is_empty());
        assert_eq!(profile.reputation, None);

        let envelope: ProfileEnvelope = serde_json::from_str(r#"{"profile": null}"#).unwrap();
        assert!(envelope.profile.is_none());
    }

    #[test]
    fn test_missing_list_field_is_empty() {
        let matches: MatchesEnvelope = serde_json::from_str("{}").unwrap();
        assert!(matches.matches.is_empty());

        let events: EventsEnvelope = serde_json::from_str(r#"{"events": null}"#).unwrap();
        assert!(events.events.is_empty());
    }

    #[test]
    fn test_event_start_date_parses() {
        let event: Event = serde_json::from_str(
            r#"{"name": "ETH Denver", "startDate": "2026-02-27T15:30:00.000Z", "attendeeCount": 120}"#,
        )
        .unwrap();
        assert_eq!(event.attendee_count, Some(120));
        assert_eq!(
            event.start_date.map(|d| d.to_rfc3339()),
            Some("2026-02-27T15:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_score_percent_rounds() {
        let m = Match {
            score: Some(0.876),
            ..Default::default()
        };
        assert_eq!(m.score_percent(), 88);
        assert_eq!(Match::default().score_percent(), 0);
    }

    #[test]
    fn test_activity_log_wire_format() {
        let log = ActivityLog::now("0xagent", "0xuser", MessageType::Matches);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["fromAddress"], "0xagent");
        assert_eq!(json["toAddress"], "0xuser");
        assert_eq!(json["messageType"], "matches");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_agent_stats_field_names() {
        let envelope: AgentStatsEnvelope = serde_json::from_str(
            r#"{"stats": {"messagesLast24h": 42, "uniqueUsersLast24h": 7}}"#,
        )
        .unwrap();
        assert_eq!(envelope.stats.messages_last_24h, 42);
        assert_eq!(envelope.stats.unique_users_last_24h, 7);
    }
}
