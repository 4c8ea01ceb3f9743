//! API and Database Models
//!
//! Core data structures shared by the database layer (`sqlx` mappings)
//! and the HTTP surface (`serde` + `utoipa` schemas). Wire names keep
//! the camelCase fields and upper-case enum values of the original
//! client contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::InterviewError;

/// Lifecycle state of an interview session. `Completed` is terminal:
/// a completed session accepts no further turns or report generation.
#[derive(sqlx::Type, Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq)]
#[sqlx(type_name = "session_status", rename_all = "lowercase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// Author of one stored interview turn.
#[derive(sqlx::Type, Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq)]
#[sqlx(type_name = "message_sender", rename_all = "lowercase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageSender {
    User,
    Ai,
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSender::User => write!(f, "user"),
            MessageSender::Ai => write!(f, "ai"),
        }
    }
}

/// One end-to-end interview instance.
#[derive(Serialize, Deserialize, ToSchema, FromRow, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[schema(value_type = String, format = Uuid)]
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    /// Set exactly when the session transitions to `Completed`.
    pub end_time: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: SessionStatus,
}

impl Session {
    /// Guards turn submission and report generation: both are legal only
    /// while the session is `Active`.
    pub fn ensure_active(&self) -> Result<(), InterviewError> {
        match self.status {
            SessionStatus::Active => Ok(()),
            SessionStatus::Completed => Err(InterviewError::InvalidState(self.id)),
        }
    }
}

/// One turn of the interview, authored by the user or the backend.
#[derive(Serialize, Deserialize, ToSchema, FromRow, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    #[schema(value_type = String, format = Uuid)]
    pub session_id: Uuid,
    #[schema(value_type = String, example = "AI")]
    pub sender: MessageSender,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Per-answer feedback split off an AI reply; only ever present on
    /// AI turns that answer a preceding user turn.
    pub evaluation: Option<String>,
}

/// The finalized performance report for one session. Derived per
/// request, never persisted.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[schema(example = "8")]
    pub overall_score: String,
    pub strengths: String,
    pub weaknesses: String,
    pub suggestions_for_improvement: String,
}

impl From<intervue_core::report::Report> for ReportResponse {
    fn from(report: intervue_core::report::Report) -> Self {
        Self {
            overall_score: report.overall_score,
            strengths: report.strengths,
            weaknesses: report.weaknesses,
            suggestions_for_improvement: report.suggestions_for_improvement,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn active_session() -> Session {
        Session {
            id: Uuid::new_v4(),
            start_time: Utc::now(),
            end_time: None,
            user_id: Some("candidate-7".to_string()),
            status: SessionStatus::Active,
        }
    }

    #[test]
    fn test_session_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );

        let parsed: SessionStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
        assert_eq!(parsed, SessionStatus::Completed);
    }

    #[test]
    fn test_message_sender_wire_values() {
        assert_eq!(
            serde_json::to_string(&MessageSender::User).unwrap(),
            "\"USER\""
        );
        assert_eq!(serde_json::to_string(&MessageSender::Ai).unwrap(), "\"AI\"");

        let parsed: MessageSender = serde_json::from_str("\"AI\"").unwrap();
        assert_eq!(parsed, MessageSender::Ai);
    }

    #[test]
    fn test_message_sender_display() {
        assert_eq!(format!("{}", MessageSender::User), "user");
        assert_eq!(format!("{}", MessageSender::Ai), "ai");
    }

    #[test]
    fn test_invalid_enum_deserialization() {
        let result: Result<SessionStatus, _> = serde_json::from_str("\"PAUSED\"");
        assert!(result.is_err());

        let result: Result<MessageSender, _> = serde_json::from_str("\"SYSTEM\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = active_session();
        let json = serde_json::to_string(&session).unwrap();

        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"endTime\":null"));
        assert!(json.contains("\"userId\":\"candidate-7\""));
        assert!(json.contains("\"status\":\"ACTIVE\""));
    }

    #[test]
    fn test_session_round_trip() {
        let start = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let session = Session {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            start_time: start,
            end_time: Some(start + chrono::Duration::minutes(25)),
            user_id: None,
            status: SessionStatus::Completed,
        };

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, session.id);
        assert_eq!(parsed.start_time, session.start_time);
        assert_eq!(parsed.end_time, session.end_time);
        assert_eq!(parsed.user_id, None);
        assert_eq!(parsed.status, SessionStatus::Completed);
    }

    #[test]
    fn test_completed_iff_end_time_set() {
        // The invariant the service maintains: end_time is present
        // exactly on completed sessions.
        let active = active_session();
        assert!(active.end_time.is_none());
        assert_eq!(active.status, SessionStatus::Active);

        let completed = Session {
            end_time: Some(Utc::now()),
            status: SessionStatus::Completed,
            ..active
        };
        assert!(completed.end_time.is_some());
        assert_eq!(completed.status, SessionStatus::Completed);
    }

    #[test]
    fn test_ensure_active_accepts_active_session() {
        assert!(active_session().ensure_active().is_ok());
    }

    #[test]
    fn test_ensure_active_rejects_completed_session() {
        let completed = Session {
            end_time: Some(Utc::now()),
            status: SessionStatus::Completed,
            ..active_session()
        };

        match completed.ensure_active() {
            Err(InterviewError::InvalidState(id)) => assert_eq!(id, completed.id),
            other => panic!("Expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn test_chat_message_serializes_camel_case() {
        let message = ChatMessage {
            id: 42,
            session_id: Uuid::new_v4(),
            sender: MessageSender::Ai,
            message: "Next question: what does VLOOKUP do?".to_string(),
            timestamp: Utc::now(),
            evaluation: Some("Correct (3/3).".to_string()),
        };

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"sessionId\""));
        assert!(json.contains("\"sender\":\"AI\""));
        assert!(json.contains("\"evaluation\":\"Correct (3/3).\""));

        let parsed: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, 42);
        assert_eq!(parsed.evaluation.as_deref(), Some("Correct (3/3)."));
    }

    #[test]
    fn test_report_response_wire_contract() {
        let report = ReportResponse {
            overall_score: "N/A".to_string(),
            strengths: "- strength".to_string(),
            weaknesses: "Not available.".to_string(),
            suggestions_for_improvement: "Not available.".to_string(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"overallScore\":\"N/A\""));
        assert!(json.contains("\"suggestionsForImprovement\":\"Not available.\""));
    }

    #[test]
    fn test_report_response_from_core_report() {
        let report = intervue_core::report::Report {
            overall_score: "8".to_string(),
            strengths: "- a".to_string(),
            weaknesses: "- b".to_string(),
            suggestions_for_improvement: "- c".to_string(),
        };

        let response = ReportResponse::from(report);
        assert_eq!(response.overall_score, "8");
        assert_eq!(response.strengths, "- a");
        assert_eq!(response.weaknesses, "- b");
        assert_eq!(response.suggestions_for_improvement, "- c");
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "Session not found".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"message":"Session not found"}"#);
    }
}
