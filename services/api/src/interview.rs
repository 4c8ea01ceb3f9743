//! Interview Orchestration
//!
//! Composes the session state machine, turn-history assembly, the
//! generative backend and persistence into the three operations exposed
//! over HTTP. The orchestrator is stateless between calls: history is
//! rebuilt from storage on every backend invocation, and the backend is
//! always called before anything is written, so a failed call commits
//! nothing. Per-session serialization is the caller's contract; no
//! locking happens here.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use intervue_core::{
    llm_client::{LlmClient, Turn, TurnRole},
    report::{Report, build_report_prompt, parse_report},
    response::split_reply,
};

use crate::{
    db::Db,
    error::InterviewError,
    models::{ChatMessage, MessageSender, Session},
};

/// Fixed text of the synthetic user turn that opens every interview.
pub const OPENING_TURN: &str = "Start the interview.";

/// Maps the stored message log onto the role-tagged turn sequence the
/// backend request contract expects.
pub(crate) fn assemble_history(messages: &[ChatMessage]) -> Vec<Turn> {
    messages
        .iter()
        .map(|message| Turn {
            role: match message.sender {
                MessageSender::User => TurnRole::User,
                MessageSender::Ai => TurnRole::Model,
            },
            text: message.message.clone(),
        })
        .collect()
}

/// The interview service exposed to the HTTP layer.
#[derive(Clone)]
pub struct InterviewService {
    db: Arc<Db>,
    llm: Arc<dyn LlmClient>,
    system_prompt: Arc<String>,
    report_prompt: Arc<String>,
}

impl InterviewService {
    pub fn new(
        db: Arc<Db>,
        llm: Arc<dyn LlmClient>,
        system_prompt: Arc<String>,
        report_prompt: Arc<String>,
    ) -> Self {
        Self {
            db,
            llm,
            system_prompt,
            report_prompt,
        }
    }

    /// Creates a new active session and persists its opening AI message.
    pub async fn start_interview(
        &self,
        user_id: Option<&str>,
    ) -> Result<Session, InterviewError> {
        let opening = vec![Turn::user(OPENING_TURN)];
        let raw = self
            .llm
            .generate(Some(self.system_prompt.as_str()), &opening)
            .await?;

        // A well-behaved backend emits no evaluation line on the opener;
        // the splitter returns the reply verbatim in that case.
        let split = split_reply(&raw);
        let session = self
            .db
            .create_session(user_id, &split.body, split.evaluation.as_deref())
            .await?;

        info!(session_id = %session.id, "Interview session started");
        Ok(session)
    }

    /// Submits one user turn and returns the stored AI reply.
    pub async fn send_user_message(
        &self,
        session_id: Uuid,
        text: &str,
    ) -> Result<ChatMessage, InterviewError> {
        let session = self.require_session(session_id).await?;
        session.ensure_active()?;

        let stored = self.db.get_session_messages(session_id).await?;
        let mut history = assemble_history(&stored);
        history.push(Turn::user(text));

        let raw = self
            .llm
            .generate(Some(self.system_prompt.as_str()), &history)
            .await?;
        let split = split_reply(&raw);

        let ai_message = self
            .db
            .record_exchange(session_id, text, &split.body, split.evaluation.as_deref())
            .await?;

        info!(
            session_id = %session_id,
            has_evaluation = ai_message.evaluation.is_some(),
            "Recorded interview exchange"
        );
        Ok(ai_message)
    }

    /// Produces the final report and completes the session.
    pub async fn generate_report(&self, session_id: Uuid) -> Result<Report, InterviewError> {
        let session = self.require_session(session_id).await?;
        session.ensure_active()?;

        let stored = self.db.get_session_messages(session_id).await?;
        let history = assemble_history(&stored);
        let prompt = build_report_prompt(&self.report_prompt, &history);

        // The full history is embedded in the prompt text, so this call
        // carries a single user turn and no system instruction.
        let raw = self.llm.generate(None, &[Turn::user(prompt)]).await?;
        let report = parse_report(&raw);

        let completed = self.db.complete_session(session_id).await?;
        info!(
            session_id = %completed.id,
            overall_score = %report.overall_score,
            "Interview completed, report generated"
        );
        Ok(report)
    }

    async fn require_session(&self, session_id: Uuid) -> Result<Session, InterviewError> {
        self.db
            .get_session(session_id)
            .await?
            .ok_or(InterviewError::NotFound(session_id))
    }
}
