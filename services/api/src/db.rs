//! Data Access Layer
//!
//! All PostgreSQL access for the interview service, backed by `sqlx`
//! connection pooling and embedded migrations. Messages are append-only;
//! sessions are mutated in exactly one place, `complete_session`.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ChatMessage, MessageSender, Session, SessionStatus};

/// A wrapper around the `PgPool` to provide a clear data access interface.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Creates a new `Db` instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs all pending `sqlx` migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Creates a session together with its opening AI message in a
    /// single transaction, so a half-opened interview never exists.
    pub async fn create_session(
        &self,
        user_id: Option<&str>,
        opening_message: &str,
        evaluation: Option<&str>,
    ) -> Result<Session> {
        let mut tx = self.pool.begin().await?;

        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id)
            VALUES ($1)
            RETURNING id, start_time, end_time, user_id, status
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO chat_messages (session_id, sender, message, evaluation)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.id)
        .bind(MessageSender::Ai)
        .bind(opening_message)
        .bind(evaluation)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(session)
    }

    /// Retrieves a single session by its ID.
    pub async fn get_session(&self, session_id: Uuid) -> Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT id, start_time, end_time, user_id, status FROM sessions WHERE id = $1",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    /// Retrieves the full message log for a session in chronological
    /// order. Ties on `timestamp` (rows written in one transaction) are
    /// broken by insertion id, keeping the log totally ordered.
    pub async fn get_session_messages(&self, session_id: Uuid) -> Result<Vec<ChatMessage>> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT id, session_id, sender, message, "timestamp", evaluation
            FROM chat_messages
            WHERE session_id = $1
            ORDER BY "timestamp" ASC, id ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    /// Appends one user turn and the AI reply it produced in a single
    /// transaction, returning the stored AI message.
    pub async fn record_exchange(
        &self,
        session_id: Uuid,
        user_text: &str,
        ai_text: &str,
        evaluation: Option<&str>,
    ) -> Result<ChatMessage> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO chat_messages (session_id, sender, message) VALUES ($1, $2, $3)")
            .bind(session_id)
            .bind(MessageSender::User)
            .bind(user_text)
            .execute(&mut *tx)
            .await?;

        let ai_message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (session_id, sender, message, evaluation)
            VALUES ($1, $2, $3, $4)
            RETURNING id, session_id, sender, message, "timestamp", evaluation
            "#,
        )
        .bind(session_id)
        .bind(MessageSender::Ai)
        .bind(ai_text)
        .bind(evaluation)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ai_message)
    }

    /// Marks a session completed and stamps its end time.
    pub async fn complete_session(&self, session_id: Uuid) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            UPDATE sessions
            SET status = $1, end_time = now()
            WHERE id = $2
            RETURNING id, start_time, end_time, user_id, status
            "#,
        )
        .bind(SessionStatus::Completed)
        .bind(session_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(session)
    }
}
