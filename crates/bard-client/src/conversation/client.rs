//! Conversation client: prompt in, answer out, cursor threaded between calls.

use tracing::{debug, warn};

use crate::config::BardConfig;
use crate::session::{RandomRequestIds, RequestIdSource, Session};
use crate::{Answer, BardError, ConversationCursor};

use super::envelope::{AskRequest, STREAM_GENERATE_PATH};
use super::response::{answer_line, parse_answer};

/// Multi-turn Bard conversation.
///
/// `ask` takes `&mut self`, so one client serves one conversation at a
/// time. Share it between tasks behind a mutex.
#[derive(Debug)]
pub struct BardClient {
    session: Session,
    cursor: ConversationCursor,
    locale: String,
}

impl BardClient {
    /// Connect a new session and start with an empty cursor.
    pub async fn connect(config: &BardConfig) -> Result<Self, BardError> {
        Self::connect_with_ids(config, RandomRequestIds::from_entropy()).await
    }

    pub async fn connect_with_ids(
        config: &BardConfig,
        ids: impl RequestIdSource,
    ) -> Result<Self, BardError> {
        let session = Session::connect_with_ids(config, ids).await?;
        Ok(Self::from_session(session, config.locale.clone()))
    }

    pub fn from_session(session: Session, locale: impl Into<String>) -> Self {
        Self {
            session,
            cursor: ConversationCursor::default(),
            locale: locale.into(),
        }
    }

    pub fn cursor(&self) -> &ConversationCursor {
        &self.cursor
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Forget the cursor so the next `ask` opens a new conversation.
    pub fn reset_conversation(&mut self) {
        debug!(conversation_id = %self.cursor.conversation_id, "conversation reset");
        self.cursor = ConversationCursor::default();
    }

    /// The request `ask(prompt)` would send right now.
    pub fn ask_request(&self, prompt: &str) -> Result<AskRequest, BardError> {
        AskRequest::new(
            prompt,
            &self.locale,
            &self.cursor,
            self.session.token(),
            self.session.request_id(),
        )
    }

    /// Send `prompt` and advance the cursor to the returned answer.
    ///
    /// On any error the cursor is left as it was.
    pub async fn ask(&mut self, prompt: &str) -> Result<Answer, BardError> {
        let request = self.ask_request(prompt)?;
        let url = self.session.url(STREAM_GENERATE_PATH);

        debug!(
            prompt_len = prompt.len(),
            resuming = !self.cursor.is_empty(),
            "ask"
        );

        let body = self
            .session
            .post_form(&url, &request.query, &request.form)
            .await?;

        let answer = answer_line(&body)
            .and_then(parse_answer)
            .inspect_err(|e| warn!(error = %e, body_len = body.len(), "unusable answer"))?;

        self.cursor = answer.cursor();
        debug!(
            conversation_id = %answer.conversation_id,
            response_id = %answer.response_id,
            choice_id = %answer.choice_id,
            "cursor advanced"
        );
        Ok(answer)
    }
}
