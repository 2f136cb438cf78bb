//! Session-based client for the Bard web chat endpoint.
//!
//! Talks to the same private endpoints the Bard web UI uses:
//! - Cookie-authenticated session with `SNlM0e` token bootstrap
//! - Form-encoded `StreamGenerate` requests carrying a nested-array envelope
//! - Positional parsing of the JSON-in-JSON answer payload
//! - A conversation cursor threaded across `ask` calls

pub mod config;
pub mod conversation;
pub mod session;

use std::fmt;

pub use config::{BardConfig, Credentials};
pub use conversation::{AskRequest, BardClient};
pub use session::{FixedRequestId, RandomRequestIds, RequestIdSource, Session};

/// Position in a multi-turn dialogue: `(conversation_id, response_id, choice_id)`.
///
/// Empty at the start of a conversation; replaced after every successful answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversationCursor {
    pub conversation_id: String,
    pub response_id: String,
    pub choice_id: String,
}

impl ConversationCursor {
    pub fn new(
        conversation_id: impl Into<String>,
        response_id: impl Into<String>,
        choice_id: impl Into<String>,
    ) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            response_id: response_id.into(),
            choice_id: choice_id.into(),
        }
    }

    /// True before the first answer of a conversation.
    pub fn is_empty(&self) -> bool {
        self.conversation_id.is_empty() && self.response_id.is_empty() && self.choice_id.is_empty()
    }
}

/// A single reply, together with the cursor needed to continue from it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub conversation_id: String,
    pub response_id: String,
    pub choice_id: String,
    pub content: String,
}

impl Answer {
    pub fn cursor(&self) -> ConversationCursor {
        ConversationCursor::new(
            self.conversation_id.clone(),
            self.response_id.clone(),
            self.choice_id.clone(),
        )
    }
}

/// Which step of answer decoding rejected the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// Outer array on the answer line and its first entry.
    Root,
    /// JSON text embedded in the first entry.
    Inner,
    /// Top-level elements of the embedded array.
    Elements,
    /// `[conversation_id, response_id]` pair.
    Id,
    /// Content wrapper at element 4.
    ContentElements,
    /// `[choice_id, [content...]]` pair.
    AnswerElements,
    /// The content strings themselves.
    Content,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Inner => "inner payload",
            Self::Elements => "elements",
            Self::Id => "id",
            Self::ContentElements => "content elements",
            Self::AnswerElements => "answer elements",
            Self::Content => "content",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BardError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("invalid base url {url}: {detail}")]
    InvalidBaseUrl { url: String, detail: String },
    #[error("invalid value for header {0}")]
    InvalidHeader(&'static str),
    #[error("failed to get SNlM0e token from bootstrap page")]
    TokenAcquisition,
    #[error("failed to fetch {method} {url}: HTTP {status}")]
    Fetch {
        status: u16,
        method: &'static str,
        url: String,
    },
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("no answer in response stream")]
    NoAnswer,
    #[error("failed to parse answer at {stage}: {detail}")]
    Parse { stage: ParseStage, detail: String },
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl BardError {
    pub(crate) fn parse(stage: ParseStage, detail: impl Into<String>) -> Self {
        Self::Parse {
            stage,
            detail: detail.into(),
        }
    }

    pub fn is_no_answer(&self) -> bool {
        matches!(self, Self::NoAnswer)
    }

    pub fn is_token_failure(&self) -> bool {
        matches!(self, Self::TokenAcquisition)
    }

    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// HTTP status of a rejected request, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn parse_stage(&self) -> Option<ParseStage> {
        match self {
            Self::Parse { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
