//! `StreamGenerate` request envelope.

use serde_json::{json, Value};

use crate::{BardError, ConversationCursor};

/// Frontend build label sent as `bl`.
pub const BACKEND_BUILD: &str = "boq_assistant-bard-web-server_20231031.09_p4";
/// `rt` value selecting chunked line output.
const STREAM_MODE: &str = "c";

pub const STREAM_GENERATE_PATH: &str =
    "/_/BardChatUi/data/assistant.lamda.BardFrontendService/StreamGenerate";

/// Nested array the frontend expects: prompt, locale, cursor, then fixed flags.
pub fn build_envelope(prompt: &str, locale: &str, cursor: &ConversationCursor) -> Value {
    json!([
        [prompt, 0, null, [], null, null, 0],
        [locale],
        [
            cursor.conversation_id,
            cursor.response_id,
            cursor.choice_id,
            null,
            null,
            []
        ],
        null,
        null,
        null,
        [0],
        0,
        [],
        [],
        1,
        0
    ])
}

/// Serialize the envelope, wrap it as `[null, "<envelope>"]`, serialize again.
pub fn encode_envelope(envelope: &Value) -> Result<String, BardError> {
    let inner = serde_json::to_string(envelope).map_err(BardError::Encode)?;
    serde_json::to_string(&json!([null, inner])).map_err(BardError::Encode)
}

/// Query and form fields for one `ask`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub query: Vec<(&'static str, String)>,
    pub form: Vec<(&'static str, String)>,
}

impl AskRequest {
    pub fn new(
        prompt: &str,
        locale: &str,
        cursor: &ConversationCursor,
        token: &str,
        request_id: u32,
    ) -> Result<Self, BardError> {
        let f_req = encode_envelope(&build_envelope(prompt, locale, cursor))?;
        Ok(Self {
            query: vec![
                ("bl", BACKEND_BUILD.to_string()),
                ("_reqid", request_id.to_string()),
                ("rt", STREAM_MODE.to_string()),
            ],
            form: vec![("f.req", f_req), ("at", token.to_string())],
        })
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        lookup(&self.query, key)
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        lookup(&self.form, key)
    }

    /// Decode `f.req` back into the envelope it carries.
    pub fn envelope(&self) -> Option<Value> {
        let outer: Value = serde_json::from_str(self.form_value("f.req")?).ok()?;
        serde_json::from_str(outer.get(1)?.as_str()?).ok()
    }
}

fn lookup<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}
