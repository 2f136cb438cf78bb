//! Decoding of the `StreamGenerate` answer payload.
//!
//! The payload has no schema; meaning is carried purely by position.
//! Every access goes through `element` / `as_array` / `as_str`, which
//! fail with the stage they were called for.

use serde_json::Value;

use crate::{Answer, BardError, ParseStage};

/// Zero-based line of the response body holding the answer.
const ANSWER_LINE: usize = 3;
const MIN_ELEMENTS: usize = 5;

/// The answer line of a raw response body.
///
/// Error pages, captcha interstitials, and empty streams all end up here
/// as [`BardError::NoAnswer`].
pub fn answer_line(body: &str) -> Result<&str, BardError> {
    match body.split('\n').nth(ANSWER_LINE) {
        Some(line) if !line.is_empty() => Ok(line),
        _ => Err(BardError::NoAnswer),
    }
}

/// Decode an answer line into ids and content.
pub fn parse_answer(line: &str) -> Result<Answer, BardError> {
    let root: Value = serde_json::from_str(line)
        .map_err(|e| BardError::parse(ParseStage::Root, e.to_string()))?;
    let root = as_array(&root, ParseStage::Root)?;
    let child = as_array(element(root, 0, ParseStage::Root)?, ParseStage::Root)?;
    let payload = as_str(element(child, 2, ParseStage::Root)?, ParseStage::Root)?;
    if payload.is_empty() {
        return Err(BardError::parse(ParseStage::Root, "empty payload string"));
    }

    let inner: Value = serde_json::from_str(payload)
        .map_err(|e| BardError::parse(ParseStage::Inner, e.to_string()))?;
    let elements = as_array(&inner, ParseStage::Elements)?;
    if elements.len() < MIN_ELEMENTS {
        return Err(BardError::parse(
            ParseStage::Elements,
            format!("expected at least {MIN_ELEMENTS} elements, found {}", elements.len()),
        ));
    }

    let id = as_array(&elements[1], ParseStage::Id)?;
    let conversation_id = as_str(element(id, 0, ParseStage::Id)?, ParseStage::Id)?;
    let response_id = as_str(element(id, 1, ParseStage::Id)?, ParseStage::Id)?;

    let content_elements = as_array(&elements[4], ParseStage::ContentElements)?;
    let answer_elements = as_array(
        element(content_elements, 2, ParseStage::ContentElements)?,
        ParseStage::AnswerElements,
    )?;
    let choice_id = as_str(
        element(answer_elements, 0, ParseStage::AnswerElements)?,
        ParseStage::AnswerElements,
    )?;
    let contents = as_array(
        element(answer_elements, 1, ParseStage::AnswerElements)?,
        ParseStage::Content,
    )?;
    let content = as_str(element(contents, 0, ParseStage::Content)?, ParseStage::Content)?;

    Ok(Answer {
        conversation_id: conversation_id.to_string(),
        response_id: response_id.to_string(),
        choice_id: choice_id.to_string(),
        content: content.to_string(),
    })
}

fn element(items: &[Value], index: usize, stage: ParseStage) -> Result<&Value, BardError> {
    items.get(index).ok_or_else(|| {
        BardError::parse(
            stage,
            format!("missing index {index} (length {})", items.len()),
        )
    })
}

fn as_array(value: &Value, stage: ParseStage) -> Result<&[Value], BardError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| BardError::parse(stage, format!("expected array, found {}", kind(value))))
}

fn as_str(value: &Value, stage: ParseStage) -> Result<&str, BardError> {
    value
        .as_str()
        .ok_or_else(|| BardError::parse(stage, format!("expected string, found {}", kind(value))))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
