//! Prompt/answer exchange on top of a [`Session`](crate::Session).
//!
//! `BardClient::ask` encodes the prompt and current cursor into the
//! `StreamGenerate` envelope, posts it, decodes the positional answer
//! payload, and advances the cursor only when decoding succeeds.

mod client;
mod envelope;
mod response;


pub use client::BardClient;
pub use envelope::{
    build_envelope, encode_envelope, AskRequest, BACKEND_BUILD, STREAM_GENERATE_PATH,
};
pub use response::{answer_line, parse_answer};
