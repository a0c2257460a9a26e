//! Chat checks
//!
//! `chat-send`, `chat-ping`, `chat-multi-model` and `chat-single-model`
//! capture the returned session id; the session checks consume it.

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::{opaque_id, require_array, require_fields, require_object, text_len, typed};
use careergpt_probe_common::protocol::ChatSendRequest;
use careergpt_probe_common::types::{value_text, ChatSendResponse, OpaqueId};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

const CHAT_MESSAGE: &str = "What are the key skills for a software engineer?";
const PING_MESSAGE: &str = "Hi";
const MULTI_MODEL_MESSAGE: &str = "Answer in 1 sentence: what is AI?";
const SINGLE_MODEL_MESSAGE: &str = "Answer in 1 sentence: what is machine learning?";

const SEND_FIELDS: [&str; 3] = ["sessionId", "response", "models"];
const SINGLE_MODEL_FIELDS: [&str; 7] = [
    "sessionId",
    "response",
    "models",
    "failedModels",
    "synthesized",
    "successCount",
    "totalModels",
];
const MULTI_MODEL_FIELDS: [&str; 8] = [
    "sessionId",
    "response",
    "models",
    "failedModels",
    "synthesized",
    "successCount",
    "totalModels",
    "individualResponses",
];
/// Keys every per-model entry must carry
const MODEL_ENTRY_FIELDS: [&str; 3] = ["name", "color", "duration"];

/// POST /chat/send with a plain question
pub async fn check_send(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let request = ChatSendRequest::new(CHAT_MESSAGE);
    let response = ctx.client.post_json("/chat/send", &request).await?;
    let body = response.expect_ok("Chat endpoint")?;
    require_fields(&body, &SEND_FIELDS)?;

    let chat: ChatSendResponse = typed(&body)?;
    ctx.captured.chat_session_id = Some(chat.session_id.clone());

    Ok(format!(
        "Response in {:.1}s, Models: {:?}, Synthesized: {}, SessionID: {}",
        response.elapsed_secs(),
        chat.model_names(),
        value_text(&chat.synthesized),
        chat.session_id
    ))
}

/// POST /chat/send with a one-word message; reports status and raw fields
pub async fn check_ping(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let request = ChatSendRequest::new(PING_MESSAGE);
    let response = ctx.client.post_json("/chat/send", &request).await?;
    let body = response.expect_ok("Chat endpoint")?;

    let session_id = opaque_id(&body, "sessionId").ok_or_else(|| {
        ProbeError::MissingFields(vec!["sessionId".to_string()])
    })?;
    ctx.captured.chat_session_id = Some(session_id.clone());

    Ok(format!(
        "Status Code: {}, Session ID: {}, Models: {}, Synthesized: {}",
        response.status.as_u16(),
        session_id,
        body.get("models").unwrap_or(&Value::Null),
        body.get("synthesized").unwrap_or(&Value::Null)
    ))
}

/// POST /chat/send across the configured model selection
pub async fn check_multi_model(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let selection = ctx.config.multi_model_selection.clone();
    let request = ChatSendRequest::new(MULTI_MODEL_MESSAGE).with_models(selection.clone());
    let response = ctx.client.post_json("/chat/send", &request).await?;
    let body = response.expect_ok("Chat endpoint")?;
    require_fields(&body, &MULTI_MODEL_FIELDS)?;

    let session_id = opaque_id(&body, "sessionId")
        .ok_or_else(|| ProbeError::Unexpected("sessionId is not a string or number".to_string()))?;
    ctx.captured.chat_session_id = Some(session_id);

    let total = body.get("totalModels").and_then(Value::as_u64).unwrap_or(0);
    if total != selection.len() as u64 {
        return Err(ProbeError::Unexpected(format!(
            "Expected totalModels={}, got {}",
            selection.len(),
            total
        )));
    }

    let success = body.get("successCount").and_then(Value::as_u64).unwrap_or(0);
    if success < 1 {
        return Err(ProbeError::Unexpected(format!(
            "No successful model responses (successCount={success})"
        )));
    }

    for entry in require_array(&body, "models")? {
        if require_fields(entry, &MODEL_ENTRY_FIELDS).is_err() {
            return Err(ProbeError::Unexpected(format!(
                "Model missing required fields: {entry}"
            )));
        }
    }
    for entry in require_array(&body, "individualResponses")? {
        if require_fields(entry, &MODEL_ENTRY_FIELDS).is_err() {
            return Err(ProbeError::Unexpected(format!(
                "Individual response missing fields: {entry}"
            )));
        }
    }

    let chat: ChatSendResponse = typed(&body)?;
    Ok(format!(
        "Response in {:.1}s | Success: {}/{} | Models: {:?} | Failed: {:?} | Synthesized: {} | SessionID: {}",
        response.elapsed_secs(),
        success,
        total,
        chat.model_names(),
        chat.failed_names(),
        value_text(&chat.synthesized),
        chat.session_id
    ))
}

/// POST /chat/send with exactly one model; the backend must not synthesize
pub async fn check_single_model(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let model = ctx.config.single_model.clone();
    let request = ChatSendRequest::new(SINGLE_MODEL_MESSAGE).with_models(vec![model.clone()]);
    let response = ctx.client.post_json("/chat/send", &request).await?;
    let body = response.expect_ok("Chat endpoint")?;
    require_fields(&body, &SINGLE_MODEL_FIELDS)?;

    let chat: ChatSendResponse = typed(&body)?;
    let total = chat.total_models.as_u64().unwrap_or(0);
    let success = chat.success_count.as_u64().unwrap_or(0);

    if total != 1 {
        return Err(ProbeError::Unexpected(format!(
            "Expected totalModels=1, got {total}"
        )));
    }
    if success != 1 {
        return Err(ProbeError::Unexpected(format!(
            "Expected successCount=1, got {success}"
        )));
    }
    if body.get("synthesized") != Some(&Value::Bool(false)) {
        return Err(ProbeError::Unexpected(format!(
            "Expected synthesized=false for single model, got {}",
            body.get("synthesized").unwrap_or(&Value::Null)
        )));
    }
    let names = chat.model_names();
    if names.len() != 1 || names[0] != model {
        return Err(ProbeError::Unexpected(format!(
            "Expected single {model} model, got {names:?}"
        )));
    }

    Ok(format!(
        "Response in {:.1}s | Model: {} | Synthesized: {} | Success: {}/{}",
        response.elapsed_secs(),
        names[0],
        value_text(&chat.synthesized),
        success,
        total
    ))
}

/// GET /chat/sessions
pub async fn check_sessions(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let response = ctx.client.get("/chat/sessions").await?;
    let body = response.expect_ok("Sessions endpoint")?;
    let sessions = require_array(&body, "sessions")?;
    Ok(format!("Retrieved {} sessions", sessions.len()))
}

/// GET /chat/sessions/{id}
pub async fn check_session_get(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let session_id = ctx.captured.chat_session()?.clone();
    let response = ctx
        .client
        .get(&format!("/chat/sessions/{session_id}"))
        .await?;
    let body = response.expect_ok("Session")?;
    let session = require_object(&body, "session")?;

    let same_id = session.get("id").and_then(OpaqueId::from_value) == Some(session_id);
    let messages = session.get("messages");
    match (same_id, messages) {
        (true, Some(messages)) => Ok(format!(
            "Session found with {} messages",
            text_len(messages)
        )),
        _ => Err(ProbeError::Unexpected("Session structure invalid".to_string())),
    }
}

/// DELETE /chat/sessions/{id}
pub async fn check_session_delete(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let session_id = ctx.captured.chat_session()?.clone();
    let response = ctx
        .client
        .delete(&format!("/chat/sessions/{session_id}"))
        .await?;
    if response.status != StatusCode::OK {
        return Err(response.unexpected());
    }
    let body = response.json()?;

    if body.get("success") != Some(&Value::Bool(true)) {
        return Err(ProbeError::Unexpected(format!(
            "Unexpected response: {body}"
        )));
    }
    info!(session_id = %session_id, "Probe chat session deleted");
    ctx.captured.chat_session_id = None;
    Ok(format!("Session {session_id} deleted successfully"))
}
