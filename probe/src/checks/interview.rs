//! Mock interview checks

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::{preview, require_fields, typed};
use careergpt_probe_common::protocol::{InterviewRespondRequest, InterviewStartRequest};
use careergpt_probe_common::types::{value_text, InterviewTurn, OpaqueId};
use tracing::debug;

const SAMPLE_ANSWER: &str = "I have 5+ years of experience in software development, \
specializing in backend systems using Python and distributed architectures. I've led teams \
of 3-5 developers and have experience with microservices, cloud platforms like AWS, and have \
delivered several high-impact projects that improved system performance by 40%.";

/// POST /mock-interview/start
pub async fn check_start(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let request = InterviewStartRequest {
        role: "Senior Software Engineer".to_string(),
        level: "senior-level".to_string(),
        interview_type: "technical".to_string(),
    };
    let response = ctx
        .client
        .post_json("/mock-interview/start", &request)
        .await?;
    let body = response.expect_ok("Interview endpoint")?;
    require_fields(&body, &["sessionId", "question", "questionNumber"])?;

    let turn: InterviewTurn = typed(&body)?;
    let session_id = OpaqueId::from_value(&turn.session_id)
        .ok_or_else(|| ProbeError::Unexpected("sessionId is not a string or number".to_string()))?;
    ctx.captured.interview_session_id = Some(session_id.clone());
    debug!(
        question = %preview(&value_text(&turn.question), 100),
        "Interview question received"
    );

    Ok(format!(
        "Started in {:.1}s, Question #{}, SessionID: {}",
        response.elapsed_secs(),
        value_text(&turn.question_number),
        session_id
    ))
}

/// POST /mock-interview/respond
pub async fn check_respond(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let session_id = ctx.captured.interview_session()?.clone();
    let request = InterviewRespondRequest {
        session_id,
        answer: SAMPLE_ANSWER.to_string(),
    };
    let response = ctx
        .client
        .post_json("/mock-interview/respond", &request)
        .await?;
    let body = response.expect_ok("Session")?;
    require_fields(&body, &["sessionId", "feedback", "questionNumber"])?;

    let turn: InterviewTurn = typed(&body)?;
    debug!(
        feedback = %preview(&value_text(&turn.feedback), 150),
        "Interview feedback received"
    );

    Ok(format!(
        "Response processed in {:.1}s, Question #{}, Complete: {}",
        response.elapsed_secs(),
        value_text(&turn.question_number),
        turn.is_complete.as_bool().unwrap_or(false)
    ))
}
