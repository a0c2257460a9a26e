//! Job matching check

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::require_array;
use careergpt_probe_common::protocol::JobMatchRequest;

/// POST /jobs/match (includes the uploaded resume when one was captured)
pub async fn check_match(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let request = JobMatchRequest {
        skills: vec![
            "Python".to_string(),
            "React".to_string(),
            "AWS".to_string(),
            "Kubernetes".to_string(),
        ],
        location: "Remote".to_string(),
        resume_id: ctx.captured.resume_id.clone(),
    };
    let response = ctx.client.post_json("/jobs/match", &request).await?;
    let body = response.expect_ok("Job matching endpoint")?;
    let matches = require_array(&body, "matches")?;

    if let Some(position) = matches.iter().position(|m| m.get("title").is_none()) {
        return Err(ProbeError::Unexpected(format!(
            "Match #{} missing title: {}",
            position + 1,
            matches[position]
        )));
    }

    let titles: Vec<&str> = matches
        .iter()
        .filter_map(|m| m.get("title").and_then(|t| t.as_str()))
        .take(3)
        .collect();
    Ok(format!(
        "Matched {} jobs in {:.1}s (resume: {}), Top: {:?}",
        matches.len(),
        response.elapsed_secs(),
        request
            .resume_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string()),
        titles
    ))
}
