//! Career path checks

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::{compact, opaque_id, require_array, text_len};
use careergpt_probe_common::protocol::{CareerExploreRequest, CareerGenerateRequest};
use careergpt_probe_common::types::ModelRef;
use serde_json::Value;

/// Model names from an optional `models` array
fn model_names(body: &Value) -> Vec<String> {
    body.get("models")
        .cloned()
        .and_then(|models| serde_json::from_value::<Vec<ModelRef>>(models).ok())
        .map(|models| models.iter().map(ModelRef::name).collect())
        .unwrap_or_default()
}

/// POST /career-paths/explore
pub async fn check_explore(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let request = CareerExploreRequest {
        interests: "Machine Learning and AI".to_string(),
        skills: "Python, TensorFlow, Data Analysis, SQL".to_string(),
        experience: "3 years in data science".to_string(),
    };
    let response = ctx
        .client
        .post_json("/career-paths/explore", &request)
        .await?;
    let body = response.expect_ok("Career paths endpoint")?;

    let Some(paths) = body.get("paths") else {
        return Err(ProbeError::Unexpected(format!(
            "No paths in response: {}",
            compact(&body)
        )));
    };

    Ok(format!(
        "Completed in {:.1}s, Response length: {} chars, Models: {:?}",
        response.elapsed_secs(),
        text_len(paths),
        model_names(&body)
    ))
}

/// POST /career-paths/generate
pub async fn check_generate(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let request = CareerGenerateRequest {
        target_role: "Staff Software Engineer".to_string(),
        current_role: "Senior Software Engineer".to_string(),
        skills: vec![
            "Python".to_string(),
            "Distributed Systems".to_string(),
            "AWS".to_string(),
        ],
        experience: "5 years in backend development".to_string(),
    };
    let response = ctx
        .client
        .post_json("/career-paths/generate", &request)
        .await?;
    let body = response.expect_ok("Career path endpoint")?;

    let Some(path) = body.get("careerPath") else {
        return Err(ProbeError::Unexpected(format!(
            "No careerPath in response: {}",
            compact(&body)
        )));
    };

    let path_id = opaque_id(path, "id").or_else(|| opaque_id(&body, "careerPathId"));
    ctx.captured.career_path_id = path_id.clone();

    Ok(format!(
        "Generated in {:.1}s, Size: {}, PathID: {}",
        response.elapsed_secs(),
        text_len(path),
        path_id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".to_string())
    ))
}

/// GET /career-paths
pub async fn check_list(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let response = ctx.client.get("/career-paths").await?;
    let body = response.expect_ok("Career paths endpoint")?;
    let paths = require_array(&body, "careerPaths")?;

    if let Some(id) = &ctx.captured.career_path_id {
        let listed = paths
            .iter()
            .any(|p| opaque_id(p, "id").as_ref() == Some(id));
        return Ok(format!(
            "Retrieved {} career paths, generated path listed: {listed}",
            paths.len()
        ));
    }
    Ok(format!("Retrieved {} career paths", paths.len()))
}
