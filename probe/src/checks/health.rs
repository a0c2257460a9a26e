//! Health and model catalog checks

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::{compact, require_array, require_fields, typed};
use careergpt_probe_common::types::{value_text, HealthResponse, ModelInfo};

/// Keys every `/models` entry must carry
const MODEL_FIELDS: [&str; 5] = ["name", "provider", "model", "color", "guaranteed"];

/// GET /health
pub async fn check_health(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let response = ctx.client.get("/health").await?;
    let body = response.expect_ok("Health endpoint")?;

    let healthy = body.get("status").and_then(|s| s.as_str()) == Some("healthy");
    if !healthy || body.get("timestamp").is_none() {
        return Err(ProbeError::Unexpected(format!(
            "Unexpected response structure: {}",
            compact(&body)
        )));
    }

    let health: HealthResponse = typed(&body)?;
    Ok(format!(
        "Status: {}, timestamp: {}",
        health.status, health.timestamp
    ))
}

/// GET /models
pub async fn check_models(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let response = ctx.client.get("/models").await?;
    let body = response.expect_ok("Models endpoint")?;
    let entries = require_array(&body, "models")?;

    let expected = &ctx.config.expected_models;
    if entries.len() != expected.len() {
        return Err(ProbeError::Unexpected(format!(
            "Expected {} models, got {}",
            expected.len(),
            entries.len()
        )));
    }

    let names: Vec<&str> = entries
        .iter()
        .filter_map(|m| m.get("name").and_then(|n| n.as_str()))
        .collect();
    let missing: Vec<&str> = expected
        .iter()
        .map(String::as_str)
        .filter(|name| !names.contains(name))
        .collect();
    if !missing.is_empty() {
        return Err(ProbeError::Unexpected(format!("Missing models: {missing:?}")));
    }

    let mut models = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Err(ProbeError::MissingFields(fields)) = require_fields(entry, &MODEL_FIELDS) {
            let name = entry
                .get("name")
                .and_then(|n| n.as_str())
                .unwrap_or("Unknown");
            return Err(ProbeError::Unexpected(format!(
                "Model {name} missing fields: {fields:?}"
            )));
        }
        models.push(typed::<ModelInfo>(entry)?);
    }

    let guaranteed = models.iter().filter(|m| m.is_guaranteed()).count();
    let listing: Vec<String> = models
        .iter()
        .map(|m| {
            let mark = if m.is_guaranteed() { "✓" } else { "~" };
            format!("{mark} {} ({})", value_text(&m.name), value_text(&m.provider))
        })
        .collect();

    Ok(format!(
        "Found all {} models: {}. Guaranteed: {}/{}",
        models.len(),
        listing.join(", "),
        guaranteed,
        models.len()
    ))
}
