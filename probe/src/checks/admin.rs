//! Admin analytics check
//!
//! With an admin token the endpoint must answer; without one it must refuse.

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::require_object;
use reqwest::StatusCode;

/// GET /admin/analytics
pub async fn check_analytics(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let Some(token) = ctx.config.admin_token.clone() else {
        let response = ctx.client.get("/admin/analytics").await?;
        return match response.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(format!(
                "No admin token configured; access control enforced (HTTP {})",
                response.status.as_u16()
            )),
            StatusCode::OK => Err(ProbeError::Unexpected(
                "Admin analytics served without admin credentials".to_string(),
            )),
            _ => Err(response.unexpected()),
        };
    };

    let response = ctx
        .client
        .get_with_token("/admin/analytics", &token)
        .await?;
    let body = response.expect_ok("Admin analytics endpoint")?;
    let analytics = require_object(&body, "analytics")?;

    let mut metrics: Vec<&str> = analytics.keys().map(String::as_str).collect();
    metrics.sort_unstable();
    Ok(format!(
        "Analytics returned {} metrics: {}",
        metrics.len(),
        metrics.join(", ")
    ))
}
