//! Authentication and profile checks
//!
//! The probe account is registered once per run (or reused when the email
//! already exists); login attaches the returned token to the client.

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::{compact, require_fields, require_object, typed};
use careergpt_probe_common::protocol::{LoginRequest, ProfileUpdateRequest, RegisterRequest};
use careergpt_probe_common::types::AuthResponse;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

const PROFILE_HEADLINE: &str = "Backend engineer exploring staff-level roles";

/// Record user id and token from an auth response
fn capture_auth(ctx: &mut ProbeContext, auth: &AuthResponse) {
    if let Some(id) = auth.user_id() {
        ctx.captured.user_id = Some(id);
    }
    if let Some(token) = auth.bearer() {
        ctx.client.set_bearer(token);
    }
}

/// POST /auth/register
pub async fn check_register(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let email = ctx.account_email();
    let request = RegisterRequest {
        name: ctx.config.account.name.clone(),
        email: email.clone(),
        password: ctx.config.account.password.clone(),
    };
    let response = ctx.client.post_json("/auth/register", &request).await?;

    if response.status == StatusCode::CONFLICT {
        return Ok(format!("Account {email} already registered (409)"));
    }

    let body = response.expect_success()?;
    require_fields(&body, &["user"])?;
    let auth: AuthResponse = typed(&body)?;
    capture_auth(ctx, &auth);

    info!(email = %email, "Probe account registered");
    Ok(format!(
        "Registered {email} (HTTP {}), UserID: {}, Token issued: {}",
        response.status.as_u16(),
        ctx.captured
            .user_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        auth.bearer().is_some()
    ))
}

/// POST /auth/login
pub async fn check_login(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let email = ctx.account_email();
    let request = LoginRequest {
        email: email.clone(),
        password: ctx.config.account.password.clone(),
    };
    let response = ctx.client.post_json("/auth/login", &request).await?;
    if response.status == StatusCode::UNAUTHORIZED {
        return Err(ProbeError::Unexpected(format!(
            "Login rejected for {email} (401)"
        )));
    }

    let body = response.expect_ok("Login endpoint")?;
    require_fields(&body, &["token", "user"])?;
    let auth: AuthResponse = typed(&body)?;
    capture_auth(ctx, &auth);

    Ok(format!(
        "Logged in as {} in {:.1}s",
        auth.user_email().unwrap_or(&email),
        response.elapsed_secs()
    ))
}

/// GET /profile
pub async fn check_profile_get(ctx: &mut ProbeContext) -> ProbeResult<String> {
    ctx.require_auth()?;
    let response = ctx.client.get("/profile").await?;
    let body = response.expect_ok("Profile")?;
    let profile = require_object(&body, "profile")?;

    let email = profile
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    Ok(format!(
        "Profile for {email} with {} fields",
        profile.len()
    ))
}

/// PUT /profile
pub async fn check_profile_update(ctx: &mut ProbeContext) -> ProbeResult<String> {
    ctx.require_auth()?;
    let request = ProfileUpdateRequest {
        name: ctx.config.account.name.clone(),
        headline: PROFILE_HEADLINE.to_string(),
        skills: vec![
            "Python".to_string(),
            "Rust".to_string(),
            "Kubernetes".to_string(),
        ],
        years_of_experience: 5,
    };
    let response = ctx.client.put_json("/profile", &request).await?;
    let body = response.expect_ok("Profile")?;

    if let Some(profile) = body.get("profile").and_then(Value::as_object) {
        let headline = profile.get("headline").and_then(Value::as_str);
        if headline.is_some_and(|h| h != PROFILE_HEADLINE) {
            return Err(ProbeError::Unexpected(format!(
                "Profile headline not updated: {}",
                compact(&body)
            )));
        }
        return Ok("Profile updated and returned".to_string());
    }
    if body.get("success") == Some(&Value::Bool(true)) {
        return Ok("Profile update acknowledged".to_string());
    }
    Err(ProbeError::Unexpected(format!(
        "Unexpected response: {}",
        compact(&body)
    )))
}
