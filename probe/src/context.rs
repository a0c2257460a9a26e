//! Per-run state shared by checks
//!
//! Identifiers returned by one check and consumed by a later one.

use crate::client::ApiClient;
use crate::error::{ProbeError, ProbeResult};
use careergpt_probe_common::config::ProbeConfig;
use careergpt_probe_common::types::OpaqueId;

/// Values captured from earlier responses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// Chat session from `chat-send`, `chat-ping` or `chat-multi-model`
    pub chat_session_id: Option<OpaqueId>,
    /// Resume from `resume-upload`
    pub resume_id: Option<OpaqueId>,
    /// Interview session from `interview-start`
    pub interview_session_id: Option<OpaqueId>,
    /// Account from `auth-register` / `auth-login`
    pub user_id: Option<OpaqueId>,
    /// Email used for the probe account
    pub account_email: Option<String>,
    /// Career path from `career-generate`
    pub career_path_id: Option<OpaqueId>,
}

impl Captured {
    /// Chat session or a dependency failure
    pub fn chat_session(&self) -> ProbeResult<&OpaqueId> {
        self.chat_session_id.as_ref().ok_or_else(|| {
            ProbeError::MissingDependency(
                "No test session ID available from previous check".to_string(),
            )
        })
    }

    /// Resume or a dependency failure
    pub fn resume(&self) -> ProbeResult<&OpaqueId> {
        self.resume_id.as_ref().ok_or_else(|| {
            ProbeError::MissingDependency(
                "No test resume ID available from upload check".to_string(),
            )
        })
    }

    /// Interview session or a dependency failure
    pub fn interview_session(&self) -> ProbeResult<&OpaqueId> {
        self.interview_session_id.as_ref().ok_or_else(|| {
            ProbeError::MissingDependency("No test interview session ID available".to_string())
        })
    }
}

/// Everything a check needs: client, configuration and captures
#[derive(Debug)]
pub struct ProbeContext {
    /// HTTP client
    pub client: ApiClient,
    /// Effective configuration
    pub config: ProbeConfig,
    /// Captured identifiers
    pub captured: Captured,
}

impl ProbeContext {
    /// Create a context with an empty capture set
    pub fn new(config: ProbeConfig) -> ProbeResult<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self {
            client,
            config,
            captured: Captured::default(),
        })
    }

    /// Fail unless a login token is attached to the client
    pub fn require_auth(&self) -> ProbeResult<()> {
        if self.client.has_bearer() {
            Ok(())
        } else {
            Err(ProbeError::MissingDependency(
                "No auth token available from login check".to_string(),
            ))
        }
    }

    /// Email for the probe account, generated once per run when not configured
    pub fn account_email(&mut self) -> String {
        if let Some(email) = &self.captured.account_email {
            return email.clone();
        }
        let email = self
            .config
            .account
            .email
            .clone()
            .unwrap_or_else(|| format!("probe-{}@example.com", uuid::Uuid::new_v4().simple()));
        self.captured.account_email = Some(email.clone());
        email
    }
}
