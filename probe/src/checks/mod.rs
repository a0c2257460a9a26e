//! Per-endpoint checks
//!
//! Each check issues one request, asserts on status and JSON shape, and
//! returns the pass detail. Checks never call each other; state flows only
//! through [`crate::context::Captured`].

pub mod account;
pub mod admin;
pub mod career;
pub mod chat;
pub mod health;
pub mod interview;
pub mod jobs;
pub mod resume;

use crate::context::ProbeContext;
use crate::error::ProbeResult;
use clap::ValueEnum;
use serde::Serialize;

/// Every check the probe knows how to run
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// GET /health
    Health,
    /// GET /models
    Models,
    /// POST /auth/register
    AuthRegister,
    /// POST /auth/login
    AuthLogin,
    /// GET /profile
    ProfileGet,
    /// PUT /profile
    ProfileUpdate,
    /// POST /chat/send
    ChatSend,
    /// POST /chat/send with a one-word message
    ChatPing,
    /// POST /chat/send with several active models
    ChatMultiModel,
    /// POST /chat/send with one active model
    ChatSingleModel,
    /// GET /chat/sessions
    ChatSessions,
    /// GET /chat/sessions/{id}
    ChatSessionGet,
    /// DELETE /chat/sessions/{id}
    ChatSessionDelete,
    /// POST /resume/upload
    ResumeUpload,
    /// POST /resume/analyze
    ResumeAnalyze,
    /// GET /resumes
    Resumes,
    /// GET /resume/{id}
    ResumeGet,
    /// POST /mock-interview/start
    InterviewStart,
    /// POST /mock-interview/respond
    InterviewRespond,
    /// POST /career-paths/explore
    CareerExplore,
    /// POST /career-paths/generate
    CareerGenerate,
    /// GET /career-paths
    CareerPaths,
    /// POST /jobs/match
    JobMatch,
    /// GET /admin/analytics
    AdminAnalytics,
}

impl CheckKind {
    /// Stable kebab-case id (matches the CLI value)
    pub fn id(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Models => "models",
            Self::AuthRegister => "auth-register",
            Self::AuthLogin => "auth-login",
            Self::ProfileGet => "profile-get",
            Self::ProfileUpdate => "profile-update",
            Self::ChatSend => "chat-send",
            Self::ChatPing => "chat-ping",
            Self::ChatMultiModel => "chat-multi-model",
            Self::ChatSingleModel => "chat-single-model",
            Self::ChatSessions => "chat-sessions",
            Self::ChatSessionGet => "chat-session-get",
            Self::ChatSessionDelete => "chat-session-delete",
            Self::ResumeUpload => "resume-upload",
            Self::ResumeAnalyze => "resume-analyze",
            Self::Resumes => "resumes",
            Self::ResumeGet => "resume-get",
            Self::InterviewStart => "interview-start",
            Self::InterviewRespond => "interview-respond",
            Self::CareerExplore => "career-explore",
            Self::CareerGenerate => "career-generate",
            Self::CareerPaths => "career-paths",
            Self::JobMatch => "job-match",
            Self::AdminAnalytics => "admin-analytics",
        }
    }

    /// Human-readable name used in the console report
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Health => "Health Check",
            Self::Models => "Models API",
            Self::AuthRegister => "Auth Register",
            Self::AuthLogin => "Auth Login",
            Self::ProfileGet => "Get Profile",
            Self::ProfileUpdate => "Update Profile",
            Self::ChatSend => "Chat Send",
            Self::ChatPing => "Chat Ping",
            Self::ChatMultiModel => "Multi-Model Chat Send",
            Self::ChatSingleModel => "Single Model Chat Send",
            Self::ChatSessions => "Get Chat Sessions",
            Self::ChatSessionGet => "Get Specific Session",
            Self::ChatSessionDelete => "Delete Session",
            Self::ResumeUpload => "Resume Upload",
            Self::ResumeAnalyze => "Resume Analyze",
            Self::Resumes => "Get Resumes",
            Self::ResumeGet => "Get Specific Resume",
            Self::InterviewStart => "Mock Interview Start",
            Self::InterviewRespond => "Mock Interview Respond",
            Self::CareerExplore => "Career Paths Explore",
            Self::CareerGenerate => "Career Path Generate",
            Self::CareerPaths => "Get Career Paths",
            Self::JobMatch => "Job Matching",
            Self::AdminAnalytics => "Admin Analytics",
        }
    }

    /// Whether the endpoint waits on AI inference
    pub fn is_ai_backed(self) -> bool {
        matches!(
            self,
            Self::ChatSend
                | Self::ChatPing
                | Self::ChatMultiModel
                | Self::ChatSingleModel
                | Self::ResumeAnalyze
                | Self::InterviewStart
                | Self::InterviewRespond
                | Self::CareerExplore
                | Self::CareerGenerate
                | Self::JobMatch
        )
    }

    /// Progress line printed before the request is sent
    pub fn banner(self) -> String {
        if self.is_ai_backed() {
            format!(
                "Testing {} (AI endpoint - may take 15-30 seconds)...",
                self.display_name()
            )
        } else {
            format!("Testing {}...", self.display_name())
        }
    }

    /// Execute the check against the backend
    pub async fn run(self, ctx: &mut ProbeContext) -> ProbeResult<String> {
        match self {
            Self::Health => health::check_health(ctx).await,
            Self::Models => health::check_models(ctx).await,
            Self::AuthRegister => account::check_register(ctx).await,
            Self::AuthLogin => account::check_login(ctx).await,
            Self::ProfileGet => account::check_profile_get(ctx).await,
            Self::ProfileUpdate => account::check_profile_update(ctx).await,
            Self::ChatSend => chat::check_send(ctx).await,
            Self::ChatPing => chat::check_ping(ctx).await,
            Self::ChatMultiModel => chat::check_multi_model(ctx).await,
            Self::ChatSingleModel => chat::check_single_model(ctx).await,
            Self::ChatSessions => chat::check_sessions(ctx).await,
            Self::ChatSessionGet => chat::check_session_get(ctx).await,
            Self::ChatSessionDelete => chat::check_session_delete(ctx).await,
            Self::ResumeUpload => resume::check_upload(ctx).await,
            Self::ResumeAnalyze => resume::check_analyze(ctx).await,
            Self::Resumes => resume::check_list(ctx).await,
            Self::ResumeGet => resume::check_get(ctx).await,
            Self::InterviewStart => interview::check_start(ctx).await,
            Self::InterviewRespond => interview::check_respond(ctx).await,
            Self::CareerExplore => career::check_explore(ctx).await,
            Self::CareerGenerate => career::check_generate(ctx).await,
            Self::CareerPaths => career::check_list(ctx).await,
            Self::JobMatch => jobs::check_match(ctx).await,
            Self::AdminAnalytics => admin::check_analytics(ctx).await,
        }
    }
}
