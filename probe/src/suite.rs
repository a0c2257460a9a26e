//! Check suites
//!
//! Ordered check lists. Order matters: capturing checks run before the
//! checks that consume their ids, and session deletion runs last.

use crate::checks::CheckKind;
use clap::ValueEnum;
use serde::Serialize;

/// Named, ordered groups of checks
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Suite {
    /// Every check, in dependency order
    #[default]
    Full,
    /// Chat, resume, interview and career exploration flow
    Core,
    /// Model catalog and multi-model chat
    MultiModel,
    /// Minimal chat round trip (send, fetch, delete)
    Smoke,
    /// Registration, login, profile, career paths, jobs and admin
    Account,
}

impl Suite {
    /// Kebab-case id (matches the CLI value)
    pub fn id(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Core => "core",
            Self::MultiModel => "multi-model",
            Self::Smoke => "smoke",
            Self::Account => "account",
        }
    }

    /// Title printed in the run banner
    pub fn title(self) -> &'static str {
        match self {
            Self::Full => "CareerGPT Backend API Testing (full)",
            Self::Core => "CareerGPT Backend API Testing",
            Self::MultiModel => "CareerGPT Multi-Model Integration Testing",
            Self::Smoke => "CareerGPT Chat Smoke Test",
            Self::Account => "CareerGPT Account & Career Services Testing",
        }
    }

    /// Checks in execution order
    pub fn checks(self) -> Vec<CheckKind> {
        use CheckKind::*;
        match self {
            Self::Full => vec![
                Health,
                Models,
                AuthRegister,
                AuthLogin,
                ProfileGet,
                ProfileUpdate,
                ChatSend,
                ChatSessions,
                ChatSessionGet,
                ResumeUpload,
                ResumeAnalyze,
                Resumes,
                ResumeGet,
                InterviewStart,
                InterviewRespond,
                CareerExplore,
                CareerGenerate,
                CareerPaths,
                JobMatch,
                AdminAnalytics,
                ChatSessionDelete,
            ],
            Self::Core => vec![
                Health,
                ChatSend,
                ChatSessions,
                ChatSessionGet,
                ResumeUpload,
                ResumeAnalyze,
                Resumes,
                ResumeGet,
                InterviewStart,
                InterviewRespond,
                CareerExplore,
                ChatSessionDelete,
            ],
            Self::MultiModel => vec![
                Health,
                Models,
                ChatMultiModel,
                ChatSingleModel,
                ChatSessions,
                ChatSessionGet,
                ChatSessionDelete,
            ],
            Self::Smoke => vec![ChatPing, ChatSessionGet, ChatSessionDelete],
            Self::Account => vec![
                Health,
                AuthRegister,
                AuthLogin,
                ProfileGet,
                ProfileUpdate,
                CareerGenerate,
                CareerPaths,
                JobMatch,
                AdminAnalytics,
            ],
        }
    }

    /// Suite checks restricted to `only`, keeping suite order.
    /// An empty filter keeps every check.
    pub fn select(self, only: &[CheckKind]) -> Vec<CheckKind> {
        let checks = self.checks();
        if only.is_empty() {
            return checks;
        }
        checks.into_iter().filter(|c| only.contains(c)).collect()
    }
}
