//! 通信プロトコル定義
//!
//! プローブ→バックエンドのリクエストペイロード

use crate::types::OpaqueId;
use serde::{Deserialize, Serialize};

/// チャット送信リクエスト (`POST /chat/send`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendRequest {
    /// ユーザーメッセージ
    pub message: String,
    /// 使用するモデル名（未指定時はバックエンドのデフォルト）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_models: Option<Vec<String>>,
}

impl ChatSendRequest {
    /// モデル指定なしのリクエスト
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            active_models: None,
        }
    }

    /// モデルを指定する
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.active_models = Some(models);
        self
    }
}

/// 履歴書解析リクエスト (`POST /resume/analyze`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalyzeRequest {
    /// アップロード済み履歴書ID（受け取ったJSON型のまま送る）
    pub resume_id: OpaqueId,
}

/// 模擬面接開始リクエスト (`POST /mock-interview/start`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterviewStartRequest {
    /// 対象ロール
    pub role: String,
    /// レベル (例: "senior-level")
    pub level: String,
    /// 面接種別 (例: "technical")
    #[serde(rename = "type")]
    pub interview_type: String,
}

/// 模擬面接回答リクエスト (`POST /mock-interview/respond`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRespondRequest {
    /// 面接セッションID
    pub session_id: OpaqueId,
    /// 回答本文
    pub answer: String,
}

/// キャリアパス探索リクエスト (`POST /career-paths/explore`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerExploreRequest {
    /// 興味分野
    pub interests: String,
    /// スキル（カンマ区切り）
    pub skills: String,
    /// 経験
    pub experience: String,
}

/// キャリアパス生成リクエスト (`POST /career-paths/generate`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CareerGenerateRequest {
    /// 目標ロール
    pub target_role: String,
    /// 現在のロール
    pub current_role: String,
    /// 保有スキル
    pub skills: Vec<String>,
    /// 経験
    pub experience: String,
}

/// ユーザー登録リクエスト (`POST /auth/register`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// 表示名
    pub name: String,
    /// メールアドレス
    pub email: String,
    /// パスワード
    pub password: String,
}

/// ログインリクエスト (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// メールアドレス
    pub email: String,
    /// パスワード
    pub password: String,
}

/// プロフィール更新リクエスト (`PUT /profile`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    /// 表示名
    pub name: String,
    /// 見出し
    pub headline: String,
    /// スキル
    pub skills: Vec<String>,
    /// 経験年数
    pub years_of_experience: u32,
}

/// 求人マッチングリクエスト (`POST /jobs/match`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    /// スキル
    pub skills: Vec<String>,
    /// 希望勤務地
    pub location: String,
    /// 照合に使う履歴書ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<OpaqueId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_send_request_omits_models_when_unset() {
        let request = ChatSendRequest::new("Hi");
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"message": "Hi"}));
    }

    #[test]
    fn test_chat_send_request_active_models_camel_case() {
        let request = ChatSendRequest::new("what is AI?").with_models(vec!["GPT-4.1".to_string()]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"message": "what is AI?", "activeModels": ["GPT-4.1"]})
        );
    }

    #[test]
    fn test_interview_start_request_type_field() {
        let request = InterviewStartRequest {
            role: "Senior Software Engineer".to_string(),
            level: "senior-level".to_string(),
            interview_type: "technical".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "technical");
        assert!(value.get("interview_type").is_none());
    }

    #[test]
    fn test_job_match_request_serialization() {
        let request = JobMatchRequest {
            skills: vec!["Rust".to_string()],
            location: "Remote".to_string(),
            resume_id: OpaqueId::from_value(&json!("r-1")),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"skills": ["Rust"], "location": "Remote", "resumeId": "r-1"})
        );
    }

    #[test]
    fn test_captured_ids_keep_numeric_type() {
        let analyze = ResumeAnalyzeRequest {
            resume_id: OpaqueId::from_value(&json!(42)).unwrap(),
        };
        assert_eq!(serde_json::to_value(&analyze).unwrap(), json!({"resumeId": 42}));

        let respond = InterviewRespondRequest {
            session_id: OpaqueId::from_value(&json!(7)).unwrap(),
            answer: "ok".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&respond).unwrap(),
            json!({"sessionId": 7, "answer": "ok"})
        );
    }
}
