//! 共通型定義
//!
//! バックエンドレスポンスの型付きビュー。
//! 形状チェック（必須フィールドの存在確認）を通過した後に変換して使う。
//! 値の型まで検証しないフィールドは `Value` のまま保持する。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 不透明ID（文字列・数値どちらのJSON表現も受け付ける）
///
/// 比較とパス埋め込みには文字列表現を使い、
/// リクエスト本文には受け取った JSON 値をそのまま返す。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawId", into = "Value")]
pub struct OpaqueId {
    text: String,
    raw: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for OpaqueId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self {
                raw: Value::String(text.clone()),
                text,
            },
            RawId::Number(number) => Self {
                text: number.to_string(),
                raw: Value::Number(number),
            },
        }
    }
}

impl From<OpaqueId> for Value {
    fn from(id: OpaqueId) -> Self {
        id.raw
    }
}

impl OpaqueId {
    /// JSON値からIDを取り出す（文字列・数値以外は None）
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(RawId::Text(text.clone()).into()),
            Value::Number(number) => Some(RawId::Number(number.clone()).into()),
            _ => None,
        }
    }

    /// 文字列表現
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 受け取ったままのJSON値
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl PartialEq for OpaqueId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for OpaqueId {}

impl Hash for OpaqueId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// 表示用の文字列（文字列値は引用符なし）
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// ヘルスチェックレスポンス (`GET /health`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    /// 状態 ("healthy")
    pub status: String,
    /// サーバー時刻
    #[serde(default)]
    pub timestamp: Value,
}

/// モデルカタログのエントリ (`GET /models`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    /// 表示名 (例: "GPT-4.1")
    #[serde(default)]
    pub name: Value,
    /// プロバイダー
    #[serde(default)]
    pub provider: Value,
    /// プロバイダー側のモデルID
    #[serde(default)]
    pub model: Value,
    /// UI表示色
    #[serde(default)]
    pub color: Value,
    /// 常時利用可能か
    #[serde(default)]
    pub guaranteed: Value,
}

impl ModelInfo {
    /// `guaranteed` が true のときのみ常時利用可能とみなす
    pub fn is_guaranteed(&self) -> bool {
        self.guaranteed.as_bool() == Some(true)
    }
}

/// チャット応答に含まれるモデル使用情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelUsage {
    /// モデル表示名
    pub name: String,
    /// UI表示色
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    /// 応答時間
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    /// 個別応答本文
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    /// 失敗理由（文字列またはプロバイダーのエラーオブジェクト）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// モデル参照（名前のみ、詳細オブジェクト、またはそれ以外の値）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ModelRef {
    /// 名前のみ
    Named(String),
    /// 詳細
    Detailed(ModelUsage),
    /// 解釈できない値
    Other(Value),
}

impl From<Value> for ModelRef {
    fn from(value: Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(Self::Other(value))
    }
}

impl ModelRef {
    /// モデル名
    pub fn name(&self) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::Detailed(usage) => usage.name.clone(),
            Self::Other(value) => value
                .get("name")
                .map(value_text)
                .unwrap_or_else(|| value_text(value)),
        }
    }
}

/// 配列ならモデル参照の一覧、それ以外は空
fn model_refs<'de, D>(deserializer: D) -> Result<Vec<ModelRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(ModelRef::from).collect(),
        _ => Vec::new(),
    })
}

/// チャット送信レスポンス (`POST /chat/send`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendResponse {
    /// チャットセッションID
    pub session_id: OpaqueId,
    /// 最終応答（合成済みの場合は合成結果）
    #[serde(default)]
    pub response: Value,
    /// 応答に成功したモデル
    #[serde(default, deserialize_with = "model_refs")]
    pub models: Vec<ModelRef>,
    /// 失敗したモデル
    #[serde(default, deserialize_with = "model_refs")]
    pub failed_models: Vec<ModelRef>,
    /// 複数応答を合成したか
    #[serde(default)]
    pub synthesized: Value,
    /// 成功モデル数
    #[serde(default)]
    pub success_count: Value,
    /// 指定モデル数
    #[serde(default)]
    pub total_models: Value,
    /// モデル別の応答
    #[serde(default, deserialize_with = "model_refs")]
    pub individual_responses: Vec<ModelRef>,
}

impl ChatSendResponse {
    /// 応答に成功したモデル名
    pub fn model_names(&self) -> Vec<String> {
        self.models.iter().map(ModelRef::name).collect()
    }

    /// 失敗したモデル名
    pub fn failed_names(&self) -> Vec<String> {
        self.failed_models.iter().map(ModelRef::name).collect()
    }

    /// 合成済みか（`true` のときのみ）
    pub fn is_synthesized(&self) -> bool {
        self.synthesized.as_bool() == Some(true)
    }
}

/// 履歴書アップロードレスポンス (`POST /resume/upload`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadResponse {
    /// 履歴書ID
    pub resume_id: OpaqueId,
    /// ファイル名
    #[serde(default)]
    pub file_name: Value,
    /// 抽出テキストの先頭部分
    #[serde(default)]
    pub text_preview: Value,
    /// 抽出テキストの文字数
    #[serde(default)]
    pub char_count: Value,
}

/// 模擬面接のターン (`/mock-interview/start`, `/mock-interview/respond`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTurn {
    /// 面接セッションID
    #[serde(default)]
    pub session_id: Value,
    /// 質問番号
    #[serde(default)]
    pub question_number: Value,
    /// 次の質問
    #[serde(default)]
    pub question: Value,
    /// 回答へのフィードバック
    #[serde(default)]
    pub feedback: Value,
    /// 面接終了フラグ
    #[serde(default)]
    pub is_complete: Value,
}

/// 認証レスポンス (`/auth/register`, `/auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// アクセストークン
    #[serde(default)]
    pub token: Value,
    /// ユーザー
    #[serde(default)]
    pub user: Value,
}

impl AuthResponse {
    /// Bearer に使うトークン（null・未指定は None）
    pub fn bearer(&self) -> Option<String> {
        match &self.token {
            Value::Null => None,
            token => Some(value_text(token)),
        }
    }

    /// ユーザーID
    pub fn user_id(&self) -> Option<OpaqueId> {
        self.user.get("id").and_then(OpaqueId::from_value)
    }

    /// ユーザーのメールアドレス
    pub fn user_email(&self) -> Option<&str> {
        self.user.get("email").and_then(Value::as_str)
    }
}
