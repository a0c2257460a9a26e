//! 設定管理
//!
//! ProbeConfig, AccountConfig等の設定構造体

use crate::error::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// プローブ設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeConfig {
    /// バックエンドAPIのベースURL (デフォルト: "http://localhost:3000/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// リクエストタイムアウト（秒）(デフォルト: 60)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// チェック間の待機時間（ミリ秒）(デフォルト: 1000)
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    /// `/models` が返すべきモデル名一覧
    #[serde(default = "default_expected_models")]
    pub expected_models: Vec<String>,

    /// マルチモデルチャットで指定するモデル
    #[serde(default = "default_multi_model_selection")]
    pub multi_model_selection: Vec<String>,

    /// シングルモデルチャットで指定するモデル
    #[serde(default = "default_single_model")]
    pub single_model: String,

    /// アップロードする履歴書ファイル（未指定時は組み込みサンプル）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<PathBuf>,

    /// テスト用アカウント
    #[serde(default)]
    pub account: AccountConfig,

    /// 管理者APIトークン
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_pause_ms() -> u64 {
    1000
}

fn default_expected_models() -> Vec<String> {
    [
        "GPT-4.1",
        "Claude 4 Sonnet",
        "Gemini 2.5 Flash",
        "Grok 3 Mini",
        "Perplexity Sonar Pro",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

fn default_multi_model_selection() -> Vec<String> {
    ["GPT-4.1", "Claude 4 Sonnet", "Gemini 2.5 Flash"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn default_single_model() -> String {
    "GPT-4.1".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            pause_ms: default_pause_ms(),
            expected_models: default_expected_models(),
            multi_model_selection: default_multi_model_selection(),
            single_model: default_single_model(),
            resume_file: None,
            account: AccountConfig::default(),
            admin_token: None,
        }
    }
}

impl ProbeConfig {
    /// YAML文字列から読み込む（未指定の項目はデフォルト値）
    pub fn from_yaml_str(text: &str) -> CommonResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// YAMLファイルから読み込む
    pub fn from_yaml_file(path: &Path) -> CommonResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            CommonError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_yaml_str(&text)
    }

    /// 設定値の整合性を検証する
    pub fn validate(&self) -> CommonResult<()> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CommonError::Validation(format!(
                "base_url must start with http:// or https://: {base}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CommonError::Validation(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.expected_models.is_empty() {
            return Err(CommonError::Validation(
                "expected_models must not be empty".to_string(),
            ));
        }
        if self.multi_model_selection.is_empty() {
            return Err(CommonError::Validation(
                "multi_model_selection must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// リクエストタイムアウト
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// チェック間の待機時間
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// テスト用アカウント設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountConfig {
    /// 表示名 (デフォルト: "Probe User")
    #[serde(default = "default_account_name")]
    pub name: String,

    /// メールアドレス（未指定時は実行ごとに生成）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// パスワード (デフォルト: "ProbePass123!")
    #[serde(default = "default_account_password")]
    pub password: String,
}

fn default_account_name() -> String {
    "Probe User".to_string()
}

fn default_account_password() -> String {
    "ProbePass123!".to_string()
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            name: default_account_name(),
            email: None,
            password: default_account_password(),
        }
    }
}
