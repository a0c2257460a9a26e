//! CareerGPT probe common
//!
//! プローブ本体とテストで共有する型・設定・エラー定義

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// バックエンドへ送信するリクエストペイロード
pub mod protocol;

/// バックエンドのレスポンス型
pub mod types;
