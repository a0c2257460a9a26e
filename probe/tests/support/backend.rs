//! wiremockで動作する疑似CareerGPTバックエンド

use careergpt_probe::context::ProbeContext;
use careergpt_probe_common::config::ProbeConfig;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_ID: &str = "sess-1";
pub const RESUME_ID: u64 = 42;
pub const INTERVIEW_ID: &str = "int-1";
pub const AUTH_TOKEN: &str = "tok-123";
pub const ADMIN_TOKEN: &str = "admin-secret";

/// 既定のモデル一覧（期待値と一致）
#[allow(dead_code)]
pub fn models_body() -> Value {
    json!({
        "models": [
            {"name": "GPT-4.1", "provider": "openai", "model": "gpt-4.1", "color": "#10a37f", "guaranteed": true},
            {"name": "Claude 4 Sonnet", "provider": "anthropic", "model": "claude-sonnet-4", "color": "#d97757", "guaranteed": true},
            {"name": "Gemini 2.5 Flash", "provider": "google", "model": "gemini-2.5-flash", "color": "#4285f4", "guaranteed": true},
            {"name": "Grok 3 Mini", "provider": "xai", "model": "grok-3-mini", "color": "#000000", "guaranteed": false},
            {"name": "Perplexity Sonar Pro", "provider": "perplexity", "model": "sonar-pro", "color": "#20808d", "guaranteed": false}
        ]
    })
}

fn usage(name: &str) -> Value {
    json!({"name": name, "color": "#123456", "duration": 1.2, "response": "AI is ..."})
}

/// 待機なし・短いタイムアウトのコンテキスト
#[allow(dead_code)]
pub fn context(server: &MockServer) -> ProbeContext {
    context_with(server, |_| {})
}

/// 設定を調整したコンテキスト
#[allow(dead_code)]
pub fn context_with(server: &MockServer, adjust: impl FnOnce(&mut ProbeConfig)) -> ProbeContext {
    let mut config = ProbeConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        pause_ms: 0,
        ..ProbeConfig::default()
    };
    config.account.email = Some("probe@example.com".to_string());
    adjust(&mut config);
    ProbeContext::new(config).unwrap()
}

/// 正常系の全エンドポイントを登録する
#[allow(dead_code)]
pub async fn mount_healthy_backend(server: &MockServer) {
    mount_core(server).await;
    mount_multi_model(server).await;
    mount_account(server).await;
}

/// ヘルス・チャット・履歴書・面接・キャリア探索
#[allow(dead_code)]
pub async fn mount_core(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "timestamp": "2026-10-19T09:00:00Z"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(models_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/chat/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessions": [{"id": SESSION_ID, "title": "Key skills"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/chat/sessions/{SESSION_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session": {
                "id": SESSION_ID,
                "messages": [
                    {"role": "user", "content": "What are the key skills?"},
                    {"role": "assistant", "content": "Communication, ..."}
                ]
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/chat/sessions/{SESSION_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/resume/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resumeId": RESUME_ID,
            "fileName": "john_doe_resume.txt",
            "textPreview": "John Doe\nSoftware Engineer",
            "charCount": 640
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/resume/analyze"))
        .and(body_partial_json(json!({"resumeId": RESUME_ID})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analysis": "Strong backend profile with measurable impact.",
            "resumeId": RESUME_ID
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/resumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resumes": [{"id": RESUME_ID, "fileName": "john_doe_resume.txt"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/resume/{RESUME_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resume": {
                "id": RESUME_ID,
                "fileName": "john_doe_resume.txt",
                "textContent": "John Doe\nSoftware Engineer"
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/mock-interview/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": INTERVIEW_ID,
            "question": "Walk me through a system you designed.",
            "questionNumber": 1
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/mock-interview/respond"))
        .and(body_partial_json(json!({"sessionId": INTERVIEW_ID})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": INTERVIEW_ID,
            "feedback": "Good use of metrics.",
            "questionNumber": 2,
            "isComplete": false
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/career-paths/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paths": "1. ML Engineer\n2. Data Platform Lead",
            "models": ["GPT-4.1", {"name": "Claude 4 Sonnet"}]
        })))
        .mount(server)
        .await;
}

/// マルチモデル／シングルモデル指定と通常のチャット送信
///
/// 指定付きのモックを先に登録する（同一優先度では登録順に一致判定される）。
#[allow(dead_code)]
pub async fn mount_multi_model(server: &MockServer) {
    let selection = ["GPT-4.1", "Claude 4 Sonnet", "Gemini 2.5 Flash"];

    Mock::given(method("POST"))
        .and(path("/chat/send"))
        .and(body_partial_json(json!({"activeModels": selection})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": SESSION_ID,
            "response": "Synthesized answer",
            "models": selection.iter().map(|name| usage(name)).collect::<Vec<_>>(),
            "failedModels": [],
            "synthesized": true,
            "successCount": 3,
            "totalModels": 3,
            "individualResponses": selection.iter().map(|name| usage(name)).collect::<Vec<_>>()
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/send"))
        .and(body_partial_json(json!({"activeModels": ["GPT-4.1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": SESSION_ID,
            "response": "Machine learning is ...",
            "models": [usage("GPT-4.1")],
            "failedModels": [],
            "synthesized": false,
            "successCount": 1,
            "totalModels": 1
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": SESSION_ID,
            "response": "Key skills include ...",
            "models": ["GPT-4.1", "Claude 4 Sonnet"],
            "synthesized": true
        })))
        .mount(server)
        .await;
}

/// 認証・プロフィール・キャリアパス生成・求人マッチング・管理API
#[allow(dead_code)]
pub async fn mount_account(server: &MockServer) {
    let bearer = format!("Bearer {AUTH_TOKEN}");
    let user = json!({"id": "u-1", "email": "probe@example.com"});

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": user,
            "token": AUTH_TOKEN
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({"email": "probe@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": AUTH_TOKEN,
            "user": user
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profile": {"email": "probe@example.com", "name": "Probe User"}
        })))
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/profile"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/career-paths/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "careerPath": {"id": "cp-1", "title": "Staff Software Engineer", "steps": []}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/career-paths"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "careerPaths": [{"id": "cp-1"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/jobs/match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [
                {"title": "Backend Engineer", "company": "Acme"},
                {"title": "Platform Engineer", "company": "Globex"}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/analytics"))
        .and(header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analytics": {"totalUsers": 10, "activeSessions": 3}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/analytics"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "forbidden"})))
        .mount(server)
        .await;
}
