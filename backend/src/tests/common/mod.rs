// Common test utilities and helpers

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::config::LlmConfig;
use crate::models::GeneratedName;
use crate::services::NameGenerationService;
use crate::services::llm::LLMError;

pub const TEST_API_KEY: &str = "sk-test-key-12345";

/// A request received by the fake provider
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

struct FakeProviderState {
    status: StatusCode,
    response: Value,
    captured: Mutex<Vec<CapturedRequest>>,
}

/// A chat-completions endpoint running on a random local port
pub struct FakeProvider {
    pub api_url: String,
    state: Arc<FakeProviderState>,
    _handle: tokio::task::JoinHandle<()>,
}

impl FakeProvider {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }

    pub fn llm_config(&self) -> LlmConfig {
        test_llm_config(&self.api_url)
    }
}

async fn fake_completion(
    State(state): State<Arc<FakeProviderState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state.captured.lock().unwrap().push(CapturedRequest { authorization, body });
    (state.status, Json(state.response.clone()))
}

/// Spawn a fake provider that answers every request with `status` and `response`
pub async fn spawn_fake_provider(status: StatusCode, response: Value) -> FakeProvider {
    let state = Arc::new(FakeProviderState { status, response, captured: Mutex::new(Vec::new()) });
    let app = Router::new()
        .route("/v1/chat/completions", post(fake_completion))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeProvider { api_url: format!("http://{addr}/v1/chat/completions"), state, _handle: handle }
}

/// Fake provider replying 200 with `content` as the first choice
pub async fn spawn_provider_with_content(content: &str) -> FakeProvider {
    spawn_fake_provider(StatusCode::OK, completion_body(content)).await
}

/// Provider response envelope with a single assistant message
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 0,
        "model": "test-model",
        "choices": [{
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
    })
}

/// URL of a local port with nothing listening on it
pub async fn unreachable_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1/chat/completions")
}

pub fn test_llm_config(api_url: &str) -> LlmConfig {
    LlmConfig {
        api_url: api_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        model: "test-model".to_string(),
        ..LlmConfig::default()
    }
}

pub const THREE_NAMES_JSON: &str = r#"[
  {"chinese": "艾乐轩", "pinyin": "Ài Lè Xuān", "meaning": "Joyful Adventurer", "reason": "艾 sounds like Alice."},
  {"chinese": "爱思", "pinyin": "Ài Sī", "meaning": "Loving Thought", "reason": "思 means thought."},
  {"chinese": "安丽", "pinyin": "Ān Lì", "meaning": "Peaceful Beauty", "reason": "丽 means beautiful."}
]"#;

pub fn three_names() -> Vec<GeneratedName> {
    serde_json::from_str(THREE_NAMES_JSON).unwrap()
}

/// In-process generator that records calls without touching the network
pub struct StubGenerator {
    result: Result<Vec<GeneratedName>, String>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn returning(names: Vec<GeneratedName>) -> Arc<Self> {
        Arc::new(Self { result: Ok(names), calls: AtomicUsize::new(0) })
    }

    pub fn failing(cause: &str) -> Arc<Self> {
        Arc::new(Self { result: Err(cause.to_string()), calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameGenerationService for StubGenerator {
    async fn generate(
        &self,
        _name: &str,
        _description: Option<&str>,
    ) -> Result<Vec<GeneratedName>, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(LLMError::RequestFailed)
    }
}

/// In-memory sink for log output produced while a test runs
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Route this thread's log events into a buffer until the guard drops.
///
/// `#[tokio::test]` runs on a current-thread runtime, so events from the
/// awaited request land here.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
