//! Local stand-ins for the chat-completion endpoint, used by the shell's tests.

use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

/// A chat-completions endpoint that records every call and replies with a fixed body.
#[derive(Clone)]
pub struct MockLlm {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockLlm {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

pub async fn mock_llm(status: StatusCode, reply: Value) -> MockLlm {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let router = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorded = recorded.clone();
            let reply = reply.clone();
            async move {
                recorded.lock().unwrap().push(RecordedRequest {
                    authorization: headers
                        .get(AUTHORIZATION)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                (status, Json(reply))
            }
        }),
    );

    MockLlm {
        base_url: format!("{}/v1", spawn(router).await),
        requests,
    }
}

/// A successful completion whose first choice carries `content`.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn settings(api_key: Option<&str>, base_url: &str) -> crate::config::Settings {
    crate::config::Settings {
        api_key: api_key.map(str::to_string),
        base_url: base_url.to_string(),
    }
}

pub fn global() -> crate::Global {
    crate::Global {
        secrets: std::path::PathBuf::from("does-not-exist/secrets.toml"),
        api_key: None,
        base_url: pd2st_core::convert::chat::BASE_URL.to_string(),
        verbose: false,
    }
}
