#![allow(dead_code)]
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

/// What the mock endpoint does for one (name, type) pair
#[derive(Clone)]
pub enum MockBehavior {
    /// 200 with this JSON body
    Json(Value),
    /// 200 with this raw body (for malformed responses)
    Raw(&'static str),
    /// Bare HTTP status with an empty body
    Status(u16),
    /// Sleep, then answer like the inner behavior
    Delayed(Duration, Box<MockBehavior>),
}

#[derive(Clone, Default)]
struct MockState {
    behaviors: Arc<RwLock<HashMap<(String, String), MockBehavior>>>,
    requests: Arc<RwLock<Vec<HashMap<String, String>>>>,
}

/// In-process JSON DoH endpoint on `127.0.0.1:<ephemeral>`.
///
/// Unknown (name, type) pairs get `{"Status": 3}` (NXDOMAIN).
pub struct MockDohServer {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = MockState::default();

        let app = Router::new()
            .route("/resolve", get(resolve))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }

    pub async fn set(&self, name: &str, record_type: &str, behavior: MockBehavior) {
        self.state
            .behaviors
            .write()
            .await
            .insert((name.to_string(), record_type.to_string()), behavior);
    }

    /// Answer `name`/`record_type` with these `data` strings.
    pub async fn set_answers(&self, name: &str, record_type: &str, data: &[&str]) {
        self.set(name, record_type, MockBehavior::Json(answer_json(name, record_type, data)))
            .await;
    }

    /// Query strings received so far, in arrival order.
    pub async fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.read().await.clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Google-style JSON envelope with one answer per `data` entry.
pub fn answer_json(name: &str, record_type: &str, data: &[&str]) -> Value {
    let code = match record_type {
        "A" => 1,
        "AAAA" => 28,
        _ => 0,
    };
    let answers: Vec<Value> = data
        .iter()
        .map(|d| json!({"name": format!("{}.", name), "type": code, "TTL": 300, "data": d}))
        .collect();

    json!({
        "Status": 0,
        "TC": false,
        "RD": true,
        "RA": true,
        "AD": false,
        "CD": false,
        "Question": [{"name": format!("{}.", name), "type": code}],
        "Answer": answers
    })
}

async fn resolve(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.write().await.push(params.clone());

    let key = (
        params.get("name").cloned().unwrap_or_default(),
        params.get("type").cloned().unwrap_or_default(),
    );
    let behavior = state
        .behaviors
        .read()
        .await
        .get(&key)
        .cloned()
        .unwrap_or_else(|| MockBehavior::Json(json!({"Status": 3})));

    respond(behavior).await
}

async fn respond(mut behavior: MockBehavior) -> Response {
    let behavior = loop {
        match behavior {
            MockBehavior::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                behavior = *inner;
            }
            other => break other,
        }
    };

    match behavior {
        MockBehavior::Json(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/dns-json")],
            body.to_string(),
        )
            .into_response(),
        MockBehavior::Raw(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/dns-json")],
            body,
        )
            .into_response(),
        MockBehavior::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        MockBehavior::Delayed(..) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
