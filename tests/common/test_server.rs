use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A fixed zone served as Google-style DoH JSON.
#[derive(Default)]
struct Zone {
    v4: HashMap<String, Vec<String>>,
    v6: HashMap<String, Vec<String>>,
    /// Names whose every answer is a body that is not JSON
    malformed: HashSet<String>,
    /// (name, type) pairs answered with HTTP 500
    failing: HashSet<(String, String)>,
    queries: AtomicUsize,
}

/// In-process DoH endpoint for flow tests.
pub struct TestDohServer {
    addr: SocketAddr,
    zone: Arc<Zone>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestDohServer {
    pub fn url(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }

    /// Requests received so far.
    pub fn query_count(&self) -> usize {
        self.zone.queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub struct TestDohServerBuilder {
    zone: Zone,
}

impl TestDohServerBuilder {
    pub fn new() -> Self {
        Self {
            zone: Zone::default(),
        }
    }

    pub fn with_host(mut self, name: &str, v4: &[&str], v6: &[&str]) -> Self {
        self.zone
            .v4
            .insert(name.to_string(), v4.iter().map(|a| a.to_string()).collect());
        self.zone
            .v6
            .insert(name.to_string(), v6.iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn with_malformed(mut self, name: &str) -> Self {
        self.zone.malformed.insert(name.to_string());
        self
    }

    /// Answer `record_type` ("A" or "AAAA") for `name` with HTTP 500.
    pub fn with_failing(mut self, name: &str, record_type: &str) -> Self {
        self.zone
            .failing
            .insert((name.to_string(), record_type.to_string()));
        self
    }

    pub async fn start(self) -> Result<TestDohServer, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let zone = Arc::new(self.zone);

        let app = Router::new()
            .route("/resolve", get(resolve))
            .with_state(Arc::clone(&zone));

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(TestDohServer {
            addr,
            zone,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

async fn resolve(
    State(zone): State<Arc<Zone>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    zone.queries.fetch_add(1, Ordering::SeqCst);

    let name = params.get("name").cloned().unwrap_or_default();
    let record_type = params.get("type").cloned().unwrap_or_default();

    if zone.malformed.contains(&name) {
        return (StatusCode::OK, "<html>not dns</html>").into_response();
    }
    if zone.failing.contains(&(name.clone(), record_type.clone())) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let (table, code) = match record_type.as_str() {
        "A" => (&zone.v4, 1),
        "AAAA" => (&zone.v6, 28),
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };

    let body = match table.get(&name) {
        Some(addresses) => envelope(&name, code, addresses),
        None => json!({"Status": 3}),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/dns-json")],
        body.to_string(),
    )
        .into_response()
}

fn envelope(name: &str, code: u16, addresses: &[String]) -> Value {
    let fqdn = format!("{}.", name);
    let answers: Vec<Value> = addresses
        .iter()
        .map(|a| json!({"name": fqdn, "type": code, "TTL": 60, "data": a}))
        .collect();

    json!({
        "Status": 0,
        "TC": false,
        "RD": true,
        "RA": true,
        "AD": false,
        "CD": false,
        "Question": [{"name": fqdn, "type": code}],
        "Answer": answers
    })
}
