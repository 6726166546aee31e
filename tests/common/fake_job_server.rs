//! Fake job sheet host for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Every `GET` is answered from a path → (status, body) table;
//! unknown paths get `404 Not Found`.
//!
//! # Example
//!
//! ```rust,no_run
//! let server = FakeJobServer::start().await.unwrap();
//! server.serve("/jobs.xlsx", workbook(&rows)).await;
//! let source = DataSource::parse(&server.url("/jobs.xlsx"));
//! ```

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
struct ServerState {
    routes: HashMap<String, (StatusCode, Vec<u8>)>,
    hits: usize,
}

type Shared = Arc<Mutex<ServerState>>;

/// Handle to the running fake server.
pub struct FakeJobServer {
    addr: SocketAddr,
    state: Shared,
}

impl FakeJobServer {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Shared::default();

        let app = Router::new().fallback(respond).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// `http://127.0.0.1:PORT{path}`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Answer `path` with `200 OK` and `body`.
    pub async fn serve(&self, path: &str, body: Vec<u8>) {
        self.respond_with(path, StatusCode::OK, body).await;
    }

    pub async fn respond_with(&self, path: &str, status: StatusCode, body: Vec<u8>) {
        self.state.lock().await.routes.insert(path.to_string(), (status, body));
    }

    /// Requests received so far, on any path.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

async fn respond(State(state): State<Shared>, uri: Uri) -> Response {
    let mut state = state.lock().await;
    state.hits += 1;
    match state.routes.get(uri.path()) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
