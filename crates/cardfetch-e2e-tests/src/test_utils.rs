use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use cardfetch_lib::catalog::DownloadEntry;
use cardfetch_lib::config::HttpSettings;
use cardfetch_lib::download::{EntryTable, TableKind};
use eyre::Result;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

#[derive(Default)]
struct ServerState {
    files: HashMap<String, &'static str>,
    hanging: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

/// Local HTTP server standing in for the image host.
///
/// Known paths return their body, hanging paths never answer, everything else
/// is a 404. Every request path is recorded in arrival order.
pub struct ImageServer {
    base_url: String,
    state: Arc<ServerState>,
    handle: JoinHandle<()>,
}

impl ImageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub async fn wait_for_requests(&self, count: usize) {
        while self.requests().len() < count {
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        }
    }
}

impl Drop for ImageServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_image(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(path.clone());

    if state.hanging.contains(&path) {
        std::future::pending::<()>().await;
    }

    match state.files.get(&path) {
        Some(body) => (StatusCode::OK, *body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn spawn_image_server(
    files: &[(&str, &'static str)],
    hanging: &[&str],
) -> Result<ImageServer> {
    let state = Arc::new(ServerState {
        files: files
            .iter()
            .map(|(path, body)| (path.to_string(), *body))
            .collect(),
        hanging: hanging.iter().map(|path| path.to_string()).collect(),
        ..Default::default()
    });

    let app = Router::new()
        .fallback(serve_image)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Test image server stopped: {}", e);
        }
    });

    Ok(ImageServer {
        base_url: format!("http://{addr}"),
        state,
        handle,
    })
}

/// Cards table of `card-1.png`, `card-2.png` and an extras table with
/// `logo.png`, served from `/1.png`, `/2.png` and `/logo.png`.
pub fn create_test_tables(server: &ImageServer, root: &Path) -> Vec<EntryTable> {
    vec![
        EntryTable::new(
            TableKind::Cards,
            root.join("public/images/cards"),
            vec![
                DownloadEntry::owned("card-1.png", server.url("/1.png")),
                DownloadEntry::owned("card-2.png", server.url("/2.png")),
            ],
        ),
        EntryTable::new(
            TableKind::Extras,
            root.join("public/images"),
            vec![DownloadEntry::owned("logo.png", server.url("/logo.png"))],
        ),
    ]
}

pub fn create_test_http_settings(timeout_secs: u64) -> HttpSettings {
    HttpSettings {
        timeout_secs,
        user_agent: "cardfetch-e2e-tests".to_string(),
    }
}
