//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use pages_router::config::SiteConfig;
use pages_router::routing::handler_fn;
use pages_router::urls::TableKind;
use pages_router::views::{View, Views};
use pages_router::{HttpServer, Shutdown};

/// Views that record which view served each request path.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<(View, String)>>>,
}

impl Recorder {
    pub fn views(&self) -> Views {
        Views::from_fn(|view| {
            let calls = self.calls.clone();
            handler_fn(view.name(), move |req: Request<Body>| {
                calls
                    .lock()
                    .unwrap()
                    .push((view, req.uri().path().to_string()));
                async move { (StatusCode::OK, view.name()).into_response() }
            })
        })
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<(View, String)> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn config(table: TableKind) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.routing.table = table;
    config
}

/// Start a server on an ephemeral port. Returns its address and the shutdown handle.
#[allow(dead_code)]
pub async fn start_server(config: SiteConfig, views: Views) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, &views);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
