//! Dispatch tests driving the layered router without a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use pages_router::routing::{handler_fn, ResolvedRoute};
use pages_router::urls::TableKind;
use pages_router::views::{View, Views};
use pages_router::HttpServer;
use tower::ServiceExt;

mod common;

async fn send(router: &Router, method: Method, uri: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(res: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), 64 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_site_table_dispatches_every_path() {
    let recorder = common::Recorder::default();
    let server = HttpServer::new(&common::config(TableKind::Site), &recorder.views());
    let router = server.router();

    let cases = [
        ("/", View::Home),
        ("/about/", View::About),
        ("/contact/", View::Contact),
        ("/admin/login/", View::AdminLogin),
        ("/admin/dashboard/", View::AdminDashboard),
    ];

    for (path, view) in cases {
        let res = send(&router, Method::GET, path).await;
        assert_eq!(res.status(), StatusCode::OK, "path {}", path);
        assert_eq!(body_text(res).await, view.name());
    }

    let expected: Vec<_> = cases.iter().map(|(p, v)| (*v, p.to_string())).collect();
    assert_eq!(recorder.calls(), expected);
}

#[tokio::test]
async fn test_pages_table_dispatches_every_path() {
    let recorder = common::Recorder::default();
    let server = HttpServer::new(&common::config(TableKind::Pages), &recorder.views());
    let router = server.router();

    for (path, view) in [
        ("/", View::AdminLogin),
        ("/admin_login/", View::AdminLogin),
        ("/dashboard/", View::AdminDashboard),
    ] {
        let res = send(&router, Method::GET, path).await;
        assert_eq!(res.status(), StatusCode::OK, "path {}", path);
        assert_eq!(body_text(res).await, view.name());
    }
}

#[tokio::test]
async fn test_root_depends_on_selected_table() {
    let views = Views::placeholder();

    let pages = HttpServer::new(&common::config(TableKind::Pages), &views).router();
    let site = HttpServer::new(&common::config(TableKind::Site), &views).router();

    assert_eq!(body_text(send(&pages, Method::GET, "/").await).await, "admin_login");
    assert_eq!(body_text(send(&site, Method::GET, "/").await).await, "home");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let recorder = common::Recorder::default();
    for table in [TableKind::Pages, TableKind::Site] {
        let router = HttpServer::new(&common::config(table), &recorder.views()).router();

        let res = send(&router, Method::GET, "/nonexistent/").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(res).await, "Not Found");
    }
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn test_paths_from_other_table_are_not_found() {
    let router = HttpServer::new(&common::config(TableKind::Pages), &Views::placeholder()).router();

    for path in ["/about/", "/contact/", "/admin/dashboard/"] {
        let res = send(&router, Method::GET, path).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {}", path);
    }
}

#[tokio::test]
async fn test_any_method_dispatches() {
    let router = HttpServer::new(&common::config(TableKind::Site), &Views::placeholder()).router();

    let res = send(&router, Method::POST, "/contact/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "contact");
}

#[tokio::test]
async fn test_append_slash_redirect() {
    let router = HttpServer::new(&common::config(TableKind::Site), &Views::placeholder()).router();

    let res = send(&router, Method::GET, "/about?ref=nav").await;
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[header::LOCATION], "/about/?ref=nav");

    let res = send(&router, Method::GET, "/admin/dashboard").await;
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[header::LOCATION], "/admin/dashboard/");

    // No slashed route to redirect to.
    let res = send(&router, Method::GET, "/missing").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Unsafe methods are not redirected.
    let res = send(&router, Method::POST, "/about").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_append_slash_disabled() {
    let mut config = common::config(TableKind::Site);
    config.routing.append_slash = false;
    let router = HttpServer::new(&config, &Views::placeholder()).router();

    let res = send(&router, Method::GET, "/about").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let router = HttpServer::new(&common::config(TableKind::Site), &Views::placeholder()).router();

    let res = send(&router, Method::GET, "/").await;
    let id = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());

    let res = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/nonexistent/")
                .header("x-request-id", "client-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()["x-request-id"], "client-42");
}

#[tokio::test]
async fn test_handler_sees_resolved_route() {
    let echo = handler_fn("echo", |req: Request<Body>| async move {
        let resolved = req.extensions().get::<ResolvedRoute>().cloned();
        match resolved {
            Some(r) => format!("{}|{}", r.pattern, r.name.unwrap_or_default()).into_response(),
            None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    });
    let views = Views::from_fn(|_| echo.clone());
    let router = HttpServer::new(&common::config(TableKind::Pages), &views).router();

    assert_eq!(body_text(send(&router, Method::GET, "/admin_login/").await).await, "admin_login/|home");
    // The root route's empty name reads as unnamed.
    assert_eq!(body_text(send(&router, Method::GET, "/").await).await, "|");
}

#[tokio::test]
async fn test_percent_encoded_path_dispatches() {
    let recorder = common::Recorder::default();
    let router = HttpServer::new(&common::config(TableKind::Site), &recorder.views()).router();

    let res = send(&router, Method::GET, "/ab%6Fut/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "about");

    let res = send(&router, Method::GET, "/admin%2Flogin/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "admin_login");

    // Handlers still see the path as it was sent.
    assert_eq!(
        recorder.calls(),
        vec![
            (View::About, "/ab%6Fut/".to_string()),
            (View::AdminLogin, "/admin%2Flogin/".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_append_slash_on_encoded_path_keeps_encoding() {
    let router = HttpServer::new(&common::config(TableKind::Site), &Views::placeholder()).router();

    let res = send(&router, Method::GET, "/cont%61ct").await;
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[header::LOCATION], "/cont%61ct/");
}

#[tokio::test(start_paused = true)]
async fn test_slow_handler_times_out() {
    let slow = handler_fn("slow", |_req: Request<Body>| async move {
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        StatusCode::OK.into_response()
    });
    let views = Views::from_fn(|_| slow.clone());

    let mut config = common::config(TableKind::Site);
    config.timeouts.request_secs = 1;
    let router = HttpServer::new(&config, &views).router();

    let res = send(&router, Method::GET, "/about/").await;
    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(res.headers().contains_key("x-request-id"));
}
