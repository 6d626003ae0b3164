//! Handler seam between the route table and the views it dispatches to.
//!
//! The routing layer never looks inside a handler: it invokes it with the
//! request and returns whatever response it produces.

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;

/// An opaque capability invoked with a matched request.
pub trait Handler: Send + Sync {
    /// Short label for logs and listings, e.g. the view name.
    fn label(&self) -> &str;

    fn call(&self, req: Request<Body>) -> BoxFuture<'static, Response>;
}

/// Handlers are shared between the table and in-flight requests.
pub type SharedHandler = Arc<dyn Handler>;

/// Adapter returned by [`handler_fn`].
pub struct HandlerFn<F> {
    label: &'static str,
    f: F,
}

impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn label(&self) -> &str {
        self.label
    }

    fn call(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        Box::pin((self.f)(req))
    }
}

/// Wrap an async function or closure as a [`SharedHandler`].
pub fn handler_fn<F, Fut>(label: &'static str, f: F) -> SharedHandler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(HandlerFn { label, f })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_handler_fn_invokes_closure() {
        let handler = handler_fn("echo", |req: Request<Body>| async move {
            (StatusCode::ACCEPTED, req.uri().path().to_string()).into_response()
        });

        assert_eq!(handler.label(), "echo");

        let req = Request::builder().uri("/x/").body(Body::empty()).unwrap();
        let res = handler.call(req).await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);
    }
}
