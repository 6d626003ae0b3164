//! Handler references the URL tables are built from.
//!
//! Views are external collaborators of the routing layer. The placeholder set
//! answers with the view name only, so a deployment can exercise routing
//! before real views are plugged in.

use std::fmt;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::routing::{handler_fn, SharedHandler};

/// Identifies one of the site's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Contact,
    AdminLogin,
    AdminDashboard,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::About,
        View::Contact,
        View::AdminLogin,
        View::AdminDashboard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Contact => "contact",
            View::AdminLogin => "admin_login",
            View::AdminDashboard => "admin_dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of handlers a route table dispatches to.
#[derive(Clone)]
pub struct Views {
    pub home: SharedHandler,
    pub about: SharedHandler,
    pub contact: SharedHandler,
    pub admin_login: SharedHandler,
    pub admin_dashboard: SharedHandler,
}

impl Views {
    /// Build a view set by asking `make` for each view's handler.
    pub fn from_fn(mut make: impl FnMut(View) -> SharedHandler) -> Self {
        Self {
            home: make(View::Home),
            about: make(View::About),
            contact: make(View::Contact),
            admin_login: make(View::AdminLogin),
            admin_dashboard: make(View::AdminDashboard),
        }
    }

    /// Handlers that reply `200 text/plain` with their view name.
    pub fn placeholder() -> Self {
        Self::from_fn(placeholder)
    }
}

fn placeholder(view: View) -> SharedHandler {
    let name = view.name();
    handler_fn(name, move |_req| async move {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            name,
        )
            .into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    #[test]
    fn test_view_names() {
        let names: Vec<_> = View::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            vec!["home", "about", "contact", "admin_login", "admin_dashboard"]
        );
        assert_eq!(View::AdminLogin.to_string(), "admin_login");
    }

    #[tokio::test]
    async fn test_placeholder_names_view() {
        let views = Views::placeholder();
        let handlers = [
            (View::Home, &views.home),
            (View::About, &views.about),
            (View::Contact, &views.contact),
            (View::AdminLogin, &views.admin_login),
            (View::AdminDashboard, &views.admin_dashboard),
        ];
        for (view, handler) in handlers {
            assert_eq!(handler.label(), view.name());

            let res = handler
                .call(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await;
            assert_eq!(res.status(), StatusCode::OK);
            let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
            assert_eq!(&body[..], view.name().as_bytes());
        }
    }
}
