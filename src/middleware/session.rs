//! Navigation cookies and the direct-entry guard for page routes.
//!
//! The `user_id` and `full_name` cookies are set by the backend on login. They
//! only steer navigation and are never trusted for anything else.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, Method},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::utils::cookies::parse_cookie_header;

pub const USER_ID_COOKIE: &str = "user_id";
pub const FULL_NAME_COOKIE: &str = "full_name";
const GUEST: &str = "Guest";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    pub user_id: Option<String>,
    pub full_name: Option<String>,
}

impl SessionCookies {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut session = SessionCookies::default();
        for value in headers.get_all(header::COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            for (name, value) in parse_cookie_header(raw) {
                if value.is_empty() {
                    continue;
                }
                match name.as_str() {
                    USER_ID_COOKIE => session.user_id = Some(value),
                    FULL_NAME_COOKIE => session.full_name = Some(value),
                    _ => {}
                }
            }
        }
        session
    }

    pub fn is_guest(&self) -> bool {
        match self.user_id.as_deref() {
            None => true,
            Some(id) => id.eq_ignore_ascii_case(GUEST),
        }
    }

    /// The user id to fetch the profile with, if any.
    pub fn user(&self) -> Option<&str> {
        if self.is_guest() {
            None
        } else {
            self.user_id.as_deref()
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for SessionCookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionCookies::from_headers(&parts.headers))
    }
}

/// A browser page load that did not come from inside the portal lands on the
/// dashboard instead of a deep page.
pub async fn redirect_direct_entry(req: Request, next: Next) -> Response {
    if is_direct_entry(&req) {
        debug!(path = %req.uri().path(), "Direct page entry, sending to dashboard");
        return Redirect::to("/dashboard").into_response();
    }
    next.run(req).await
}

fn is_direct_entry(req: &Request) -> bool {
    if req.method() != Method::GET {
        return false;
    }
    let path = req.uri().path();
    let exempt = path == "/"
        || path == "/health"
        || path == "/dashboard"
        || path.starts_with("/dashboard/")
        || path.starts_with("/api/");
    if exempt {
        return false;
    }

    let headers = req.headers();
    let wants_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);
    if !wants_html {
        return false;
    }

    !is_same_origin_referer(headers)
}

fn is_same_origin_referer(headers: &HeaderMap) -> bool {
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| url::Url::parse(v).ok());

    match (host, referer) {
        (Some(host), Some(referer)) => {
            let referer_host = match (referer.host_str(), referer.port()) {
                (Some(h), Some(p)) => format!("{}:{}", h, p),
                (Some(h), None) => h.to_string(),
                _ => return false,
            };
            referer_host.eq_ignore_ascii_case(host)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::HeaderValue};

    fn page(path: &str, referer: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder()
            .uri(path)
            .header(header::HOST, "portal.test")
            .header(header::ACCEPT, "text/html,application/xhtml+xml");
        if let Some(referer) = referer {
            builder = builder.header(header::REFERER, referer);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn reads_navigation_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("sid=abc; user_id=jane%40mail.test; full_name=Jane%20Doe"),
        );
        let session = SessionCookies::from_headers(&headers);
        assert_eq!(session.user_id.as_deref(), Some("jane@mail.test"));
        assert_eq!(session.full_name.as_deref(), Some("Jane Doe"));
        assert!(!session.is_guest());
    }

    #[test]
    fn guest_cookie_has_no_user() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("user_id=Guest"));
        let session = SessionCookies::from_headers(&headers);
        assert!(session.is_guest());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn only_outside_page_loads_are_redirected() {
        assert!(is_direct_entry(&page("/profile", None)));
        assert!(is_direct_entry(&page("/offer", Some("https://elsewhere.test/x"))));
        assert!(!is_direct_entry(&page("/profile", Some("http://portal.test/dashboard"))));
        assert!(!is_direct_entry(&page("/dashboard/contract", None)));
        assert!(is_direct_entry(&page("/dashboards", None)));
        assert!(!is_direct_entry(&page("/dashboard", None)));
        assert!(!is_direct_entry(&page("/api/candidate/contract", None)));
    }
}
