use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    dto::auth_dto::{LoginPayload, LoginSuccess, LoginUser},
    error::Result,
    utils::cookies::{normalize_backend_cookie, split_set_cookie},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in; backend cookies re-issued for this origin"),
        (status = 400, description = "Username or password missing"),
        (status = 401, description = "Credentials rejected")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Response> {
    if payload.validate().is_err() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Username and password are required" })),
        )
            .into_response());
    }

    let outcome = state.backend.login(&payload).await?;
    if !outcome.response.is_logged_in() {
        warn!(usr = %payload.usr, "Login rejected");
        let error = outcome
            .response
            .message
            .unwrap_or_else(|| "Invalid credentials".to_string());
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": error })),
        )
            .into_response());
    }

    info!(usr = %payload.usr, "Login succeeded");
    let body = LoginSuccess {
        success: true,
        message: "Login successful".to_string(),
        user: LoginUser {
            full_name: outcome.response.full_name,
            home_page: outcome.response.home_page,
            email: payload.usr,
        },
    };

    let mut response = (StatusCode::OK, Json(body)).into_response();
    let cookies = outcome.set_cookies.iter().flat_map(|raw| split_set_cookie(raw));
    for raw in cookies {
        let cookie = normalize_backend_cookie(&raw, state.config.production);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Dropping unrepresentable cookie"),
        }
    }
    Ok(response)
}
