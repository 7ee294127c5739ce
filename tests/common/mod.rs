#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query},
    http::{header, Request, StatusCode},
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use candidate_portal::{app, config::Config, AppState};
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const USER_ID: &str = "jane@test.io";
pub const PROFILE_NAME: &str = "CAND-001";

pub fn test_config(backend_url: &str, portal_base_url: &str) -> Config {
    Config {
        server_address: "127.0.0.1:0".into(),
        backend_url: backend_url.into(),
        backend_api_token: Some("key:secret".into()),
        mock_api_url: backend_url.into(),
        portal_base_url: portal_base_url.into(),
        production: false,
        max_upload_mb: 1,
    }
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

/// Starts the fake backend and a live portal in front of it. The returned
/// router is the same portal, for driving with `oneshot`.
pub async fn portal() -> Router {
    let backend_url = spawn(fake_backend()).await;

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let portal_url = format!("http://{}", listener.local_addr().expect("addr"));
    let router = app(AppState::from_config(test_config(&backend_url, &portal_url)));

    let served = router.clone();
    tokio::spawn(async move {
        axum::serve(listener, served).await.expect("serve");
    });
    router
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, JsonValue) {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub fn get_page(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, format!("user_id={}; full_name=Jane%20Doe", USER_ID))
        .body(Body::empty())
        .expect("request")
}

pub fn post_json(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("user_id={}", USER_ID))
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn candidate_body() -> JsonValue {
    json!({
        "message": {
            "status": "success",
            "profile": {
                "name": PROFILE_NAME,
                "full_name": "Jane Doe",
                "email": "jane@test.io",
                "contact_no": "5551234567",
                "current_location": "Doha",
                "state": null
            },
            "profile_version": {
                "experience_years": 3,
                "key_skills": ["Rust", {"name": "SQL"}],
                "current_salary": "5200",
                "current_salary_currency": "USD"
            }
        }
    })
}

fn contract_body() -> JsonValue {
    json!([{
        "contract_title": "Offshore Platform B",
        "contract_subtitle": "Rig Engineer",
        "year": 2025,
        "weeks": [
            {"week_number": 1, "date_range": "Dec 29 - Jan 04", "total_hours": 40, "status": "approved", "days": []},
            {"week_number": 2, "date_range": "Jan 05 - Jan 11", "total_hours": 36, "status": "draft", "days": [
                {"weekday": "Sunday", "date_label": "Jan 05", "hours": 8, "remarks": "", "locked": false},
                {"weekday": "Monday", "date_label": "Jan 06", "hours": "", "remarks": "", "locked": true}
            ]},
            {"week_number": 3, "date_range": "Jan 12 - Jan 18", "total_hours": 12, "status": "Sent for approval", "days": []}
        ]
    }])
}

fn salary_body() -> JsonValue {
    json!({
        "candidate": {"name": "Jane Doe", "profession": "Rig Engineer"},
        "proposals": [
            {"version": "1", "status": "Rejected", "salary": {"amount": "8000", "type": "Monthly"}},
            {"version": "2", "status": "Pending", "salary": {"amount": "8500", "type": "Monthly"}}
        ]
    })
}

fn offer_body() -> JsonValue {
    json!({
        "candidate": {
            "name": "Jane Doe",
            "profession": "Rig Engineer",
            "projectInfo": {"projectName": "Offshore B", "location": "Doha"},
            "workPolicy": {"monthBillRate": 15000, "vacation": 30},
            "terms": {"byClient": ["Flights"], "byCandidate": ["Visa"]},
            "compensation": {"currencySymbol": "$", "baseSalary": 12500, "totalSalary": "$15,000"}
        }
    })
}

/// Stand-in for the external backend, answering in its envelope shapes.
pub fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/candidate/get",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                // The history page asks for older versions by their id.
                match q.get("user_id").map(String::as_str) {
                    Some(USER_ID) | Some("VER-2") => (StatusCode::OK, Json(candidate_body())),
                    _ => (StatusCode::NOT_FOUND, Json(json!({"exc": "DoesNotExistError"}))),
                }
            }),
        )
        .route(
            "/api/candidate/recommended-jobs",
            get(|| async {
                Json(json!({"message": {"data": [
                    {"id": "1", "JobTitle": "Rig Engineer", "JobID": "JOB-1", "Location": "Doha",
                     "MatchScore": "87", "Status": "Open", "rotation": "28/28"},
                    {"id": "2", "JobTitle": "Crane Operator", "JobID": "JOB-2", "MatchScore": 140,
                     "rotation": "None"}
                ]}}))
            }),
        )
        .route(
            "/api/candidate/job-application",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let candidate = q.get("candidate_id").cloned().unwrap_or_default();
                Json(json!({"message": {"data": [
                    {"id": "a1", "job_title": "Rig Engineer", "job_id": "JOB-1",
                     "status": "Shortlisted", "date": candidate}
                ]}}))
            }),
        )
        .route(
            "/api/candidate/scheduled-interview",
            get(|| async { Json(json!({"data": []})) }),
        )
        .route(
            "/api/candidate/actionables",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/candidate/history",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                if q.get("name").map(String::as_str) != Some(PROFILE_NAME) {
                    return Json(json!({"versions": []}));
                }
                Json(json!({"versions": [
                    {"id": "VER-1", "version": 1, "created_by": "Jane", "created_on": "2025-01-02",
                     "created_time": "10:00", "status": "Draft", "is_latest": 0},
                    {"id": "VER-2", "version": 2, "created_by": "Jane", "created_on": "2025-02-03",
                     "created_time": "11:30", "status": "Approved", "is_latest": 1}
                ]}))
            }),
        )
        .route("/api/candidate/contract", get(|| async { Json(contract_body()) }))
        .route(
            "/api/candidate/slot_get",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                Json(json!({"message": {"data": {
                    "job_title": "Rig Engineer",
                    "round": q.get("interview_id").cloned().unwrap_or_default(),
                    "interview_type": "Technical",
                    "interview_mode": "Online",
                    "available_slots": [
                        {"id": "1", "name": "SLOT-1", "slot_date": "2025-01-05", "slot_time": "14:30:00"},
                        {"id": "2", "name": "SLOT-2", "slot_date": "2025-01-06", "slot_time": "09:00:00"}
                    ]
                }}}))
            }),
        )
        .route(
            "/api/candidate/slot_accept",
            post(|Json(body): Json<JsonValue>| async move {
                let status = if body["slot_name"] == "SLOT-1" { "success" } else { "failed" };
                Json(json!({"message": {"status": status, "message": "Slot Accepted"}}))
            }),
        )
        .route(
            "/api/candidate/profile_edit",
            post(
                |Query(q): Query<HashMap<String, String>>, Json(body): Json<JsonValue>| async move {
                    let ok = q.get("profile_name").map(String::as_str) == Some(PROFILE_NAME)
                        && body["profile_version"]["key_skills"][0]["name"] == "Rust";
                    Json(json!({"message": {"status": if ok { "success" } else { "failed" }}}))
                },
            ),
        )
        .route("/api/jobs/salary", get(|| async { Json(salary_body()) }))
        .route("/api/jobs/offer", get(|| async { Json(offer_body()) }))
        .route(
            "/api/job/:job_id/candidates/count",
            get(|Path(job_id): Path<String>| async move {
                Json(json!({"job": job_id, "count": 4}))
            }),
        )
        .route(
            "/api/masters/location",
            get(|| async { Json(json!({"data": [{"id": "1", "name": "Doha", "code": "DOH"}]})) }),
        )
        .route(
            "/api/masters/currency",
            get(|| async { Json(json!({"data": [{"code": "USD", "name": "US Dollar", "symbol": "$"}]})) }),
        )
        .route(
            "/api/masters/country",
            get(|| async { Json(json!([{"country_code": "QA", "country_name": "Qatar"}])) }),
        )
        .route(
            "/api/masters/keyskills",
            get(|| async { Json(json!({"data": ["Rust", "SQL"]})) }),
        )
        .route(
            "/api/masters/singleget",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                match q.get("job_id").map(String::as_str) {
                    Some("JOB-1") => Json(json!({"data": {
                        "name": "JOB-1",
                        "location": "Doha",
                        "rotation_on_weeks": 4,
                        "rotation_off_weeks": 4,
                        "key_skills": ["Rust"]
                    }})),
                    _ => Json(json!({"data": {}})),
                }
            }),
        )
        .route(
            "/api/method/login",
            post(|Json(body): Json<JsonValue>| async move {
                if body["usr"] == USER_ID && body["pwd"] == "secret" {
                    (
                        StatusCode::OK,
                        AppendHeaders([
                            (header::SET_COOKIE, "sid=abc; Domain=backend.test; Path=/; HttpOnly"),
                            (header::SET_COOKIE, "user_id=jane%40test.io; Domain=backend.test"),
                        ]),
                        Json(json!({"message": "Logged In", "full_name": "Jane Doe", "home_page": "/app"})),
                    )
                        .into_response()
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"message": "Incorrect password"})),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/api/method/upload_file",
            post(|| async { Json(json!({"message": {"file_url": "/files/cv.pdf"}})) }),
        )
}
