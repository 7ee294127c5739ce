mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use candidate_portal::{app, AppState};
use common::{portal, post_json, send, test_config, PROFILE_NAME, USER_ID};
use serde_json::json;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn candidate_routes_pass_backend_json_through() {
    let app = portal().await;

    let (status, body) = send(&app, get(&format!("/api/candidate/get?user_id={}", USER_ID))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["profile"]["name"], PROFILE_NAME);

    let (status, body) = send(&app, get("/api/candidate/recommended-jobs?page=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, get("/api/candidate/contract")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["contract_title"], "Offshore Platform B");

    let (status, body) = send(&app, get("/api/masters/country")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["country_code"], "QA");
}

#[tokio::test]
async fn missing_required_query_is_rejected() {
    let app = portal().await;

    for (uri, param) in [
        ("/api/candidate/get", "user_id"),
        ("/api/candidate/job-application", "candidate_id"),
        ("/api/candidate/slot_get?interview_id=", "interview_id"),
        ("/api/jobs/info/summary", "jobId"),
        ("/api/masters/singleget", "job_id"),
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["message"], format!("Missing {}", param));
    }
}

#[tokio::test]
async fn backend_errors_keep_their_status() {
    let app = portal().await;

    let (status, body) = send(&app, get("/api/candidate/get?user_id=nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Error from cloud API");

    let (status, body) = send(&app, get("/api/candidate/actionables")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error from cloud API");
    assert_eq!(body["error"], "boom");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    let app = app(AppState::from_config(test_config(&dead_url, &dead_url)));
    let (status, body) = send(&app, get("/api/candidate/contract")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "External API unavailable");
}

#[tokio::test]
async fn job_summary_reads_count_from_mock_api() {
    let app = portal().await;
    let (status, body) = send(&app, get("/api/jobs/info/summary?jobId=JOB-7&access_token=t")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"job": "JOB-7", "count": 4}));
}

#[tokio::test]
async fn slot_accept_and_profile_edit_validate_input() {
    let app = portal().await;

    let (status, _) = send(
        &app,
        post_json(
            "/api/candidate/slot_accept",
            json!({"interview_name": "INT-1", "slot_name": ""}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        post_json(
            "/api/candidate/slot_accept",
            json!({"interview_name": "INT-1", "slot_name": "SLOT-1"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["status"], "success");

    let (status, body) = send(&app, post_json("/api/candidate/profile_edit", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing profile_name");
}

#[tokio::test]
async fn login_rewrites_backend_cookies() {
    let app = portal().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({"usr": USER_ID, "pwd": "secret"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<&str> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(
        cookies,
        vec![
            "sid=abc; Path=/; HttpOnly; SameSite=Lax",
            "user_id=jane%40test.io; Path=/; SameSite=Lax",
        ]
    );

    let (_, body) = send(
        &app,
        post_json("/api/auth/login", json!({"usr": USER_ID, "pwd": "secret"})),
    )
    .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["full_name"], "Jane Doe");
    assert_eq!(body["user"]["email"], USER_ID);
}

#[tokio::test]
async fn login_failures() {
    let app = portal().await;

    let (status, body) = send(&app, post_json("/api/auth/login", json!({"usr": USER_ID}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username and password are required");

    let (status, body) = send(
        &app,
        post_json("/api/auth/login", json!({"usr": USER_ID, "pwd": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"success": false, "error": "Incorrect password"}));
}

fn upload(file_name: &str, content: &[u8]) -> Request<Body> {
    let boundary = "portal-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            b = boundary,
            f = file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/candidate/file_upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn resume_upload_checks_type_before_forwarding() {
    let app = portal().await;

    let (status, body) = send(&app, upload("cv.pdf", b"%PDF-1.4 resume")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["file_url"], "/files/cv.pdf");

    let (status, body) = send(&app, upload("cv.exe", b"MZ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "File type .exe is not allowed");

    let (status, _) = send(&app, upload("cv.pdf", b"not a pdf")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
