mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{get_page, portal, post_json, send, PROFILE_NAME};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

async fn location_of(app: &axum::Router, request: Request<Body>) -> (StatusCode, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (response.status(), location)
}

fn ready(section: &JsonValue) -> &JsonValue {
    assert_eq!(section["state"], "ready", "section not ready: {}", section);
    &section["data"]
}

#[tokio::test]
async fn dashboard_fetches_profile_then_applications() {
    let app = portal().await;
    let (status, body) = send(&app, get_page("/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "dashboard");
    assert_eq!(body["user"], "Jane Doe");

    let view = &body["view"];
    let profile = ready(&view["profile"]);
    assert_eq!(profile["name"], PROFILE_NAME);
    assert_eq!(profile["email"]["masked"], "jan*@test.io");
    assert_eq!(profile["completion_label"], "100% Completed");

    let jobs = ready(&view["jobs"]);
    assert_eq!(jobs[0]["match_score"], 87);
    assert_eq!(jobs[1]["match_score"], 100);
    assert_eq!(jobs[1]["rotation"], JsonValue::Null);

    // The fake backend echoes the candidate id as the date.
    let applications = ready(&view["applications"]);
    assert_eq!(applications[0]["summary"], "Shortlisted on CAND-001");

    assert_eq!(
        view["interviews"],
        json!({"state": "empty", "data": {"message": "No interviews scheduled"}})
    );
    assert_eq!(
        view["actionables"],
        json!({"state": "empty", "data": {"message": "No actionables available"}})
    );
}

#[tokio::test]
async fn guest_dashboard_shows_profile_failure() {
    let app = portal().await;
    let request = Request::builder().uri("/dashboard").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["view"]["profile"],
        json!({"state": "empty", "data": {"message": "Failed to load profile"}})
    );
    assert_eq!(
        body["view"]["applications"],
        json!({"state": "empty", "data": {"message": "No applications found"}})
    );
}

#[tokio::test]
async fn root_and_direct_entries_land_on_dashboard() {
    let app = portal().await;

    let (status, location) = location_of(&app, get_page("/")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/dashboard"));

    let direct = Request::builder()
        .uri("/profile")
        .header(header::ACCEPT, "text/html")
        .header(header::HOST, "portal.test")
        .body(Body::empty())
        .unwrap();
    let (status, location) = location_of(&app, direct).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/dashboard"));

    let navigated = Request::builder()
        .uri("/profile")
        .header(header::ACCEPT, "text/html")
        .header(header::HOST, "portal.test")
        .header(header::REFERER, "http://portal.test/dashboard")
        .body(Body::empty())
        .unwrap();
    let (status, _) = location_of(&app, navigated).await;
    assert_eq!(status, StatusCode::OK);

    let reloaded = Request::builder()
        .uri("/dashboard/contract")
        .header(header::ACCEPT, "text/html")
        .header(header::HOST, "portal.test")
        .body(Body::empty())
        .unwrap();
    let (status, location) = location_of(&app, reloaded).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(location, None);
}

#[tokio::test]
async fn contract_table_sorts_and_opens_panels() {
    let app = portal().await;

    let (_, body) = send(&app, get_page("/dashboard/contract")).await;
    let view = &body["view"];
    assert_eq!(view["header"]["title"], "Offshore Platform B");
    let table = ready(&view["table"]);
    let weeks: Vec<u64> = table["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["week_number"].as_u64().unwrap())
        .collect();
    assert_eq!(weeks, vec![3, 2, 1]);
    assert_eq!(table["rows"][0]["action"], "view");
    assert_eq!(table["rows"][1]["action"], "edit");

    let (_, body) = send(&app, get_page("/dashboard/contract?sort=week&dir=desc&toggle=hours")).await;
    let hours: Vec<f64> = ready(&body["view"]["table"])["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["hours"].as_f64().unwrap())
        .collect();
    assert_eq!(hours, vec![12.0, 36.0, 40.0]);

    let (_, body) = send(&app, get_page("/dashboard/contract?panel=view&week=2")).await;
    let panel = &body["view"]["panel"];
    assert_eq!(panel["week_number"], 2);
    assert_eq!(panel["days"][0]["hours"], "8");
    assert_eq!(panel["days"][0]["remarks"], "-");
    assert_eq!(panel["days"][1]["hours"], "-");
    assert_eq!(panel["total_hours"], 8);

    let (_, body) = send(&app, get_page("/dashboard/contract?panel=create")).await;
    assert_eq!(body["view"]["panel"]["days"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn timesheet_action_keeps_stored_hours_for_bad_input() {
    let app = portal().await;
    let (status, body) = send(
        &app,
        post_json(
            "/dashboard/contract/timesheet",
            json!({
                "action": "submit",
                "week_number": 2,
                "days": [
                    {"weekday": "Sunday", "date_label": "Jan 05", "hours": "9x", "remarks": "", "locked": false},
                    {"weekday": "Monday", "date_label": "Jan 06", "hours": "7h", "remarks": "", "locked": false},
                    {"weekday": "Tuesday", "date_label": "Jan 07", "hours": "5", "remarks": "", "locked": false}
                ]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Sunday keeps the stored 8, Monday had nothing stored.
    assert_eq!(body, json!({"week_number": 2, "total_hours": 13, "status": "submitted"}));
}

#[tokio::test]
async fn profile_edit_round_trip() {
    let app = portal().await;

    let (_, body) = send(&app, get_page("/profile/edit")).await;
    let view = &body["view"];
    assert_eq!(view["options"]["locations"][0]["name"], "Doha");
    let form = ready(&view["form"]).clone();
    assert_eq!(form["experience"], "3 Years 0 Months");
    assert_eq!(form["key_skills"], json!(["Rust", "SQL"]));

    let request = post_json("/profile/edit", form.clone());
    let (status, location) = location_of(&app, request).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/profile"));

    let mut invalid = form;
    invalid["email"] = json!("not-an-email");
    let (status, body) = send(&app, post_json("/profile/edit", invalid)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["view"]["error"].is_string());
    assert_eq!(ready(&body["view"]["form"])["email"], "not-an-email");
}

#[tokio::test]
async fn history_shows_latest_and_confirms_with_yes() {
    let app = portal().await;

    let (_, body) = send(&app, get_page("/profile-history")).await;
    let view = &body["view"];
    assert_eq!(view["displayed_version_id"], "VER-2");
    let versions = ready(&view["versions"]);
    assert_eq!(versions[0]["label"], "Version 1.0");
    assert_eq!(versions[0]["is_draft"], true);
    assert_eq!(versions[1]["is_latest"], true);

    let (_, body) = send(
        &app,
        post_json(
            "/profile-history/latest",
            json!({"version_id": "VER-1", "confirmation": "nope"}),
        ),
    )
    .await;
    assert_eq!(body["view"]["confirm_error"], "Please type 'YES' to confirm");

    let (_, body) = send(
        &app,
        post_json(
            "/profile-history/latest",
            json!({"version_id": "VER-1", "confirmation": "YES"}),
        ),
    )
    .await;
    assert_eq!(body["view"]["confirm_error"], JsonValue::Null);
    assert_eq!(ready(&body["view"]["versions"])[0]["is_latest"], true);
}

#[tokio::test]
async fn interview_drawer_and_slot_acceptance() {
    let app = portal().await;

    let (status, body) = send(&app, get_page("/interview")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing interview_slot");

    let (_, body) = send(&app, get_page("/interview?interview_slot=INT-1&slot=SLOT-1")).await;
    let drawer = ready(&body["view"]["drawer"]);
    assert_eq!(drawer["slots"][0]["date"], "Jan 5, 2025");
    assert_eq!(drawer["slots"][0]["time"], "2:30 PM");
    assert_eq!(drawer["can_submit"], true);

    let (_, body) = send(
        &app,
        post_json(
            "/interview/accept",
            json!({"interview_name": "INT-1", "slot_name": "SLOT-1"}),
        ),
    )
    .await;
    assert_eq!(body["view"]["toast"], json!({"kind": "success", "message": "Slot Accepted"}));
    assert_eq!(body["view"]["redirect"], "/dashboard");

    let (_, body) = send(
        &app,
        post_json(
            "/interview/accept",
            json!({"interview_name": "INT-1", "slot_name": "SLOT-2"}),
        ),
    )
    .await;
    assert_eq!(
        body["view"]["toast"],
        json!({"kind": "error", "message": "Interview slot accepted failed"})
    );
    assert_eq!(body["view"]["redirect"], JsonValue::Null);
}

#[tokio::test]
async fn salary_offer_and_job_pages() {
    let app = portal().await;

    let (_, body) = send(&app, get_page("/salary?proposal=1")).await;
    let drawer = ready(&body["view"]);
    assert_eq!(ready(&drawer["proposal"])["version"], "2");
    assert_eq!(drawer["next_href"], "/salary?proposal=0");

    let (_, body) = send(&app, post_json("/salary/accept", json!({"proposal": 1}))).await;
    assert_eq!(body, json!({"status": "accepted", "version": "2"}));
    let (status, _) = send(&app, post_json("/salary/clarify", json!({"proposal": 9}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, get_page("/offer")).await;
    let offer = ready(&body["view"]);
    assert_eq!(offer["candidate"]["initials"], "JD");
    assert_eq!(offer["compensation"][0]["amount"], "$12,500");
    assert_eq!(offer["terms"]["byClient"], json!(["Flights"]));

    let (_, body) = send(&app, get_page("/jobs/JOB-1")).await;
    assert_eq!(ready(&body["view"])["rotation"], "4 On / 4 Off");
    let (_, body) = send(&app, get_page("/jobs/NOPE")).await;
    assert_eq!(
        body["view"],
        json!({"state": "empty", "data": {"message": "Job not found"}})
    );
}
