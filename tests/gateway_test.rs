mod common;

use candidate_portal::{
    dto::candidate_dto::SlotAcceptPayload,
    services::gateway_service::{DataSource, PortalGateway},
};
use common::{fake_backend, spawn, PROFILE_NAME, USER_ID};

#[tokio::test]
async fn unwraps_each_resource_envelope() {
    let gateway = PortalGateway::new(spawn(fake_backend()).await);

    let candidate = gateway.single_candidate(USER_ID.to_string()).await;
    assert_eq!(candidate.len(), 1);

    let jobs = gateway.recommended_jobs().await;
    assert_eq!(jobs[0].job_code, "JOB-1");
    assert_eq!(jobs[0].match_score, 87.0);

    let versions = gateway.history(Some(PROFILE_NAME.to_string())).await;
    assert_eq!(versions.len(), 2);
    assert!(versions[1].is_latest());

    let slot = gateway.interview_slot("INT-1".to_string()).await.unwrap();
    assert_eq!(slot.available_slots.len(), 2);

    assert_eq!(gateway.locations().await[0].name, "Doha");
    assert_eq!(gateway.currencies().await[0].symbol, "$");
    assert_eq!(gateway.countries().await[0].country_name, "Qatar");
    assert_eq!(gateway.contract().await[0].weeks.len(), 3);
    assert_eq!(gateway.salary().await.unwrap().proposals.len(), 2);
    assert_eq!(
        gateway.offer().await.unwrap().candidate.unwrap().name,
        "Jane Doe"
    );
}

#[tokio::test]
async fn failed_reads_fall_back_to_empty() {
    let gateway = PortalGateway::new(spawn(fake_backend()).await);

    assert!(gateway.actionables().await.is_empty());
    assert!(gateway.single_candidate("nobody".to_string()).await.is_empty());
    assert!(gateway.history(None).await.is_empty());

    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = PortalGateway::new(format!("http://{}/", closed.local_addr().unwrap()));
    drop(closed);
    assert!(dead.recommended_jobs().await.is_empty());
    assert!(dead.offer().await.is_none());
    assert!(dead.job_detail("JOB-1".to_string()).await.is_none());
}

#[tokio::test]
async fn writes_surface_their_outcome() {
    let gateway = PortalGateway::new(spawn(fake_backend()).await);

    let accepted = gateway
        .accept_slot(SlotAcceptPayload {
            interview_name: "INT-1".into(),
            slot_name: "SLOT-1".into(),
        })
        .await
        .unwrap();
    assert!(accepted.is_success());

    let refused = gateway
        .accept_slot(SlotAcceptPayload {
            interview_name: "INT-1".into(),
            slot_name: "SLOT-9".into(),
        })
        .await
        .unwrap();
    assert!(!refused.is_success());
}
