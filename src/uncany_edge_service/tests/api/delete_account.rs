use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{SERVICE_ROLE_KEY, TestApp, header_value};

#[tokio::test]
async fn preflight_is_answered_without_authentication() {
    let app = TestApp::spawn().await;

    let response = app.options("/delete-account").await;

    assert_eq!(response.status().as_u16(), 204);
    assert_eq!(header_value(&response, "access-control-allow-origin"), Some("*"));
    assert_eq!(
        header_value(&response, "access-control-allow-methods"),
        Some("POST, OPTIONS")
    );
    assert!(app.supabase.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_authorization_is_rejected_before_any_mutation() {
    let app = TestApp::spawn().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&app.supabase)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.supabase)
        .await;

    let response = app.post("/delete-account", None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(header_value(&response, "access-control-allow-origin"), Some("*"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "authentication required"}));
}

#[tokio::test]
async fn invalid_token_is_rejected_before_any_mutation() {
    let app = TestApp::spawn().await;
    app.signed_in_user().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.supabase)
        .await;

    let response = app.post("/delete-account", Some("forged-token")).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "invalid token"}));
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;

    let response = app.get("/delete-account", Some(&user.token)).await;

    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn deletes_the_callers_account() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_soft_deletes(204).await;
    app.mock_identity_deletion(&user, 200).await;

    let response = app.post("/delete-account", Some(&user.token)).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        header_value(&response, "access-control-allow-methods"),
        Some("POST, OPTIONS")
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"message": "account deleted"}));

    let requests = app.supabase.received_requests().await.unwrap();

    let profile = requests
        .iter()
        .find(|r| r.method.as_str() == "PATCH" && r.url.path() == "/rest/v1/users")
        .expect("profile was not soft deleted");
    assert_eq!(profile.url.query(), Some(format!("id=eq.{}", user.id).as_str()));
    let patch: serde_json::Value = serde_json::from_slice(&profile.body).unwrap();
    assert_eq!(patch["email"], format!("deleted_{}@uncany.app", user.id));
    assert!(patch["deleted_at"].is_string());

    let reservations = requests
        .iter()
        .find(|r| r.method.as_str() == "PATCH" && r.url.path() == "/rest/v1/reservations")
        .expect("reservations were not soft deleted");
    assert_eq!(
        reservations.url.query(),
        Some(format!("teacher_id=eq.{}&deleted_at=is.null", user.id).as_str())
    );

    let deletion = requests
        .iter()
        .find(|r| r.method.as_str() == "DELETE")
        .expect("identity was not deleted");
    assert_eq!(deletion.url.path(), format!("/auth/v1/admin/users/{}", user.id));
    assert_eq!(
        deletion
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok()),
        Some(format!("Bearer {SERVICE_ROLE_KEY}").as_str())
    );
}

#[tokio::test]
async fn failed_soft_deletes_do_not_block_deletion() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_soft_deletes(500).await;
    app.mock_identity_deletion(&user, 200).await;

    let response = app.post("/delete-account", Some(&user.token)).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn failed_identity_deletion_is_reported_generically() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_soft_deletes(204).await;
    app.mock_identity_deletion(&user, 500).await;

    let response = app.post("/delete-account", Some(&user.token)).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(header_value(&response, "access-control-allow-origin"), Some("*"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "deletion failed, contact support"}));
}

#[tokio::test]
async fn already_deleted_identity_counts_as_success() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_soft_deletes(204).await;
    app.mock_identity_deletion(&user, 404).await;

    let response = app.post("/delete-account", Some(&user.token)).await;

    assert_eq!(response.status().as_u16(), 200);
}
