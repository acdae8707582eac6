use crate::helpers::TestApp;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/health", None).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get("/functions/v1/unknown", None).await;

    assert_eq!(response.status().as_u16(), 404);
}
