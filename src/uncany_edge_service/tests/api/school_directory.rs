use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{NEIS_API_KEY, TestApp, header_value, school_envelope, school_row};

#[tokio::test]
async fn preflight_lists_allowed_methods() {
    let app = TestApp::spawn().await;

    let response = app.options("/neis-api").await;

    assert_eq!(response.status().as_u16(), 204);
    assert_eq!(
        header_value(&response, "access-control-allow-methods"),
        Some("GET, OPTIONS")
    );
    assert_eq!(
        header_value(&response, "access-control-allow-headers"),
        Some("authorization, x-client-info, apikey, content-type")
    );
}

#[tokio::test]
async fn requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app.get("/neis-api?action=search_schools&query=Seoul", None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert!(app.neis.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_returns_projected_schools() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_school_info(school_envelope(
        57,
        vec![
            school_row("7010001", "Seoul High A"),
            school_row("7010002", "Seoul High B"),
            school_row("7010003", "Seoul High C"),
        ],
    ))
    .await;

    let response = app
        .get(
            "/neis-api?action=search_schools&query=Seoul%20High&page=2&limit=3",
            Some(&user.token),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(header_value(&response, "access-control-allow-origin"), Some("*"));
    assert_eq!(header_value(&response, "access-control-allow-methods"), None);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 57);
    assert_eq!(
        body["schools"][0],
        serde_json::json!({
            "schoolId": "7010001",
            "name": "Seoul High A",
            "address": "Gangnam-daero, Seoul",
            "eduOfficeCode": "B10",
            "eduOfficeName": "Seoul Office of Education"
        })
    );
    assert_eq!(body["schools"].as_array().unwrap().len(), 3);

    let requests = app.neis.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let upstream = &requests[0];
    let params: std::collections::HashMap<_, _> = upstream.url.query_pairs().into_owned().collect();
    assert_eq!(params["KEY"], NEIS_API_KEY);
    assert_eq!(params["SCHUL_NM"], "Seoul High");
    assert_eq!(params["pIndex"], "2");
    assert_eq!(params["pSize"], "3");
    assert!(upstream.headers.get("authorization").is_none());
}

#[tokio::test]
async fn search_clamps_the_page_size() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_school_info(school_envelope(0, vec![])).await;

    let response = app
        .get("/neis-api?action=search_schools&query=Seoul&limit=1000&page=-3", Some(&user.token))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let requests = app.neis.received_requests().await.unwrap();
    let params: std::collections::HashMap<_, _> =
        requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(params["pSize"], "50");
    assert_eq!(params["pIndex"], "1");
}

#[tokio::test]
async fn invalid_input_never_reaches_upstream() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    Mock::given(method("GET"))
        .and(path("/hub/schoolInfo"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.neis)
        .await;

    let cases = [
        (
            "/neis-api?action=search_schools&query=S",
            "query must be at least 2 characters",
        ),
        (
            "/neis-api?action=search_schools&query=%3Cscript%3E",
            "special characters not allowed",
        ),
        (
            "/neis-api?action=search_schools&query=Seoul&eduOfficeCode=B10%26KEY%3Dx",
            "eduOfficeCode must be 1-10 alphanumeric characters",
        ),
        ("/neis-api?action=get_school_info", "schoolId is required"),
        (
            "/neis-api?action=get_school_info&schoolId=70105a",
            "schoolId must be numeric",
        ),
        ("/neis-api?action=drop_schools", "unsupported action"),
        ("/neis-api", "unsupported action"),
    ];

    for (route, message) in cases {
        let response = app.get(route, Some(&user.token)).await;
        assert_eq!(response.status().as_u16(), 400, "{route}");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({"error": message}), "{route}");
    }
}

#[tokio::test]
async fn school_info_returns_contact_details() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_school_info(school_envelope(1, vec![school_row("7010569", "Seoul High")]))
        .await;

    let response = app
        .get("/neis-api?action=get_school_info&schoolId=7010569", Some(&user.token))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "schoolId": "7010569",
            "name": "Seoul High",
            "address": "Gangnam-daero, Seoul",
            "eduOfficeCode": "B10",
            "eduOfficeName": "Seoul Office of Education",
            "phone": "02-555-0000",
            "homepage": "http://school.example"
        })
    );
}

#[tokio::test]
async fn unknown_school_is_not_found() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    app.mock_school_info(serde_json::json!({
        "RESULT": {"CODE": "INFO-200", "MESSAGE": "no data"}
    }))
    .await;

    let response = app
        .get("/neis-api?action=get_school_info&schoolId=1", Some(&user.token))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "school not found"}));
}

#[tokio::test]
async fn upstream_failures_are_bad_gateway() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user().await;
    Mock::given(method("GET"))
        .and(path("/hub/schoolInfo"))
        .respond_with(ResponseTemplate::new(500).set_body_string(format!("KEY={NEIS_API_KEY}")))
        .mount(&app.neis)
        .await;

    let response = app
        .get("/neis-api?action=search_schools&query=Seoul", Some(&user.token))
        .await;

    assert_eq!(response.status().as_u16(), 502);
    let body = response.text().await.unwrap();
    assert!(!body.contains(NEIS_API_KEY));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        serde_json::json!({"error": "could not retrieve school information"})
    );
}

#[tokio::test]
async fn missing_api_key_is_a_server_error() {
    let app = TestApp::spawn_with_directory_key(None).await;
    let user = app.signed_in_user().await;

    let response = app
        .get("/neis-api?action=search_schools&query=Seoul", Some(&user.token))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "server configuration error"}));
}

#[tokio::test]
async fn blank_api_key_is_a_server_error() {
    let app = TestApp::spawn_with_directory_key(Some("")).await;
    let user = app.signed_in_user().await;

    let response = app
        .get("/neis-api?action=search_schools&query=Seoul", Some(&user.token))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "server configuration error"}));
    assert!(app.neis.received_requests().await.unwrap().is_empty());
}
