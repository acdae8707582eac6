use std::collections::HashMap;

use fake::{Fake, faker::internet::en::SafeEmail};
use tokio::net::TcpListener;
use uncany_adapters::config::test::APP_ADDRESS;
use uncany_edge_service::{EdgeSettings, build_from_settings};
use uuid::Uuid;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SERVICE_ROLE_KEY: &str = "test-service-role-key";
pub const NEIS_API_KEY: &str = "test-neis-key";

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub token: String,
}

pub struct TestApp {
    pub address: String,
    pub supabase: MockServer,
    pub neis: MockServer,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_directory_key(Some(NEIS_API_KEY)).await
    }

    pub async fn spawn_with_directory_key(key: Option<&str>) -> Self {
        let supabase = MockServer::start().await;
        let neis = MockServer::start().await;

        let mut vars = HashMap::from([
            ("SUPABASE_URL".to_string(), supabase.uri()),
            (
                "SUPABASE_SERVICE_ROLE_KEY".to_string(),
                SERVICE_ROLE_KEY.to_string(),
            ),
            (
                "UNCANY__DIRECTORY__BASE_URL".to_string(),
                format!("{}/hub", neis.uri()),
            ),
        ]);
        if let Some(key) = key {
            vars.insert("NEIS_API_KEY".to_string(), key.to_string());
        }
        let settings = EdgeSettings::from_vars(vars).expect("Failed to load test settings");

        let service = build_from_settings(&settings)
            .await
            .expect("Failed to build edge service");

        let listener = TcpListener::bind(APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(async move {
            service
                .run_standalone(listener)
                .await
                .expect("Failed to run edge service")
        });

        Self {
            address,
            supabase,
            neis,
            http_client: reqwest::Client::new(),
        }
    }

    /// Register a signed-in user with the auth mock.
    ///
    /// Tokens nobody registered are answered with 401.
    pub async fn signed_in_user(&self) -> TestUser {
        let user = TestUser {
            id: Uuid::new_v4().to_string(),
            email: SafeEmail().fake(),
            token: format!("jwt-{}", Uuid::new_v4()),
        };

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", format!("Bearer {}", user.token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": user.id,
                "email": user.email,
                "aud": "authenticated"
            })))
            .mount(&self.supabase)
            .await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "msg": "invalid JWT"
            })))
            .with_priority(10)
            .mount(&self.supabase)
            .await;

        user
    }

    pub async fn mock_soft_deletes(&self, status: u16) {
        Mock::given(method("PATCH"))
            .and(path_regex(r"^/rest/v1/(users|reservations)$"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.supabase)
            .await;
    }

    pub async fn mock_identity_deletion(&self, user: &TestUser, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(format!("/auth/v1/admin/users/{}", user.id)))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({})))
            .mount(&self.supabase)
            .await;
    }

    pub async fn mock_school_info(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/hub/schoolInfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.neis)
            .await;
    }

    pub async fn get(&self, route: &str, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}{}", self.address, route));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn post(&self, route: &str, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.post(format!("{}{}", self.address, route));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn options(&self, route: &str) -> reqwest::Response {
        self.http_client
            .request(reqwest::Method::OPTIONS, format!("{}{}", self.address, route))
            .header("Origin", "https://uncany.app")
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn header_value<'a>(response: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn school_row(code: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "ATPT_OFCDC_SC_CODE": "B10",
        "ATPT_OFCDC_SC_NM": "Seoul Office of Education",
        "SD_SCHUL_CODE": code,
        "SCHUL_NM": name,
        "SCHUL_KND_SC_NM": "high school",
        "ORG_RDNMA": "Gangnam-daero, Seoul",
        "ORG_TELNO": "02-555-0000",
        "HMPG_ADRES": "http://school.example",
        "FOND_SC_NM": "public"
    })
}

pub fn school_envelope(total: u64, rows: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "schoolInfo": [
            {"head": [
                {"list_total_count": total},
                {"RESULT": {"CODE": "INFO-000", "MESSAGE": "ok"}}
            ]},
            {"row": rows}
        ]
    })
}
