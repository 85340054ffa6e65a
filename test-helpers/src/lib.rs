pub mod backend;
pub mod mock;
pub mod telemetry;

use std::net::TcpListener;
use std::sync::LazyLock;

use actix_web::web;
use payloads::{APIClient, ClientError, requests};
use reqwest::StatusCode;

use crate::backend::MockState;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = telemetry::get_subscriber("debug".into());
        telemetry::init_subscriber(subscriber);
    }
});

/// A mock booking backend bound to a random local port, with a
/// cookie-jar client pointed at it.
pub struct TestApp {
    pub port: u16,
    pub address: String,
    pub client: APIClient,
    /// Direct handle on the backend's stores, for assertions that go
    /// behind the HTTP contract (e.g. which emails were "sent").
    pub state: web::Data<MockState>,
}

pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    let state = web::Data::new(MockState::default());
    let server = backend::build(listener, state.clone())
        .expect("Failed to build mock backend");
    tokio::spawn(server);

    let inner_client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build reqwest client");
    let client = APIClient {
        address: address.clone(),
        inner_client,
        bearer_token: None,
    };

    TestApp {
        port,
        address,
        client,
        state,
    }
}

impl TestApp {
    /// Log the default staff user in over the session cookie.
    pub async fn login_admin(&self) -> anyhow::Result<()> {
        self.client
            .login(&requests::LoginCredentials {
                username: backend::ADMIN_USERNAME.into(),
                password: backend::ADMIN_PASSWORD.into(),
            })
            .await?;
        Ok(())
    }

    /// A fresh client with no cookie jar, authenticating via the bearer
    /// token fallback only.
    pub fn bearer_client(&self) -> APIClient {
        APIClient::new(self.address.clone())
            .with_bearer_token(backend::TEST_BEARER_TOKEN.into())
    }

    /// A fresh client with no credentials at all.
    pub fn anonymous_client(&self) -> APIClient {
        APIClient::new(self.address.clone())
    }
}

pub fn assert_status_code<T: std::fmt::Debug>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::APIError(status, _)) => assert_eq!(status, expected),
        other => panic!("expected API error {expected}, got {other:?}"),
    }
}

/// Assert a business rejection (`success: false`) and return its message.
pub fn assert_rejected<T: std::fmt::Debug>(
    result: Result<T, ClientError>,
) -> String {
    match result {
        Err(ClientError::Rejected(message)) => message,
        other => panic!("expected business rejection, got {other:?}"),
    }
}
