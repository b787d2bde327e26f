use mandrill_mailer::domain::{Address, ApiKey, Email, Envelope};
use mandrill_mailer::startup::get_http_client;
use mandrill_mailer::telemetry::{get_subscriber, init_subscriber};
use mandrill_mailer::transport::MandrillTransport;
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

pub const API_KEY: &str = "md-test-key";
pub const SEND_PATH: &str = "/api/1.0/messages/send.json";

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub email_server: MockServer,
    pub transport: MandrillTransport,
}

impl TestApp {
    pub async fn received_body(&self) -> serde_json::Value {
        let requests = self
            .email_server
            .received_requests()
            .await
            .expect("Request recording is disabled");
        assert_eq!(requests.len(), 1, "Expected exactly one request to Mandrill");
        serde_json::from_slice(&requests[0].body).expect("Request body is not JSON")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;
    let api_key = ApiKey::parse(Secret::new(API_KEY.to_string())).unwrap();
    let http_client = get_http_client(std::time::Duration::from_millis(200)).unwrap();
    let transport =
        MandrillTransport::new(api_key, Some(http_client)).with_base_url(email_server.uri());

    TestApp {
        email_server,
        transport,
    }
}

pub fn address(email: &str) -> Address {
    Address::plain(email).unwrap()
}

pub fn sample_email() -> Email {
    Email::new()
        .from(Address::named("a@x.com", "Alice").unwrap())
        .to(address("b@x.com"))
        .cc(address("c@x.com"))
        .bcc(address("d@x.com"))
        .subject("Hello")
        .html("<p>Hello</p>")
        .text("Hello")
}

pub fn sample_envelope() -> Envelope {
    Envelope::new(
        Address::named("a@x.com", "Alice").unwrap(),
        vec![address("b@x.com"), address("c@x.com"), address("d@x.com")],
    )
    .unwrap()
}
