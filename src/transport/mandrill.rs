use crate::domain::{ApiKey, Email, Envelope};
use crate::transport::{SendRequest, Transport, TransportError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://mandrillapp.com";
const SEND_PATH: &str = "/api/1.0/messages/send.json";

/// Delivers messages through Mandrill's `messages/send` JSON API.
///
/// Holds no state besides the key; the `reqwest::Client` owns the
/// connection pool and any timeout.
pub struct MandrillTransport {
    http_client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl MandrillTransport {
    pub fn new(api_key: ApiKey, http_client: Option<Client>) -> Self {
        Self {
            http_client: http_client.unwrap_or_default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SEND_PATH)
    }

    pub fn payload<'a>(&'a self, email: &'a Email, envelope: &'a Envelope) -> SendRequest<'a> {
        SendRequest::new(self.api_key.expose_secret(), email, envelope)
    }

    #[tracing::instrument(
        name = "Sending email via Mandrill",
        skip(self, email, envelope),
        fields(
            recipients = envelope.recipients().len(),
            status_code = tracing::field::Empty
        )
    )]
    pub async fn send_email(&self, email: &Email, envelope: &Envelope) -> Result<(), TransportError> {
        let response = self
            .http_client
            .post(&self.endpoint())
            .json(&self.payload(email, envelope))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error.cause_chain = ?e, "Mandrill request failed");
                TransportError::Network(e)
            })?;

        let status = response.status();
        tracing::Span::current().record("status_code", &status.as_u16());
        if status == StatusCode::OK {
            return Ok(());
        }

        // An unreadable or non-JSON body falls back to the generic message.
        let body = response.bytes().await.unwrap_or_default();
        let result = serde_json::from_slice(&body).unwrap_or(Value::Null);
        let error = error_from_response(status, &result);
        tracing::error!(error.cause_chain = ?error, "Mandrill rejected the message");
        Err(error)
    }
}

#[async_trait]
impl Transport for MandrillTransport {
    async fn send(&self, email: &Email, envelope: Option<&Envelope>) -> Result<(), TransportError> {
        match envelope {
            Some(envelope) => self.send_email(email, envelope).await,
            None => {
                let envelope =
                    Envelope::from_email(email).map_err(TransportError::InvalidEnvelope)?;
                self.send_email(email, &envelope).await
            }
        }
    }
}

fn error_from_response(status: StatusCode, result: &Value) -> TransportError {
    let code = render_field(result.get("code"));
    if result.get("status").and_then(Value::as_str) == Some("error") {
        TransportError::Api {
            status,
            message: render_field(result.get("message")),
            code,
        }
    } else {
        TransportError::Http { status, code }
    }
}

/// Absent and `null` render as empty; strings without their quotes.
fn render_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
