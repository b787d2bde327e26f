mod mandrill;
mod payload;

use crate::domain::{Email, Envelope};
use async_trait::async_trait;
use reqwest::StatusCode;

pub use mandrill::MandrillTransport;
pub use payload::{RecipientType, SendRequest};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Delivers `email`. Without an explicit envelope one is derived from
    /// the message's own sender and recipient headers.
    async fn send(&self, email: &Email, envelope: Option<&Envelope>) -> Result<(), TransportError>;
}

#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("Unable to send an email: {message} (code {code}).")]
    Api {
        status: StatusCode,
        message: String,
        code: String,
    },
    #[error("Unable to send an email (code {code}).")]
    Http { status: StatusCode, code: String },
    #[error("Unable to send an email: the HTTP request failed.")]
    Network(#[source] reqwest::Error),
    #[error("Unable to send an email: {0}.")]
    InvalidEnvelope(String),
}

impl std::fmt::Debug for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
