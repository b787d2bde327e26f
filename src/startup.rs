use crate::configuration::MandrillSettings;
use crate::transport::MandrillTransport;
use anyhow::Context;

pub fn get_http_client(timeout: std::time::Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

pub fn build_transport(configuration: &MandrillSettings) -> Result<MandrillTransport, anyhow::Error> {
    let api_key = configuration
        .api_key()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid Mandrill API key")?;
    let http_client =
        get_http_client(configuration.timeout()).context("Failed to build the HTTP client")?;
    Ok(MandrillTransport::new(api_key, Some(http_client))
        .with_base_url(configuration.base_url.clone()))
}
