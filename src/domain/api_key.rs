use secrecy::{ExposeSecret, Secret};

#[derive(Debug, Clone)]
pub struct ApiKey(Secret<String>);

impl ApiKey {
    pub fn parse(s: Secret<String>) -> Result<ApiKey, String> {
        if s.expose_secret().trim().is_empty() {
            Err("The API key must not be empty".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl ExposeSecret<String> for ApiKey {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
