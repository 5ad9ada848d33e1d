// web_app/api/functions.rs - Client for managed edge functions
//
// Invokes a named function by POSTing a JSON body to
// `{base_url}/{name}` and decoding the JSON reply.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::OnceLock;

use super::config::{ConfigError, FunctionsConfig};

pub const GENERATE_CONTENT: &str = "generate-content";

static CLIENT: OnceLock<FunctionsClient> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum FunctionsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("function {name} returned {status}: {body}")]
    Status {
        name: String,
        status: u16,
        body: String,
    },
}

#[derive(Clone, Debug)]
pub struct FunctionsClient {
    http: reqwest::Client,
    config: FunctionsConfig,
}

impl FunctionsClient {
    pub fn new(config: FunctionsConfig) -> Result<Self, FunctionsError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FunctionsConfig {
        &self.config
    }

    /// Calls function `name` with `body` as JSON
    pub async fn invoke<B, R>(&self, name: &str, body: &B) -> Result<R, FunctionsError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.function_url(name);
        tracing::debug!("Invoking function {} at {}", name, url);

        let mut request = self.http.post(&url).json(body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Function {} failed with status {}", name, status);
            return Err(FunctionsError::Status {
                name: name.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<R>().await?)
    }
}

/// Process-wide client built from the environment on first use
pub fn shared_client() -> Result<FunctionsClient, FunctionsError> {
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }

    let client = FunctionsClient::new(FunctionsConfig::from_env()?)?;
    tracing::info!("Edge function client configured for {}", client.config().base_url);
    Ok(CLIENT.get_or_init(|| client).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = FunctionsError::Status {
            name: GENERATE_CONTENT.to_string(),
            status: 500,
            body: "internal".to_string(),
        };
        assert_eq!(err.to_string(), "function generate-content returned 500: internal");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: FunctionsError = ConfigError::Missing("FUNCTIONS_URL").into();
        assert_eq!(err.to_string(), "configuration error: FUNCTIONS_URL must be set");
    }
}
