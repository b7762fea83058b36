//! External gender-inference service client.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use gendercite_shared::{Gender, GenderGuess, GenderciteError, Result};

/// User-Agent string for service requests.
const USER_AGENT: &str = concat!("gendercite/", env!("CARGO_PKG_VERSION"));

/// Service response: `{gender, accuracy}` with accuracy in percent.
#[derive(Debug, Deserialize)]
struct ServiceResponse {
    gender: String,
    #[serde(default)]
    accuracy: Option<u8>,
}

/// Client for `GET {base}/get?key={apiKey}&name={name}`.
#[derive(Debug, Clone)]
pub struct GenderApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GenderApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GenderciteError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Ask the service for a gender guess. Labels other than male/female
    /// (including service-side "unknown") map to `Gender::Unknown`.
    pub async fn lookup(&self, name: &str) -> Result<GenderGuess> {
        let url = format!("{}/get", self.base_url);
        debug!(%name, "querying gender service");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("name", name)])
            .send()
            .await
            .map_err(|e| GenderciteError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenderciteError::Network(format!("{url}: HTTP {status}")));
        }

        let parsed: ServiceResponse = response
            .json()
            .await
            .map_err(|e| GenderciteError::decode(format!("{url}: {e}")))?;

        Ok(GenderGuess {
            gender: Gender::from_label(&parsed.gender),
            accuracy: parsed.accuracy,
        })
    }
}
