//! OpenCitations COCI client: one-hop citation and reference lookups.

use serde::Deserialize;
use tracing::debug;

use gendercite_shared::{Direction, GenderciteError, Result};

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

/// One entry of the COCI citation/reference listing. Only the DOI fields are
/// selected; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct CitationItem {
    #[serde(default)]
    citing: Option<String>,
    #[serde(default)]
    cited: Option<String>,
}

// ---------------------------------------------------------------------------
// CitationClient
// ---------------------------------------------------------------------------

/// Client for the citation index (`GET {base}/citations/{doi}` and
/// `GET {base}/references/{doi}`).
#[derive(Debug, Clone)]
pub struct CitationClient {
    client: reqwest::Client,
    base_url: String,
}

impl CitationClient {
    /// Create a client against the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: crate::http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// List the DOIs of works citing (or cited by) `doi`, in response order.
    ///
    /// Duplicates are possible. An empty or absent body is a normal outcome
    /// and yields an empty list; transport failures propagate as errors.
    pub async fn fetch(&self, doi: &str, direction: Direction) -> Result<Vec<String>> {
        let url = format!("{}/{}/{}", self.base_url, direction.as_path(), doi);
        debug!(%url, "querying citation index");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GenderciteError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenderciteError::Network(format!("{url}: HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenderciteError::Network(format!("{url}: body read failed: {e}")))?;

        // The index answers with an empty body (or JSON null) when it has
        // no data for a DOI.
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Vec::new());
        }

        let items: Vec<CitationItem> = serde_json::from_str(trimmed)
            .map_err(|e| GenderciteError::decode(format!("{url}: {e}")))?;

        let dois = items
            .into_iter()
            .filter_map(|item| match direction {
                Direction::Citing => item.citing,
                Direction::Cited => item.cited,
            })
            .collect();

        Ok(dois)
    }
}
