//! Crossref works client: first/last author given-name resolution.

use serde::Deserialize;
use tracing::debug;

use gendercite_shared::{AuthorNames, GenderciteError, Result};

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WorksResponse {
    message: WorksMessage,
}

#[derive(Debug, Deserialize)]
struct WorksMessage {
    #[serde(rename = "total-results")]
    total_results: i64,
    #[serde(default)]
    items: Vec<WorkItem>,
}

#[derive(Debug, Deserialize)]
struct WorkItem {
    #[serde(default)]
    author: Option<Vec<AuthorEntry>>,
}

/// One author of a work, as Crossref reports it. `sequence` and
/// `affiliation` are present in the payload but unused here.
#[derive(Debug, Deserialize)]
struct AuthorEntry {
    #[serde(default)]
    given: Option<String>,
}

// ---------------------------------------------------------------------------
// AuthorClient
// ---------------------------------------------------------------------------

/// Client for the bibliographic works API: exact-DOI filter, `DOI,author`
/// field selection, single-result limit.
#[derive(Debug, Clone)]
pub struct AuthorClient {
    client: reqwest::Client,
    base_url: String,
}

impl AuthorClient {
    /// Create a client against the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: crate::http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the first-listed and last-listed authors' given names for `doi`.
    ///
    /// Both names start out empty and stay empty when the work has no match
    /// or no author list, so the no-result path never yields an
    /// uninitialized value.
    pub async fn resolve(&self, doi: &str) -> Result<AuthorNames> {
        let url = format!("{}/works", self.base_url);
        debug!(%doi, "querying author metadata");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("filter", format!("doi:{doi}")),
                ("select", "DOI,author".to_string()),
                ("rows", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| GenderciteError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenderciteError::Network(format!("{url}: HTTP {status}")));
        }

        let works: WorksResponse = response
            .json()
            .await
            .map_err(|e| GenderciteError::decode(format!("{url}: {e}")))?;

        let mut names = AuthorNames::default();

        if works.message.total_results > 0 {
            let authors = works
                .message
                .items
                .first()
                .and_then(|item| item.author.as_deref())
                .unwrap_or_default();

            if let (Some(first), Some(last)) = (authors.first(), authors.last()) {
                names.first = given_name_token(first);
                names.last = given_name_token(last);
            }
        }

        Ok(names)
    }
}

/// Reduce an author's given-name field to its first whitespace token,
/// treating periods as separators so "J. D." becomes "J".
fn given_name_token(author: &AuthorEntry) -> String {
    match &author.given {
        Some(given) => given
            .replace('.', " ")
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn entry(given: Option<&str>) -> AuthorEntry {
        AuthorEntry {
            given: given.map(String::from),
        }
    }

    #[test]
    fn given_name_strips_initials() {
        assert_eq!(given_name_token(&entry(Some("Jane"))), "Jane");
        assert_eq!(given_name_token(&entry(Some("J. D."))), "J");
        assert_eq!(given_name_token(&entry(Some("Mary Ann"))), "Mary");
        assert_eq!(given_name_token(&entry(Some("  "))), "");
        assert_eq!(given_name_token(&entry(None)), "");
    }

    #[tokio::test]
    async fn resolves_first_and_last_author() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "message": {
                "total-results": 1,
                "items": [{
                    "DOI": "10.1/aaa",
                    "author": [
                        {"given": "Jane", "family": "Doe", "sequence": "first", "affiliation": []},
                        {"given": "Alex", "family": "Roe", "sequence": "additional", "affiliation": []},
                        {"given": "John", "family": "Smith", "sequence": "additional", "affiliation": []},
                    ],
                }],
            }
        });

        Mock::given(method("GET"))
            .and(path("/works"))
            .and(query_param("filter", "doi:10.1/aaa"))
            .and(query_param("rows", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AuthorClient::new(server.uri()).unwrap();
        let names = client.resolve("10.1/aaa").await.unwrap();

        assert_eq!(names.first, "Jane");
        assert_eq!(names.last, "John");
    }

    #[tokio::test]
    async fn single_author_is_both_first_and_last() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "message": {
                "total-results": 1,
                "items": [{
                    "DOI": "10.1/solo",
                    "author": [{"given": "Sam", "family": "Lone"}],
                }],
            }
        });

        Mock::given(method("GET"))
            .and(path("/works"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AuthorClient::new(server.uri()).unwrap();
        let names = client.resolve("10.1/solo").await.unwrap();
        assert_eq!(names.first, "Sam");
        assert_eq!(names.last, "Sam");
    }

    #[tokio::test]
    async fn zero_results_yields_empty_names() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "message": {"total-results": 0, "items": []}
        });

        Mock::given(method("GET"))
            .and(path("/works"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AuthorClient::new(server.uri()).unwrap();
        let names = client.resolve("10.1/missing").await.unwrap();
        assert_eq!(names, AuthorNames::default());
    }

    #[tokio::test]
    async fn work_without_author_list_yields_empty_names() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "message": {
                "total-results": 1,
                "items": [{"DOI": "10.1/anon"}],
            }
        });

        Mock::given(method("GET"))
            .and(path("/works"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AuthorClient::new(server.uri()).unwrap();
        let names = client.resolve("10.1/anon").await.unwrap();
        assert!(names.first.is_empty());
        assert!(names.last.is_empty());
    }
}
