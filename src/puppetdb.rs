//! PuppetDB query client.
//!
//! Thin blocking client for the PuppetDB v4 query API. The rest of the
//! pipeline only sees the [`Inventory`] trait, so tests (and any future
//! transport) can substitute an in-memory implementation.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{MatrixError, Result};

/// One fact value reported by one host.
#[derive(Debug, Clone, Deserialize)]
pub struct Fact {
    pub certname: String,
    pub value: String,
}

/// One resource from a host's compiled catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
}

/// Inventory/catalog query operations the aggregation pipeline depends on.
pub trait Inventory {
    /// All values of the named fact, one entry per host reporting it.
    fn facts(&self, name: &str) -> Result<Vec<Fact>>;

    /// The resources of one host's most recent catalog.
    fn catalog(&self, certname: &str) -> Result<Vec<Resource>>;
}

/// Queries a PuppetDB instance over HTTP.
pub struct PuppetDbClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    resources: ResourceList,
}

#[derive(Debug, Deserialize)]
struct ResourceList {
    data: Vec<Resource>,
}

impl PuppetDbClient {
    /// Create a client for the given server with the default 30-second timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("module-matrix")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one v4 query against an endpoint and deserialize the response body.
    fn query<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: serde_json::Value,
        what: &str,
    ) -> Result<T> {
        let url = format!("{}/pdb/query/v4/{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query.to_string())])
            .send()
            .map_err(|e| MatrixError::Query {
                what: what.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(MatrixError::Query {
                what: what.to_string(),
                message: format!("HTTP {} from {}", response.status(), url),
            });
        }

        response.json().map_err(|e| MatrixError::Query {
            what: what.to_string(),
            message: format!("Invalid response body: {}", e),
        })
    }
}

impl Inventory for PuppetDbClient {
    fn facts(&self, name: &str) -> Result<Vec<Fact>> {
        let what = format!("fact '{}'", name);
        self.query(
            "facts",
            serde_json::json!(["=", "name", name]),
            &what,
        )
    }

    fn catalog(&self, certname: &str) -> Result<Vec<Resource>> {
        let what = format!("catalog for '{}'", certname);
        let documents: Vec<CatalogDocument> = self.query(
            "catalogs",
            serde_json::json!(["=", "certname", certname]),
            &what,
        )?;

        let first = documents.into_iter().next().ok_or_else(|| MatrixError::Query {
            what: what.clone(),
            message: "No catalog document returned".to_string(),
        })?;

        Ok(first.resources.data)
    }
}
