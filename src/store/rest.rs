//! REST document store implementation.
//!
//! Thin JSON client for an HTTP document-store service:
//!
//! - `GET  {base}/{collection}/{document}` returns the record, 404 if absent
//! - `PUT  {base}/{collection}/{document}` replaces the record
//! - `GET  {base}/{collection}` returns a map of document name to record
//! - `GET  {base}/health` answers the health check
//!
//! Transport failures map to [`StoreError::Unavailable`], non-success
//! statuses to [`StoreError::Backend`].

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::config::RestSettings;
use super::document::{DocumentPath, DocumentStore, Record};
use super::error::{StoreError, StoreResult};

/// HTTP-backed document store.
pub struct RestStore {
    base_url: String,
    client: reqwest::Client,
}

impl RestStore {
    /// Build a store client from settings. The request timeout applies to
    /// every operation.
    pub fn new(settings: &RestSettings) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| {
                StoreError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    // Document names contain spaces ("1_1st Sem_YA-1"); the URL parser
    // percent-encodes them when the request is built.
    fn document_url(&self, path: &DocumentPath) -> String {
        format!("{}/{}/{}", self.base_url, path.collection, path.document)
    }

    async fn read_success_body(url: &str, response: reqwest::Response) -> StoreResult<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<empty response>".to_string());

        if !status.is_success() {
            return Err(StoreError::Backend(format!(
                "{} returned {}: {}",
                url,
                status,
                body.trim()
            )));
        }

        Ok(body)
    }
}

#[async_trait]
impl DocumentStore for RestStore {
    async fn health_check(&self) -> StoreResult<bool> {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            // An unreachable service is an answer, not a failed check.
            Err(_) => Ok(false),
        }
    }

    async fn get(&self, path: &DocumentPath) -> StoreResult<Option<Record>> {
        let url = self.document_url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("GET {} failed: {}", url, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = Self::read_success_body(&url, response).await?;
        let record: Record = serde_json::from_str(&body).map_err(|e| {
            StoreError::Backend(format!("Failed to parse document from {}: {} ({})", url, e, body))
        })?;

        Ok(Some(record))
    }

    async fn set(&self, path: &DocumentPath, record: Record) -> StoreResult<()> {
        let url = self.document_url(path);
        let response = self
            .client
            .put(&url)
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("PUT {} failed: {}", url, e)))?;

        Self::read_success_body(&url, response).await?;
        Ok(())
    }

    async fn list_collection(&self, collection: &str) -> StoreResult<Vec<(String, Record)>> {
        let url = self.collection_url(collection);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("GET {} failed: {}", url, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body = Self::read_success_body(&url, response).await?;
        let by_name: HashMap<String, Record> = serde_json::from_str(&body).map_err(|e| {
            StoreError::Backend(format!(
                "Failed to parse collection from {}: {} ({})",
                url, e, body
            ))
        })?;

        let mut documents: Vec<(String, Record)> = by_name.into_iter().collect();
        documents.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestStore {
        RestStore::new(&RestSettings {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let store = store();
        assert_eq!(store.collection_url("uid-1"), "http://localhost:8080/uid-1");
    }

    #[test]
    fn test_document_url_keeps_document_name_verbatim() {
        let store = store();
        let path = DocumentPath::new("uid-1", "1_1st Sem_YA-1");
        assert_eq!(
            store.document_url(&path),
            "http://localhost:8080/uid-1/1_1st Sem_YA-1"
        );
    }
}
