//! HTTP client for the schedule generation service.

use std::collections::HashMap;
use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::models::UserId;
use crate::store::{DocumentStore, OptimizerSettings, PlannerConfig, StoreResult};

use super::types::{GenerateRequest, GenerateResponse};

/// Error type for generation calls.
#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Optimizer request failed: {0}")]
    Request(String),

    #[error("Optimizer rejected the request: {0}")]
    Status(String),

    #[error("Failed to parse optimizer response: {0}")]
    Parse(String),
}

/// Client for the generation endpoint.
pub struct OptimizerClient {
    base_url: String,
    client: reqwest::Client,
}

impl OptimizerClient {
    /// Create a client from settings.
    pub fn new(settings: &OptimizerSettings) -> Result<Self, OptimizerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| OptimizerError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from the full planner configuration.
    pub fn from_config(config: &PlannerConfig) -> Result<Self, OptimizerError> {
        Self::new(&config.optimizer)
    }

    fn generate_url(&self) -> String {
        format!("{}/api/user", self.base_url)
    }

    /// Run one generation and parse the two candidate schedules.
    ///
    /// # Arguments
    /// * `request` - The user's documents plus their availability
    ///
    /// # Returns
    /// * `Ok(GenerateResponse)` with both candidates on success
    /// * `Err` if the service is unreachable, rejects the request, or
    ///   answers with a body that does not parse
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, OptimizerError> {
        let url = self.generate_url();
        info!(
            "Requesting schedule generation from {} ({} documents)",
            url,
            request.user_data.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| OptimizerError::Request(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<empty response>".to_string());

        if !status.is_success() {
            return Err(OptimizerError::Status(format!(
                "{} returned {}: {}",
                url,
                status,
                body.trim()
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| OptimizerError::Parse(format!("{} ({})", e, body)))
    }
}

/// Gather every stored timetable document of a user for a generation run.
///
/// Each record carries its own document name under the `documentName` field;
/// the service relies on it to group records by slot.
pub async fn collect_user_data<S: DocumentStore + ?Sized>(
    store: &S,
    user: &UserId,
) -> StoreResult<HashMap<String, HashMap<String, String>>> {
    let documents = store.list_collection(user.as_str()).await?;
    Ok(documents
        .into_iter()
        .map(|(name, mut record)| {
            record.insert("documentName".to_string(), name.clone());
            (name, record)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::{DocumentPath, MemoryStore, Record};

    #[test]
    fn generate_url_joins_base_and_endpoint() {
        let client = OptimizerClient::new(&OptimizerSettings {
            base_url: "http://127.0.0.1:5000/".to_string(),
            timeout_secs: 20,
        })
        .unwrap();
        assert_eq!(client.generate_url(), "http://127.0.0.1:5000/api/user");
    }

    #[tokio::test]
    async fn test_collect_user_data_injects_document_names() {
        let store = MemoryStore::new();
        let user = UserId::from("uid-1");

        let mut first = Record::new();
        first.insert("FOPR111".to_string(), "Monday | 7:00 - 10:00".to_string());
        store
            .set(&DocumentPath::new("uid-1", "1_1st Sem_YA-1"), first)
            .await
            .unwrap();

        let mut second = Record::new();
        second.insert("INPR111".to_string(), "Friday | 13:00 - 16:00".to_string());
        store
            .set(&DocumentPath::new("uid-1", "1_2nd Sem_YA-1"), second)
            .await
            .unwrap();

        let user_data = collect_user_data(&store, &user).await.unwrap();
        assert_eq!(user_data.len(), 2);
        assert_eq!(
            user_data["1_1st Sem_YA-1"]["documentName"],
            "1_1st Sem_YA-1"
        );
        assert_eq!(
            user_data["1_1st Sem_YA-1"]["FOPR111"],
            "Monday | 7:00 - 10:00"
        );
        assert_eq!(
            user_data["1_2nd Sem_YA-1"]["documentName"],
            "1_2nd Sem_YA-1"
        );
    }

    #[tokio::test]
    async fn test_collect_user_data_for_unknown_user_is_empty() {
        let store = MemoryStore::new();
        let user_data = collect_user_data(&store, &UserId::from("nobody"))
            .await
            .unwrap();
        assert!(user_data.is_empty());
    }
}
