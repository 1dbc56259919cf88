use crate::api::traits::AdminApi;
use crate::config::AppConfig;
use crate::model::{AnalyticsData, ApiError, ContentItem};

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// The backend wraps every successful body in a `data` field.
#[derive(Debug, Deserialize)]
struct BackendPayload<T> {
    data: T,
}

#[derive(Clone)]
pub struct HttpAdminApi {
    client: Client,
    base_url: String,
    api_token: String,
}

impl HttpAdminApi {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent("admin-console/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_wrapped<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let payload: BackendPayload<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(payload.data)
    }
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Http(e.to_string())
    }
}

#[async_trait::async_trait]
impl AdminApi for HttpAdminApi {
    async fn get_analytics(&self) -> Result<AnalyticsData, ApiError> {
        self.get_wrapped("/api/admin/analytics").await
    }

    async fn list_content(&self) -> Result<Vec<ContentItem>, ApiError> {
        self.get_wrapped("/api/admin/content").await
    }

    async fn delete_content(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/api/admin/content/{}", id)))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
