use crate::model::{AnalyticsData, ApiError, ContentItem};

/// Capability the admin services are built on. Implemented over HTTP in
/// production, stubbed out in tests.
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    async fn get_analytics(&self) -> Result<AnalyticsData, ApiError>;
    async fn list_content(&self) -> Result<Vec<ContentItem>, ApiError>;
    async fn delete_content(&self, id: &str) -> Result<(), ApiError>;
}
