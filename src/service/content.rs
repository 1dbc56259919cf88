use crate::api::AdminApi;
use crate::model::{ApiResponse, CONTENT_FALLBACK_MESSAGE, ContentItem, SERVICE_ERROR};
use crate::service::diagnostics::{DiagnosticsSink, TracingSink};

use std::sync::Arc;

/// Wraps the admin content endpoints in the uniform envelope, same
/// discipline as the analytics fetch but with its own error code.
pub struct ContentService<A: AdminApi> {
    api: A,
    sink: Arc<dyn DiagnosticsSink>,
}

impl<A: AdminApi> ContentService<A> {
    pub fn new(api: A) -> Self {
        Self::with_sink(api, Arc::new(TracingSink))
    }

    pub fn with_sink(api: A, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self { api, sink }
    }

    pub async fn list_content(&self) -> ApiResponse<Vec<ContentItem>> {
        match self.api.list_content().await {
            Ok(items) => ApiResponse::ok(items),
            Err(err) => {
                self.sink.report("list_content", &err);
                ApiResponse::failure(SERVICE_ERROR, &err, CONTENT_FALLBACK_MESSAGE)
            }
        }
    }

    pub async fn delete_content(&self, id: &str) -> ApiResponse<()> {
        match self.api.delete_content(id).await {
            Ok(()) => ApiResponse::ok(()),
            Err(err) => {
                self.sink.report("delete_content", &err);
                ApiResponse::failure(SERVICE_ERROR, &err, CONTENT_FALLBACK_MESSAGE)
            }
        }
    }
}
