use crate::api::AdminApi;
use crate::model::{ANALYTICS_ERROR, ANALYTICS_FALLBACK_MESSAGE, AnalyticsData, ApiResponse};
use crate::service::diagnostics::{DiagnosticsSink, TracingSink};

use std::sync::Arc;

/// Wraps the admin analytics endpoint in the uniform envelope.
pub struct AdminService<A: AdminApi> {
    api: A,
    sink: Arc<dyn DiagnosticsSink>,
}

impl<A: AdminApi> AdminService<A> {
    pub fn new(api: A) -> Self {
        Self::with_sink(api, Arc::new(TracingSink))
    }

    pub fn with_sink(api: A, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self { api, sink }
    }

    /// Fetches the admin analytics payload.
    ///
    /// Always resolves to an envelope: failures of the remote call are
    /// reported to the diagnostics sink and converted to a failure envelope
    /// with code `ANALYTICS_ERROR`. Callers branch on `success`, never on an
    /// error path.
    pub async fn get_analytics(&self) -> ApiResponse<AnalyticsData> {
        match self.api.get_analytics().await {
            Ok(data) => ApiResponse::ok(data),
            Err(err) => {
                self.sink.report("get_analytics", &err);
                ApiResponse::failure(ANALYTICS_ERROR, &err, ANALYTICS_FALLBACK_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiError, ContentItem};
    use std::sync::Mutex;

    struct StubApi {
        analytics: Result<AnalyticsData, ApiError>,
    }

    #[async_trait::async_trait]
    impl AdminApi for StubApi {
        async fn get_analytics(&self) -> Result<AnalyticsData, ApiError> {
            self.analytics.clone()
        }

        async fn list_content(&self) -> Result<Vec<ContentItem>, ApiError> {
            Ok(Vec::new())
        }

        async fn delete_content(&self, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CapturingSink {
        reports: Mutex<Vec<String>>,
    }

    impl DiagnosticsSink for CapturingSink {
        fn report(&self, operation: &str, err: &ApiError) {
            self.reports
                .lock()
                .unwrap()
                .push(format!("{}: {}", operation, err));
        }
    }

    fn sample_payload() -> AnalyticsData {
        AnalyticsData(serde_json::json!({ "total_users": 42, "active_users": 7 }))
    }

    #[tokio::test]
    async fn success_envelope_carries_payload() {
        let service = AdminService::new(StubApi {
            analytics: Ok(sample_payload()),
        });

        let resp = service.get_analytics().await;

        assert!(resp.success);
        assert_eq!(resp.data, Some(sample_payload()));
        assert!(resp.error.is_none());
    }

    #[tokio::test]
    async fn failure_resolves_to_envelope_with_analytics_code() {
        let service = AdminService::new(StubApi {
            analytics: Err(ApiError::Http("network down".into())),
        });

        let resp = service.get_analytics().await;

        assert!(!resp.success);
        assert!(resp.data.is_none());
        let error = resp.error.expect("failure envelope must carry error info");
        assert_eq!(error.code, "ANALYTICS_ERROR");
        assert_eq!(error.message, "network down");
    }

    #[tokio::test]
    async fn messageless_failure_uses_fallback_text() {
        let service = AdminService::new(StubApi {
            analytics: Err(ApiError::Timeout),
        });

        let resp = service.get_analytics().await;

        let error = resp.error.expect("failure envelope must carry error info");
        assert_eq!(error.message, "Failed to fetch analytics data");
    }

    #[tokio::test]
    async fn data_and_error_are_mutually_exclusive() {
        for analytics in [
            Ok(sample_payload()),
            Err(ApiError::Status(503)),
            Err(ApiError::Timeout),
        ] {
            let service = AdminService::new(StubApi { analytics });
            let resp = service.get_analytics().await;
            assert_eq!(resp.success, resp.data.is_some());
            assert_eq!(resp.success, resp.error.is_none());
        }
    }

    #[tokio::test]
    async fn sink_sees_failures_but_not_successes() {
        let sink = Arc::new(CapturingSink::default());

        let ok_service = AdminService::with_sink(
            StubApi {
                analytics: Ok(sample_payload()),
            },
            sink.clone(),
        );
        ok_service.get_analytics().await;
        assert!(sink.reports.lock().unwrap().is_empty());

        let failing_service = AdminService::with_sink(
            StubApi {
                analytics: Err(ApiError::Http("boom".into())),
            },
            sink.clone(),
        );
        failing_service.get_analytics().await;

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("get_analytics:"));
    }

    #[tokio::test]
    async fn envelope_serializes_without_absent_side() {
        let service = AdminService::new(StubApi {
            analytics: Err(ApiError::Http("network down".into())),
        });

        let resp = service.get_analytics().await;
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["success"], serde_json::json!(false));
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "ANALYTICS_ERROR");
        let ts = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }
}
