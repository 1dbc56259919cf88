mod api;
mod config;
mod model;
mod service;

use api::HttpAdminApi;
use config::load_config;
use futures::future::join;
use service::{AdminService, ContentService};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".into());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", config_path, e);
            return;
        }
    };

    info!("Connecting to admin backend at {}", config.base_url);
    let api = HttpAdminApi::new(&config);
    let admin = AdminService::new(api.clone());
    let content = ContentService::new(api);

    // Both calls are independent, fetch them together.
    let (analytics, pages) = join(admin.get_analytics(), content.list_content()).await;

    if let Some(payload) = analytics.data {
        match serde_json::to_string_pretty(&payload) {
            Ok(pretty) => info!("📊 Analytics:\n{}", pretty),
            Err(e) => warn!("Failed to render analytics payload: {}", e),
        }
    } else if let Some(err) = analytics.error {
        warn!("Analytics fetch failed [{}]: {}", err.code, err.message);
    }

    if let Some(items) = pages.data {
        info!("Content items: {}", items.len());
        for item in items {
            info!("  {} | {} | {}", item.id, item.status, item.title);
        }
    } else if let Some(err) = pages.error {
        warn!("Content fetch failed [{}]: {}", err.code, err.message);
    }
}
