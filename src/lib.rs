use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::ParliamentRestClient;

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

/// Initialize the application and mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Logger bridges to both the browser console and the on-page debug console
    domain::logging::init_logger(Box::new(app::LeptosLogger::new()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Parliament dashboard initialized",
    );

    leptos::mount_to_body(app::App);
}

/// Simple connectivity probe against the parliament API
#[wasm_bindgen]
pub async fn probe_backend() -> Result<(), JsValue> {
    get_logger().info(
        LogComponent::Infrastructure("Probe"),
        "🧪 Probing parliament API endpoints...",
    );

    let client = ParliamentRestClient::new();
    let (bills_result, mps_result) =
        futures::future::join(client.fetch_bills(), client.fetch_mps()).await;

    match (bills_result, mps_result) {
        (Ok(bills), Ok(mps)) => {
            if let Some(first) = bills.first() {
                get_logger().info(
                    LogComponent::Infrastructure("Probe"),
                    &format!("📜 First bill: {}", first.heading()),
                );
            }

            get_logger().info(
                LogComponent::Infrastructure("Probe"),
                &format!("✅ Backend reachable: {} bills, {} MPs", bills.len(), mps.len()),
            );
            Ok(())
        }
        (bills_result, mps_result) => {
            let error = bills_result.err().or(mps_result.err()).map(|e| e.to_string()).unwrap_or_default();
            get_logger().error(
                LogComponent::Infrastructure("Probe"),
                &format!("❌ Backend probe failed: {}", error),
            );
            Err(JsValue::from_str(&error))
        }
    }
}
