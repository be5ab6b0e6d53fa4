use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::LoadDashboardUseCase;
use crate::infrastructure::http::ParliamentRestClient;

/// WASM API для взаимодействия с JavaScript
///
/// Минимальная логика - только мост к application слою.
#[wasm_bindgen]
pub struct ParliamentDashboardApi {
    base_url: Option<String>,
}

#[wasm_bindgen]
impl ParliamentDashboardApi {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    /// Load one dashboard snapshot and resolve it as a JSON string
    #[wasm_bindgen(js_name = loadSnapshot)]
    pub fn load_snapshot(&self) -> Promise {
        let client = match &self.base_url {
            Some(base_url) => ParliamentRestClient::with_base_url(base_url.clone()),
            None => ParliamentRestClient::new(),
        };

        future_to_promise(async move {
            let use_case = LoadDashboardUseCase::new(client);
            let snapshot = use_case.execute().await.map_err(|e| JsValue::from_str(&e.to_string()))?;

            serde_json::to_string(&snapshot)
                .map(|json| JsValue::from_str(&json))
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }
}
