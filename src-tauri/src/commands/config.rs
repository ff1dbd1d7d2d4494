use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::classifier::{parse_endpoint, DEFAULT_ENDPOINT};
use crate::error::BlightScanError;

pub const PREFERENCES_STORE: &str = "preferences.json";
pub const CLASSIFIER_ENDPOINT_KEY: &str = "classifier_endpoint";

/// Saved endpoint, or the default when nothing (or a blank value) is saved.
pub fn endpoint_or_default(saved: Option<String>) -> String {
    saved
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Endpoint the classifier client should be built with.
pub fn resolve_endpoint(app: &AppHandle) -> Result<String, BlightScanError> {
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        BlightScanError::Config(e.to_string())
    })?;
    let saved = store
        .get(CLASSIFIER_ENDPOINT_KEY)
        .and_then(|v| v.as_str().map(|s| s.to_string()));
    Ok(endpoint_or_default(saved))
}

#[tauri::command]
pub fn get_classifier_endpoint(app: AppHandle) -> Result<String, String> {
    let endpoint = resolve_endpoint(&app)?;
    info!("Classifier endpoint: {}", endpoint);
    Ok(endpoint)
}

#[tauri::command]
pub fn set_classifier_endpoint(app: AppHandle, endpoint: &str) -> Result<(), String> {
    let url = parse_endpoint(endpoint).map_err(|e| {
        warn!("Refusing to save endpoint: {}", e);
        BlightScanError::Config(e.to_string())
    })?;
    info!("Setting classifier endpoint = {}", url);

    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        BlightScanError::Config(e.to_string())
    })?;
    store.set(CLASSIFIER_ENDPOINT_KEY, serde_json::json!(url.as_str()));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        BlightScanError::Config(e.to_string()).into()
    })
}
