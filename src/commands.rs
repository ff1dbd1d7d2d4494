use base64::Engine;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::detection::{PredictionResult, SelectedFile};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyImageRequest {
    image_base64: String,
    file_name: String,
    mime_type: String,
}

#[derive(Serialize)]
struct SetClassifierEndpointArgs {
    endpoint: String,
}

#[derive(Serialize)]
struct ClassifyImageArgs {
    request: ClassifyImageRequest,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

// -- Typed invoke helpers --

/// Effective classifier endpoint (saved preference or built-in default).
pub async fn get_classifier_endpoint() -> Result<String, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_classifier_endpoint", args)
        .await
        .map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Validate and save a new classifier endpoint.
pub async fn set_classifier_endpoint(endpoint: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SetClassifierEndpointArgs {
        endpoint: endpoint.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("set_classifier_endpoint", args)
        .await
        .map(|_| ())
        .map_err(js_error)
}

/// Send the selected image to the classifier via the backend.
pub async fn classify_image(file: &SelectedFile) -> Result<PredictionResult, String> {
    let args = serde_wasm_bindgen::to_value(&ClassifyImageArgs {
        request: ClassifyImageRequest {
            image_base64: base64::engine::general_purpose::STANDARD.encode(&file.bytes),
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        },
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("classify_image", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
