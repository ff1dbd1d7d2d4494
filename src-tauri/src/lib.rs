pub mod classifier;
mod commands;
mod error;

pub use classifier::{ClassifierClient, ClassifierError, ImageUpload, Prediction};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_classifier_endpoint,
            commands::config::set_classifier_endpoint,
            commands::classify::classify_image,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
