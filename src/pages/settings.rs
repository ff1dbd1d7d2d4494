use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (endpoint, set_endpoint) = signal(String::new());
    let (endpoint_status, set_endpoint_status) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    // Load the effective endpoint on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_classifier_endpoint().await {
                Ok(url) => set_endpoint.set(url),
                Err(e) => {
                    set_endpoint_status.set(Some(format!("Failed to load endpoint: {}", e)));
                }
            }
        });
    });

    let save_endpoint = move |_| {
        let url = endpoint.get();
        if url.trim().is_empty() {
            set_endpoint_status.set(Some("Please enter an endpoint URL".to_string()));
            return;
        }
        set_is_saving.set(true);
        spawn_local(async move {
            match commands::set_classifier_endpoint(url.trim()).await {
                Ok(()) => set_endpoint_status.set(Some("Endpoint saved".to_string())),
                Err(e) => set_endpoint_status.set(Some(format!("Failed to save: {}", e))),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Classifier"</h3>
                <p class="section-description">
                    "Images are sent to this endpoint as a multipart upload."
                </p>

                <div class="form-group">
                    <label for="classifier-endpoint">"Classifier Endpoint"</label>
                    <div class="input-row">
                        <input
                            id="classifier-endpoint"
                            type="text"
                            placeholder="http://localhost:8000/predict"
                            class="input"
                            prop:value=move || endpoint.get()
                            on:input=move |ev| {
                                set_endpoint.set(event_target_value(&ev));
                            }
                            disabled=move || is_saving.get()
                        />
                        <button
                            class="btn btn-save"
                            on:click=save_endpoint
                            disabled=move || is_saving.get()
                        >
                            {move || if is_saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                    <Show when=move || endpoint_status.get().is_some()>
                        <span class="status-text">{move || endpoint_status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>
        </div>
    }
}
