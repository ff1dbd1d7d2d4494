//! Image drop zone with drag-and-drop and browse.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::detection::{DragTracker, SelectedFile, SelectionSource, SelectionToken};

#[component]
pub fn ImageDropZone(
    /// Reserves a selection before the file is read; `None` aborts it
    on_begin: Callback<(), Option<SelectionToken>>,
    /// Receives the first file of the payload, or `None` for an empty one
    on_select: Callback<(SelectionToken, SelectionSource, Option<SelectedFile>)>,
    /// Single-line variant shown under an existing preview
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let drag = RwSignal::new(DragTracker::new());
    let (is_loading, set_is_loading) = signal(false);
    let file_input_id = if compact { "image-file-input-compact" } else { "image-file-input" };

    let load = move |source: SelectionSource, file: Option<web_sys::File>| {
        let Some(token) = on_begin.run(()) else {
            return;
        };
        let Some(file) = file else {
            on_select.run((token, source, None));
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match read_selected_file(file).await {
                Ok(selected) => on_select.run((token, source, Some(selected))),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to read file: {}", e).into());
                }
            }
            set_is_loading.try_set(false);
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        drag.update(|d| d.drop_received());

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        load(SelectionSource::Drop, file);
    };

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Picking the same file again must fire `change` again.
        input.set_value("");
        load(SelectionSource::Picker, file);
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone-compact=compact
            class:drop-zone-active=move || drag.get().is_active()
            class:drop-zone-loading=move || is_loading.get()
            on:dragenter=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                drag.update(|d| d.enter());
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                drag.update(|d| d.over());
            }
            on:dragleave=move |_| drag.update(|d| d.leave())
            on:drop=on_drop
        >
            <Show
                when=move || is_loading.get()
                fallback=move || view! {
                    <div class="drop-zone-content">
                        <Show when=move || !compact>
                            <div class="drop-icon">"[leaf]"</div>
                        </Show>
                        <p class="drop-main">
                            {if compact {
                                "Drop another image here to replace it, or"
                            } else {
                                "Click or drag to upload an image"
                            }}
                        </p>
                        <label for=file_input_id class="btn btn-secondary">
                            "Browse Files"
                        </label>
                        <input
                            type="file"
                            id=file_input_id
                            accept="image/*"
                            style="display: none"
                            on:change=on_input_change
                        />
                    </div>
                }
            >
                <div class="drop-zone-loading-content">
                    <div class="spinner"></div>
                    <p>"Loading image..."</p>
                </div>
            </Show>
        </div>
    }
}

/// Read a browser `File` into a [`SelectedFile`].
async fn read_selected_file(file: web_sys::File) -> Result<SelectedFile, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer")?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();

    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}
