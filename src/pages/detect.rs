//! Detection page: pick or drop a leaf photo, classify it, show the result.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::drop_zone::ImageDropZone;
use crate::components::result_card::ResultCard;
use crate::detection::{
    CompletionOutcome, DetectionController, LifecycleState, ObjectUrlSource, SelectedFile,
    SelectionSource, SelectionToken,
};

/// Detection page component.
#[component]
pub fn DetectPage() -> impl IntoView {
    let controller = RwSignal::new(DetectionController::new(ObjectUrlSource));

    let state = Memo::new(move |_| controller.with(|c| c.state()));
    let preview = Memo::new(move |_| controller.with(|c| c.preview().cloned()));
    let file_name = Memo::new(move |_| controller.with(|c| c.selected_file().map(|f| f.name.clone())));
    let result = Memo::new(move |_| controller.with(|c| c.result().cloned()));
    let notice = Memo::new(move |_| controller.with(|c| c.notice().map(|n| n.to_string())));

    // Files dropped outside the zone must not navigate the webview away.
    let guard_enter = window_event_listener(ev::dragenter, |ev| ev.prevent_default());
    let guard_over = window_event_listener(ev::dragover, |ev| ev.prevent_default());
    let guard_drop = window_event_listener(ev::drop, |ev| ev.prevent_default());
    on_cleanup(move || {
        guard_enter.remove();
        guard_over.remove();
        guard_drop.remove();
    });

    let on_begin = Callback::new(move |_: ()| controller.try_update(|c| c.begin_selection()));

    let on_select = Callback::new(
        move |(token, source, file): (SelectionToken, SelectionSource, Option<SelectedFile>)| {
            if controller.try_update(|c| c.finish_selection(&token, source, file)) == Some(false) {
                web_sys::console::debug_1(&"Discarded superseded file selection".into());
            }
        },
    );

    let on_detect = move |_| {
        let ticket = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                web_sys::console::warn_1(&format!("Submit ignored: {}", e).into());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = commands::classify_image(ticket.file()).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Error uploading file: {}", e).into());
            }
            if controller.try_update(|c| c.complete_submit(&ticket, outcome))
                == Some(CompletionOutcome::Stale)
            {
                web_sys::console::debug_1(
                    &format!("Discarded stale response for attempt {}", ticket.generation()).into(),
                );
            }
        });
    };

    let on_reset = Callback::new(move |_: ()| controller.update(|c| c.reset()));

    let preview_image = move |class: &'static str, alt: &'static str| {
        preview.get().map(|src| view! {
            <img src=src class=class alt=alt />
            <p class="file-name">{move || file_name.get().unwrap_or_default()}</p>
        })
    };

    view! {
        <div class="page detect-page">
            <h2>"Potato Disease Detection"</h2>
            <p class="page-description">
                "Upload a photo of a potato leaf to check it for early or late blight."
            </p>

            <div class="detect-card">
                {move || notice.get().map(|msg| view! {
                    <div class="notice notice-error">{msg}</div>
                })}

                {move || match state.get() {
                    LifecycleState::Idle => view! {
                        <ImageDropZone on_begin=on_begin on_select=on_select />
                    }.into_any(),

                    LifecycleState::PreviewReady => view! {
                        <div class="detect-preview">
                            {move || preview_image("preview-image", "Preview")}
                            <div class="action-buttons">
                                <button class="btn btn-primary" on:click=on_detect>
                                    "Detect Disease"
                                </button>
                                <button class="btn btn-secondary" on:click=move |_| on_reset.run(())>
                                    "Clear"
                                </button>
                            </div>
                            <ImageDropZone on_begin=on_begin on_select=on_select compact=true />
                        </div>
                    }.into_any(),

                    LifecycleState::Submitting => view! {
                        <div class="analyzing-state">
                            {move || preview_image("preview-image analyzing", "Analyzing...")}
                            <div class="loading-indicator">
                                <div class="spinner"></div>
                                <p>"Analyzing image..."</p>
                            </div>
                            <button class="btn btn-secondary" on:click=move |_| on_reset.run(())>
                                "Cancel"
                            </button>
                        </div>
                    }.into_any(),

                    LifecycleState::ResultShown => view! {
                        <div class="detect-results">
                            {move || preview_image("preview-image small", "Classified leaf")}
                            {move || result.get().map(|r| view! {
                                <ResultCard result=r on_reset=on_reset />
                            })}
                            <ImageDropZone on_begin=on_begin on_select=on_select compact=true />
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
