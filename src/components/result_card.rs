use leptos::prelude::*;

use crate::components::diagnosis_badge::DiagnosisBadge;
use crate::detection::{derive_status, format_confidence, PredictionResult};

/// Diagnosis and confidence for a classified image.
#[component]
pub fn ResultCard(
    result: PredictionResult,
    /// Fired by "Test Another Image"
    on_reset: Callback<()>,
) -> impl IntoView {
    let status = derive_status(&result);
    let confidence = format_confidence(result.confidence);

    view! {
        <div class=format!("result-card {}", status.css_class())>
            <div class="result-header">
                <h3>"Result"</h3>
                <DiagnosisBadge status=status />
            </div>
            <div class="result-row">
                <span class="result-label">"Diagnosis:"</span>
                <span class="result-value">{result.class}</span>
            </div>
            <div class="result-row">
                <span class="result-label">"Confidence:"</span>
                <span class="result-value">{confidence}</span>
            </div>
            <button class="btn btn-primary btn-block" on:click=move |_| on_reset.run(())>
                "Test Another Image"
            </button>
        </div>
    }
}
