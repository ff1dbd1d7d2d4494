use leptos::prelude::*;

use crate::detection::StatusCategory;

#[component]
pub fn DiagnosisBadge(
    /// Severity bucket derived from the class label
    status: StatusCategory,
) -> impl IntoView {
    let icon = match status {
        StatusCategory::Healthy => "\u{2713}",
        StatusCategory::EarlyStage => "!",
        StatusCategory::LateStage => "\u{2717}",
        StatusCategory::Unknown => "?",
    };

    view! {
        <span class=format!("diagnosis-badge {}", status.css_class())>
            <span class="diagnosis-icon">{icon}</span>
            <span class="diagnosis-label">{status.label()}</span>
        </span>
    }
}
