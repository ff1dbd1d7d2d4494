//! Severity bucket derived from a classifier label.

use super::types::PredictionResult;

/// Display grouping for a diagnosis. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Healthy,
    EarlyStage,
    LateStage,
    Unknown,
}

impl StatusCategory {
    /// Case-insensitive, unanchored keyword match. The first keyword that
    /// matches wins, so "early/late" style labels resolve to `EarlyStage`.
    pub fn from_class(class: &str) -> Self {
        let lower = class.to_lowercase();
        if lower.contains("healthy") {
            StatusCategory::Healthy
        } else if lower.contains("early") {
            StatusCategory::EarlyStage
        } else if lower.contains("late") {
            StatusCategory::LateStage
        } else {
            StatusCategory::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Healthy => "Healthy",
            StatusCategory::EarlyStage => "Early stage",
            StatusCategory::LateStage => "Late stage",
            StatusCategory::Unknown => "Unknown",
        }
    }

    /// CSS modifier for the result card and badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusCategory::Healthy => "status-healthy",
            StatusCategory::EarlyStage => "status-early",
            StatusCategory::LateStage => "status-late",
            StatusCategory::Unknown => "status-unknown",
        }
    }
}

pub fn derive_status(result: &PredictionResult) -> StatusCategory {
    StatusCategory::from_class(&result.class)
}

/// Confidence as a percentage with two decimals. Values outside `[0, 1]`
/// are shown as-is.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}
