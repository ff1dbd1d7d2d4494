//! Detection request lifecycle.
//!
//! Everything in this module is plain Rust with no browser calls outside
//! [`preview::ObjectUrlSource`], so the state machine can be unit tested on
//! the host.

pub mod controller;
pub mod error;
pub mod input;
pub mod preview;
pub mod status;
pub mod types;

pub use controller::{CompletionOutcome, DetectionController, LifecycleState, SelectionToken};
pub use input::{DragTracker, SelectionSource};
pub use preview::ObjectUrlSource;
pub use status::{derive_status, format_confidence, StatusCategory};
pub use types::{PredictionResult, SelectedFile};
