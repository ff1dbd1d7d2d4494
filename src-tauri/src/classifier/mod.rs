//! Client for the remote image classification endpoint.

pub mod client;
pub mod types;

pub use client::{parse_endpoint, parse_prediction, ClassifierClient, DEFAULT_ENDPOINT};
pub use types::*;
