//! Model module for text generation
//!
//! This module provides:
//! - `request`: the JSON body posted to the generate endpoint
//! - `response`: call outcome and the typed view of a successful body
//! - `client`: HTTP client issuing a single generate request

mod client;
mod request;
mod response;

pub use client::{generate_text, TextGenerationClient};
pub use request::GenerationRequest;
pub use response::{GenerateResponse, GenerationResult};
