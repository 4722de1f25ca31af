//! Configuration module for textgen
//!
//! This module contains:
//! - `client`: endpoint, model and prompt settings for a generation call

mod client;

pub use client::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROMPT};
