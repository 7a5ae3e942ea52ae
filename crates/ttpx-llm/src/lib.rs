//! TTPX Completion Client
//!
//! One outbound `generateContent` round trip to the Gemini API per
//! extraction request. No retries, no streaming, no caching.

pub mod gemini;

pub use gemini::{GeminiClient, DEFAULT_MODEL};
