//! LLM domain — completion calls to the hosted Gemini model.
//!
//! Public API for the model boundary.
//! External code should only use the items exported here.
//!
//!   - provider.rs — `CompletionClient` trait (text + vision)
//!   - gemini.rs   — `GeminiClient`, the REST implementation
//!   - types.rs    — `ImageInput` and its mime types

pub mod gemini;
pub mod provider;
pub mod types;

pub use gemini::GeminiClient;
pub use provider::CompletionClient;
pub use types::{ImageInput, ImageMime};
