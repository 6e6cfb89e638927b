//! Completion provider trait — common interface for the hosted model.
//!
//! Pipelines are generic over this trait so they can run against the real
//! Gemini client or an in-process fake.

use super::types::ImageInput;
use crate::error::ApiError;

#[allow(async_fn_in_trait)]
pub trait CompletionClient {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Send an instruction plus the user's text, return the generated text.
    async fn complete_text(&self, prompt: &str, input: &str) -> Result<String, ApiError>;

    /// Send an instruction plus one image, return the generated text.
    async fn complete_vision(&self, prompt: &str, image: &ImageInput) -> Result<String, ApiError>;
}
