//! Image question pipeline.
//!
//! image + optional custom text → complete vision. No classification and
//! nothing is recorded in the history.

use crate::error::ApiError;
use crate::llm::{CompletionClient, ImageInput};
use crate::sector::prompts::image_prompt;

#[derive(Debug)]
pub struct ImageOutcome {
    /// The instruction actually sent, default or custom.
    pub prompt: String,
    pub answer: Result<String, ApiError>,
}

pub struct ImagePipeline<C> {
    client: C,
}

impl<C: CompletionClient> ImagePipeline<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn run(&self, image: &ImageInput, custom_prompt: Option<&str>) -> ImageOutcome {
        let prompt = image_prompt(custom_prompt).to_string();
        log::info!(
            "[PIPELINE] Image request, {} prompt",
            if custom_prompt.map(|p| !p.trim().is_empty()).unwrap_or(false) {
                "custom"
            } else {
                "default"
            }
        );

        let answer = self.client.complete_vision(&prompt, image).await;
        if let Err(e) = &answer {
            log::error!("[PIPELINE] Vision completion failed: {}", e);
        }
        ImageOutcome { prompt, answer }
    }
}
