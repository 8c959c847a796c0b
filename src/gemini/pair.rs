use std::sync::Arc;

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    error::{ContrastError, Result},
    gemini::{image_client::extract_image, prompt::compose, ImageGenerator},
    logger,
    models::{AspectRatio, GeneratedImage, PairInput, Side},
};

/// Generates both sides of a contrast pair concurrently.
#[derive(Clone)]
pub struct PairOrchestrator {
    generator: Arc<dyn ImageGenerator>,
    aspect_ratio: AspectRatio,
}

impl PairOrchestrator {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            generator,
            aspect_ratio: AspectRatio::Square,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Returns `(left, right)` in input order, or the first error either
    /// side produced. Descriptions must already be validated.
    ///
    /// Both calls run as spawned tasks. When one fails the other is left to
    /// finish on its own and its result is dropped.
    pub async fn generate_pair(
        &self,
        left: PairInput,
        right: PairInput,
        style: &str,
    ) -> Result<(GeneratedImage, GeneratedImage)> {
        let request_id = Uuid::new_v4();
        let _timer = logger::timer(&format!("contrast pair {}", request_id));
        log::info!(
            "🎨 [req:{}] Generating pair '{}' vs '{}'",
            request_id,
            left.title,
            right.title
        );

        let left_task = self.spawn_side(Side::Left, left, style);
        let right_task = self.spawn_side(Side::Right, right, style);

        let pair = tokio::try_join!(settle(left_task), settle(right_task));
        match &pair {
            Ok(_) => log::info!("✅ [req:{}] Pair ready", request_id),
            Err(e) => log::error!("❌ [req:{}] Pair failed: {}", request_id, e),
        }
        pair
    }

    fn spawn_side(
        &self,
        side: Side,
        input: PairInput,
        style: &str,
    ) -> JoinHandle<Result<GeneratedImage>> {
        let generator = Arc::clone(&self.generator);
        let style = style.to_string();
        let aspect_ratio = self.aspect_ratio;
        tokio::spawn(async move {
            generate_single(generator.as_ref(), side, input, &style, aspect_ratio).await
        })
    }
}

async fn settle(task: JoinHandle<Result<GeneratedImage>>) -> Result<GeneratedImage> {
    task.await
        .map_err(|e| ContrastError::InternalError(format!("generation task failed: {}", e)))?
}

/// One remote call: compose, send, extract.
pub async fn generate_single(
    generator: &dyn ImageGenerator,
    side: Side,
    input: PairInput,
    style: &str,
    aspect_ratio: AspectRatio,
) -> Result<GeneratedImage> {
    let prompt = compose(&input.description, style);

    let result = match generator.generate_content(&prompt, aspect_ratio).await {
        Ok(response) => extract_image(&response),
        Err(e) => Err(e),
    };

    match result {
        Ok(url) => {
            log::debug!("{} image received for '{}'", side, input.title);
            Ok(GeneratedImage {
                id: side.id().to_string(),
                url,
                prompt,
                title: input.title,
            })
        }
        Err(e) => {
            log::error!("Error generating image for {}: {}", input.title, e);
            Err(e)
        }
    }
}
