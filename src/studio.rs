//! Session controller for one contrast-pair form.
//!
//! Owns the [`GenerationState`] and performs the checks that must pass
//! before any request leaves the process: a configured API key and a
//! description on both sides.

use std::sync::Arc;

use crate::{
    config::GeminiConfig,
    error::{ContrastError, Result},
    gemini::{GeminiImageClient, ImageGenerator, PairOrchestrator},
    models::{GeneratedImage, GenerationState, ImageRequest, PairInput, Side},
};

pub struct Studio {
    orchestrator: PairOrchestrator,
    config: GeminiConfig,
    state: GenerationState,
}

impl Studio {
    pub fn new(generator: Arc<dyn ImageGenerator>, config: GeminiConfig) -> Self {
        let orchestrator = PairOrchestrator::new(generator).with_aspect_ratio(config.aspect_ratio);
        Self {
            orchestrator,
            config,
            state: GenerationState::Idle,
        }
    }

    /// Builds a studio backed by the Gemini HTTP client. Fails when the API
    /// key is missing.
    pub fn from_config(config: GeminiConfig) -> Result<Self> {
        let client = GeminiImageClient::new(config.clone())?;
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = GenerationState::Idle;
    }

    pub async fn generate(
        &mut self,
        left: &ImageRequest,
        right: &ImageRequest,
        style: &str,
    ) -> Result<(GeneratedImage, GeneratedImage)> {
        if let Err(e) = self.check_preconditions(left, right) {
            return Err(self.fail(e));
        }

        self.state = GenerationState::Generating;

        let left = pair_input(left, Side::Left);
        let right = pair_input(right, Side::Right);

        match self.orchestrator.generate_pair(left, right, style).await {
            Ok((left, right)) => {
                self.state = GenerationState::Success {
                    left: left.clone(),
                    right: right.clone(),
                };
                Ok((left, right))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn check_preconditions(&self, left: &ImageRequest, right: &ImageRequest) -> Result<()> {
        self.config.validate()?;

        if left.description.is_empty() || right.description.is_empty() {
            return Err(ContrastError::ValidationError(
                "provide a detailed description for both images".into(),
            ));
        }
        Ok(())
    }

    fn fail(&mut self, error: ContrastError) -> ContrastError {
        log::warn!("Generation ended in error: {}", error);
        self.state = GenerationState::Error {
            message: error.to_string(),
        };
        error
    }
}

fn pair_input(request: &ImageRequest, side: Side) -> PairInput {
    let title = if request.title.is_empty() {
        side.default_title().to_string()
    } else {
        request.title.clone()
    };
    PairInput::new(request.description.clone(), title)
}
