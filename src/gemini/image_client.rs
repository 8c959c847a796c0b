use crate::{
    config::GeminiConfig,
    error::{ContrastError, Result},
    models::{AspectRatio, GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// The remote model as the orchestrator sees it: one prompt in, one raw
/// `generateContent` response out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_content(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GenerateContentResponse>;
}

#[derive(Clone)]
pub struct GeminiImageClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiImageClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| ContrastError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model().to_string(),
            base_url: config.base_url().to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("gemini-2.5-flash-image", "Gemini 2.5 Flash Image", "Google"),
            (
                "gemini-2.5-flash-image-preview",
                "Gemini 2.5 Flash Image (preview)",
                "Google",
            ),
            (
                "gemini-2.0-flash-preview-image-generation",
                "Gemini 2.0 Flash Image Generation",
                "Google",
            ),
        ]
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageClient {
    async fn generate_content(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GenerateContentResponse> {
        let payload = GenerateContentRequest::image_prompt(prompt, aspect_ratio);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| ContrastError::SerializationError(e.to_string()))?;

        log::info!("Generating image with model: {}", self.model);
        log::debug!("Image request prompt: {}", prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ContrastError::RequestError(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Gemini returned {}: {}", status, error_text);
            return Err(ContrastError::RequestError(format!(
                "Gemini returned {}: {}",
                status, error_text
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ContrastError::ResponseError(e.to_string()))
    }
}

/// Returns the first image-bearing part of the first candidate as a
/// `data:` URI.
pub fn extract_image(response: &GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.inline_data.as_ref())
                .find(|data| data.is_image())
        })
        .map(|data| format!("data:{};base64,{}", data.mime_type, data.data))
        .ok_or(ContrastError::NoImageData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Part};

    #[test]
    fn test_client_requires_key() {
        let result = GeminiImageClient::new(GeminiConfig::new());
        assert!(matches!(result, Err(ContrastError::ConfigError(_))));
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiImageClient::new(
            GeminiConfig::new()
                .with_api_key("key")
                .with_base_url("http://localhost:9999/v1beta/"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[test]
    fn test_supported_models_include_default() {
        assert!(GeminiImageClient::supported_models()
            .iter()
            .any(|(id, _, _)| *id == crate::config::DEFAULT_MODEL));
    }

    #[test]
    fn test_extract_first_image_part() {
        let response = GenerateContentResponse::with_parts(vec![
            Part::text("Here you go"),
            Part::inline("text/plain", "bm90IGFuIGltYWdl"),
            Part::inline("image/png", "Zmlyc3Q="),
            Part::inline("image/jpeg", "c2Vjb25k"),
        ]);
        assert_eq!(
            extract_image(&response).unwrap(),
            "data:image/png;base64,Zmlyc3Q="
        );
    }

    #[test]
    fn test_extract_without_image_part() {
        let response = GenerateContentResponse::with_parts(vec![Part::text("I can't draw that")]);
        assert!(matches!(
            extract_image(&response),
            Err(ContrastError::NoImageData)
        ));
    }

    #[test]
    fn test_extract_without_candidates() {
        assert!(matches!(
            extract_image(&GenerateContentResponse::default()),
            Err(ContrastError::NoImageData)
        ));

        let blocked = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("SAFETY".to_string()),
            }],
        };
        assert!(matches!(
            extract_image(&blocked),
            Err(ContrastError::NoImageData)
        ));
    }

    #[test]
    fn test_extract_ignores_later_candidates() {
        let mut response = GenerateContentResponse::with_parts(vec![Part::text("no image")]);
        response
            .candidates
            .extend(GenerateContentResponse::with_parts(vec![Part::inline("image/png", "AA==")]).candidates);
        assert!(extract_image(&response).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let client = GeminiImageClient::new(
            GeminiConfig::new()
                .with_api_key("key")
                .with_base_url("http://127.0.0.1:1/v1beta")
                .with_timeout(2),
        )
        .unwrap();
        let result = client.generate_content("a cat", AspectRatio::Square).await;
        assert!(matches!(result, Err(ContrastError::RequestError(_))));
    }
}
