use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ContrastError, Result};

/// One side of the form as the user fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub concept: String,
    pub title: String,
    pub description: String,
}

impl ImageRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = concept.into();
        self
    }
}

/// What the orchestrator needs for one side of the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairInput {
    pub description: String,
    pub title: String,
}

impl PairInput {
    pub fn new(description: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn id(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Side::Left => "Photo 1",
            Side::Right => "Photo 2",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    /// `data:<mime>;base64,<payload>`
    pub url: String,
    pub prompt: String,
    pub title: String,
}

impl GeneratedImage {
    /// Splits the data URI into its MIME type and decoded bytes.
    pub fn decode(&self) -> Result<(String, Vec<u8>)> {
        let rest = self
            .url
            .strip_prefix("data:")
            .ok_or_else(|| ContrastError::DecodeError("image url is not a data URI".into()))?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| ContrastError::DecodeError("data URI is not base64 encoded".into()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| ContrastError::DecodeError(e.to_string()))?;
        Ok((mime_type.to_string(), bytes))
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
    }

    pub fn file_name(&self, timestamp_ms: i64) -> String {
        let ext = match self.mime_type() {
            Some("image/jpeg") | Some("image/jpg") => "jpg",
            Some("image/webp") => "webp",
            Some("image/gif") => "gif",
            _ => "png",
        };
        format!("contrast-{}-{}.{}", self.id, timestamp_ms, ext)
    }

    /// Decodes the payload and writes it into `dir`, returning the file path.
    pub fn save_to(&self, dir: &Path, timestamp_ms: i64) -> Result<PathBuf> {
        let (_, bytes) = self.decode()?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name(timestamp_ms));
        std::fs::write(&path, bytes)?;
        log::info!("💾 Saved {} image to {}", self.id, path.display());
        Ok(path)
    }
}
