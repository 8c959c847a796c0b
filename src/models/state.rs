use serde::{Deserialize, Serialize};

use super::image::GeneratedImage;

/// Where a contrast-pair session currently stands.
///
/// Images only exist inside `Success`, and only both at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationState {
    Idle,
    Generating,
    Success {
        left: GeneratedImage,
        right: GeneratedImage,
    },
    Error {
        message: String,
    },
}

impl Default for GenerationState {
    fn default() -> Self {
        GenerationState::Idle
    }
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationState::Generating)
    }

    pub fn images(&self) -> Option<(&GeneratedImage, &GeneratedImage)> {
        match self {
            GenerationState::Success { left, right } => Some((left, right)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationState::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(GenerationState::default(), GenerationState::Idle);
        assert!(GenerationState::default().images().is_none());
    }

    #[test]
    fn test_error_accessor() {
        let state = GenerationState::Error {
            message: "boom".to_string(),
        };
        assert_eq!(state.error(), Some("boom"));
        assert!(state.images().is_none());
        assert!(!state.is_generating());
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let json = serde_json::to_value(GenerationState::Generating).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "generating" }));
    }
}
