pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod studio;

pub use config::{Config, GeminiConfig};
pub use error::{ContrastError, Result};
pub use gemini::{compose, extract_image, GeminiImageClient, ImageGenerator, PairOrchestrator};
pub use models::{
    AspectRatio, GeneratedImage, GenerationState, ImageRequest, PairInput, Side,
};
pub use studio::Studio;
