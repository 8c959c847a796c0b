pub mod image_client;
pub mod pair;
pub mod prompt;

pub use image_client::{extract_image, GeminiImageClient, ImageGenerator};
#[cfg(test)]
pub use image_client::MockImageGenerator;
pub use pair::PairOrchestrator;
pub use prompt::compose;
