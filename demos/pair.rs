use contrastgen::{GeminiConfig, ImageRequest, Studio};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_loaded = dotenv::dotenv().is_ok();
    contrastgen::logger::init()?;
    if env_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found");
    }

    let mut studio = Studio::from_config(GeminiConfig::from_env())?;

    let left = ImageRequest::new("a single seed resting in dark soil")
        .with_title("The Beginning")
        .with_concept("beginning");
    let right = ImageRequest::new("an ancient tree heavy with fruit at dusk")
        .with_title("The End")
        .with_concept("end");

    let (first, second) = studio
        .generate(&left, &right, "Photorealistic, cinematic lighting, 8k high resolution")
        .await?;

    let timestamp = chrono::Utc::now().timestamp_millis();
    for image in [&first, &second] {
        let path = image.save_to(Path::new("."), timestamp)?;
        println!("{} -> {}", image.title, path.display());
    }

    Ok(())
}
