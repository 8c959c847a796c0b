use anyhow::Result;
use clap::Parser;
use contrastgen::{
    logger::{self, LogLevel, LoggerConfig},
    Config, GeminiImageClient, ImageRequest, Studio,
};
use std::path::PathBuf;

/// Generate two contrasting images that share one visual style.
#[derive(Parser, Debug)]
#[command(name = "contrastgen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Description of the first (left) image
    #[arg(long, default_value = "")]
    left: String,

    /// Description of the second (right) image
    #[arg(long, default_value = "")]
    right: String,

    /// Title of the left image, "Photo 1" when blank
    #[arg(long, default_value = "")]
    left_title: String,

    /// Title of the right image, "Photo 2" when blank
    #[arg(long, default_value = "")]
    right_title: String,

    /// Concept label of the left image
    #[arg(long, default_value = "")]
    left_concept: String,

    /// Concept label of the right image
    #[arg(long, default_value = "")]
    right_concept: String,

    /// Shared style applied to both images
    #[arg(long)]
    style: Option<String>,

    /// Directory the images are written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Gemini model id
    #[arg(long)]
    model: Option<String>,

    /// Print the result as JSON instead of writing files
    #[arg(long)]
    json: bool,

    /// List known image models and exit
    #[arg(long)]
    list_models: bool,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Also append log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit log records as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn logger_config(&self) -> LoggerConfig {
        let mut config = LoggerConfig::new()
            .with_level(self.log_level)
            .with_json_output(self.log_json);
        if let Some(path) = &self.log_file {
            config = config.with_file_output(path);
        }
        config
    }

    fn requests(&self) -> (ImageRequest, ImageRequest) {
        let left = ImageRequest::new(self.left.as_str())
            .with_title(self.left_title.as_str())
            .with_concept(self.left_concept.as_str());
        let right = ImageRequest::new(self.right.as_str())
            .with_title(self.right_title.as_str())
            .with_concept(self.right_concept.as_str());
        (left, right)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_loaded = dotenv::dotenv().is_ok();
    logger::init_with_config(cli.logger_config())?;
    if env_loaded {
        log::debug!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using system environment variables");
    }

    if cli.list_models {
        for (id, name, provider) in GeminiImageClient::supported_models() {
            println!("{}  {} ({})", id, name, provider);
        }
        return Ok(());
    }

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (left, right) = cli.requests();

    let mut config = Config::from_env();
    if let Some(model) = cli.model {
        config.gemini = config.gemini.with_model(model);
    }
    if let Some(style) = cli.style {
        config = config.with_style(style);
    }
    if let Some(dir) = cli.output {
        config = config.with_output_dir(dir);
    }
    logger::log_config_info(&config);

    let mut studio = match Studio::from_config(config.gemini.clone()) {
        Ok(studio) => studio,
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(e.into());
        }
    };

    let (left_image, right_image) = studio
        .generate(&left, &right, &config.default_style)
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(studio.state())?);
        return Ok(());
    }

    let timestamp = chrono::Utc::now().timestamp_millis();
    for image in [&left_image, &right_image] {
        let path = image.save_to(&config.output_dir, timestamp)?;
        println!("{}: {}", image.title, path.display());
    }

    Ok(())
}
