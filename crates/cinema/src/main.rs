//! Cinema Studio CLI binary.
//!
//! This binary provides command-line access to the studio:
//! - Browse the camera, lens, angle and focal length catalogs
//! - Print composed prompts
//! - Render shots with Gemini image models

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "gemini")]
    use cli::generate_shot;
    use cinema::{Cli, Commands};
    use cli::{show_catalog, show_guide, show_prompt};

    // GEMINI_API_KEY may live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    cinema::telemetry::init_console_telemetry(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => cinema::StudioConfig::from_file(path)?,
        None => cinema::StudioConfig::load()?,
    };

    match cli.command {
        Commands::Catalog { kind, format } => {
            show_catalog(kind, format)?;
        }

        Commands::Prompt { shot, sections } => {
            show_prompt(&shot, &config, sections)?;
        }

        #[cfg(feature = "gemini")]
        Commands::Generate {
            shot,
            references,
            output,
            model,
        } => {
            generate_shot(&shot, &config, &references, output, model).await?;
        }

        Commands::Guide => {
            show_guide();
        }
    }

    Ok(())
}
