//! `cinema generate` handler.

use cinema::{
    CinemaResult, GeminiImageClient, ShotArgs, Studio, StudioConfig, StudioStatus, load_reference,
};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Compose, render and save one shot.
#[instrument(skip_all)]
pub async fn generate_shot(
    args: &ShotArgs,
    config: &StudioConfig,
    references: &[PathBuf],
    output: Option<PathBuf>,
    model: Option<String>,
) -> CinemaResult<()> {
    let mut reference_images = Vec::with_capacity(references.len());
    for path in references {
        reference_images.push(load_reference(path).await?);
    }
    let shot = args.to_configuration(config, reference_images)?;

    let model = model.unwrap_or_else(|| config.model().clone());
    let output_dir = output.unwrap_or_else(|| config.output_dir().clone());
    debug!(model = %model, output_dir = %output_dir.display(), "Rendering shot");

    let mut studio = Studio::new(GeminiImageClient::new()?).with_model(model);

    println!("{}", StudioStatus::Developing);
    let id = match studio.generate(&shot).await {
        Ok(captured) => *captured.id(),
        Err(err) => {
            println!("{}", studio.status());
            return Err(err);
        }
    };

    let path = studio.save_shot(id, &output_dir).await?;
    println!("{}", studio.status());
    if let Some(captured) = studio.reel().get(id) {
        println!("{}", captured.settings());
    }
    println!("{}", path.display());
    Ok(())
}
