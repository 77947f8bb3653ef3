//! The studio session.

use crate::{ShotReel, StudioStatus, failure_message};
use cinema_composer::compose_prompt;
use cinema_core::{GeneratedShot, ShotConfiguration};
use cinema_error::{CinemaResult, StudioError, StudioErrorKind};
use cinema_interface::{GenerationRequest, ImageGenerator};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// One user's studio: a generator, a reel of captured shots and a status line.
///
/// `generate` takes `&mut self`, so a studio renders one shot at a time.
#[derive(Debug)]
pub struct Studio<G: ImageGenerator> {
    generator: G,
    reel: ShotReel,
    status: StudioStatus,
    model: Option<String>,
}

impl<G: ImageGenerator> Studio<G> {
    /// A studio with an empty reel.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            reel: ShotReel::new(),
            status: StudioStatus::Idle,
            model: None,
        }
    }

    /// Render with `model` instead of the generator's default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The backing generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Captured shots, newest first.
    pub fn reel(&self) -> &ShotReel {
        &self.reel
    }

    /// Current status line.
    pub fn status(&self) -> &StudioStatus {
        &self.status
    }

    /// Composes, renders and files one shot.
    ///
    /// A blank subject is rejected before anything is sent and leaves the
    /// status untouched. Any other failure sets the status to
    /// [`StudioStatus::Failed`] and is returned.
    ///
    /// # Errors
    ///
    /// - `EmptySubject` when the subject is blank
    /// - `TooManyReferences` when more images are attached than the generator takes
    /// - `UnsupportedReferenceFormat` when a reference is in a format the generator refuses
    /// - whatever the generator reports
    #[instrument(
        skip(self, config),
        fields(
            provider = self.generator.provider_name(),
            camera = %config.camera(),
            lens = %config.lens(),
            focal = %config.focal_length(),
        )
    )]
    pub async fn generate(&mut self, config: &ShotConfiguration) -> CinemaResult<&GeneratedShot> {
        if config.subject().trim().is_empty() {
            return Err(StudioError::new(StudioErrorKind::EmptySubject).into());
        }

        let limit = self.generator.max_reference_images();
        let count = config.reference_images().len();
        if count > limit {
            let err = StudioError::new(StudioErrorKind::TooManyReferences { count, limit }).into();
            self.status = StudioStatus::Failed(failure_message(&err));
            return Err(err);
        }

        let formats = self.generator.supported_reference_formats();
        if let Some(unsupported) = config
            .reference_images()
            .iter()
            .find(|image| !formats.contains(&image.mime_type().as_str()))
        {
            let err = StudioError::new(StudioErrorKind::UnsupportedReferenceFormat(
                unsupported.mime_type().clone(),
            ))
            .into();
            self.status = StudioStatus::Failed(failure_message(&err));
            return Err(err);
        }

        self.status = StudioStatus::Developing;
        info!("{}", self.status);

        let prompt = compose_prompt(config);
        debug!(prompt = %prompt, "Prompt composed");

        let mut request = GenerationRequest::from_shot(config, prompt.clone());
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        match self.generator.generate_image(&request).await {
            Ok(image) => {
                let shot = GeneratedShot::new(image, config.subject(), prompt, config.settings());
                self.status = StudioStatus::Captured;
                info!(shot_id = %shot.id(), settings = %shot.settings(), "{}", self.status);
                Ok(self.reel.add(shot))
            }
            Err(err) => {
                self.status = StudioStatus::Failed(failure_message(&err));
                error!(error = %err, "{}", self.status);
                Err(err)
            }
        }
    }

    /// Removes a shot from the reel.
    pub fn delete_shot(&mut self, id: Uuid) -> bool {
        self.reel.delete(id)
    }

    /// Empties the reel.
    pub fn clear_reel(&mut self) {
        self.reel.clear();
    }

    /// Writes a shot's image into `dir` as `<id>.<ext>`, creating `dir` if needed.
    ///
    /// # Errors
    ///
    /// - `ShotNotFound` when `id` is not on the reel
    /// - `OutputWrite` when the directory or file cannot be written
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub async fn save_shot(&self, id: Uuid, dir: impl AsRef<Path>) -> CinemaResult<PathBuf> {
        let shot = self
            .reel
            .get(id)
            .ok_or_else(|| StudioError::new(StudioErrorKind::ShotNotFound(id.to_string())))?;

        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            StudioError::new(StudioErrorKind::OutputWrite(format!("{}: {}", dir.display(), e)))
        })?;

        let path = dir.join(shot.file_name());
        tokio::fs::write(&path, shot.image().data())
            .await
            .map_err(|e| {
                StudioError::new(StudioErrorKind::OutputWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;

        info!(path = %path.display(), "Shot saved");
        Ok(path)
    }
}
