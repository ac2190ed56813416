use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    color::domain::{ColorChannels, resolve_domain_color},
    foundation::error::{ThumbnailError, ThumbnailResult},
    paths::host::translate_path,
    scene::renderer::{DOMAIN_COLOR_NODE, SceneRenderer},
    thumbnail::{
        general::GeneralRenderer, poster_frame::PosterFrameRenderer, title_card::TitleCardRenderer,
        youtube::YouTubeRenderer,
    },
};

/// One thumbnail, configured for a single entry, ready to be set up on a scene and rendered.
///
/// Expected failures (image did not load, render did not finish, bad options) come back as
/// `Err`; nothing here panics on bad input.
pub trait ThumbnailRenderer {
    /// Channel representation this variant uses for color nodes.
    fn color_channels(&self) -> ColorChannels {
        ColorChannels::Normalized
    }

    /// Configure `scene` for this thumbnail without rendering.
    fn set_up(&self, scene: &mut dyn SceneRenderer) -> ThumbnailResult<()>;

    /// Set up and render to `output_path` (a portable path; translated for the host).
    ///
    /// With `change_working_directory`, the scene's working directory is first switched to its
    /// template directory. The switch is not reverted afterwards.
    #[tracing::instrument(level = "debug", skip(self, scene))]
    fn render(
        &self,
        scene: &mut dyn SceneRenderer,
        output_path: &str,
        change_working_directory: bool,
    ) -> ThumbnailResult<()> {
        if change_working_directory {
            let dir = scene.template_dir().to_path_buf();
            scene.set_working_dir(&dir);
        }

        self.set_up(scene)?;

        let host_path = translate_path(output_path);
        tracing::debug!(output = %host_path, "rendering");
        if !scene.render_to(&host_path).is_finished() {
            return Err(ThumbnailError::RenderIncomplete);
        }
        Ok(())
    }
}

/// Point an image node at a portable path. Returns whether it loaded.
pub(crate) fn load_image(scene: &mut dyn SceneRenderer, node: &str, path: &str) -> bool {
    let host_path = translate_path(path);
    let loaded = scene.set_scene_image(node, &host_path);
    if !loaded {
        tracing::warn!(node, path = %host_path, "image failed to load");
    }
    loaded
}

/// Set the domain color node for `domain`.
pub(crate) fn apply_domain_color(
    scene: &mut dyn SceneRenderer,
    channels: ColorChannels,
    domain: &str,
) {
    let color = channels.encode(resolve_domain_color(domain));
    scene.set_scene_color(DOMAIN_COLOR_NODE, color);
}

/// Parse an entry's option keys into a variant's options struct.
///
/// Options structs deny unknown fields, so a misspelled key fails here instead of being
/// ignored.
pub(crate) fn parse_options<T: DeserializeOwned>(
    kind: RendererKind,
    options: &Map<String, Value>,
) -> ThumbnailResult<T> {
    serde_json::from_value(Value::Object(options.clone()))
        .map_err(|e| ThumbnailError::configuration(format!("{kind} renderer: {e}")))
}

/// Which renderer variant a batch uses. Every entry in a batch shares one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// Input image over the domain color.
    General,
    /// Domain-colored poster frame with an image-exists switch.
    PosterFrame,
    /// Video thumbnail with title text and an optional image.
    #[serde(rename = "youtube")]
    #[value(name = "youtube")]
    YouTube,
    /// Title card: optional text and optional image, image failures tolerated.
    TitleCard,
}

impl RendererKind {
    /// Name used on the command line and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::PosterFrame => "poster-frame",
            Self::YouTube => "youtube",
            Self::TitleCard => "title-card",
        }
    }

    /// Build the variant for one entry from its input image path and remaining option keys.
    pub fn build(
        self,
        input_image: impl Into<String>,
        options: &Map<String, Value>,
    ) -> ThumbnailResult<Box<dyn ThumbnailRenderer>> {
        let input_image = input_image.into();
        let renderer: Box<dyn ThumbnailRenderer> = match self {
            Self::General => Box::new(GeneralRenderer::new(
                input_image,
                parse_options(self, options)?,
            )),
            Self::PosterFrame => Box::new(PosterFrameRenderer::new(
                input_image,
                parse_options(self, options)?,
            )),
            Self::YouTube => Box::new(YouTubeRenderer::new(
                input_image,
                parse_options(self, options)?,
            )),
            Self::TitleCard => Box::new(TitleCardRenderer::new(
                input_image,
                parse_options(self, options)?,
            )),
        };
        Ok(renderer)
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/thumbnail/contract.rs"]
mod tests;
