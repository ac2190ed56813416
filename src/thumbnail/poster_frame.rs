use serde::Deserialize;

use crate::{
    foundation::error::{ThumbnailError, ThumbnailResult},
    scene::renderer::{IMAGE_EXISTS_SWITCH, INPUT_IMAGE_NODE, SceneRenderer},
    thumbnail::contract::{ThumbnailRenderer, apply_domain_color, load_image},
};

/// Entry options accepted by [`PosterFrameRenderer`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosterFrameOptions {
    /// Content domain selecting the brand color.
    pub domain: String,
    /// When `false`, an image that fails to load only turns the image-exists switch off.
    pub has_image: bool,
}

impl Default for PosterFrameOptions {
    fn default() -> Self {
        Self {
            domain: "math".to_owned(),
            has_image: true,
        }
    }
}

/// Poster frame: input image, image-exists switch, domain color.
#[derive(Clone, Debug)]
pub struct PosterFrameRenderer {
    input_image: String,
    options: PosterFrameOptions,
}

impl PosterFrameRenderer {
    /// Renderer for `input_image` (a portable path).
    pub fn new(input_image: impl Into<String>, options: PosterFrameOptions) -> Self {
        Self {
            input_image: input_image.into(),
            options,
        }
    }
}

impl ThumbnailRenderer for PosterFrameRenderer {
    fn set_up(&self, scene: &mut dyn SceneRenderer) -> ThumbnailResult<()> {
        let image_valid = load_image(scene, INPUT_IMAGE_NODE, &self.input_image);
        scene.set_switch(IMAGE_EXISTS_SWITCH, image_valid);
        if self.options.has_image && !image_valid {
            return Err(ThumbnailError::ImageLoad);
        }

        apply_domain_color(scene, self.color_channels(), &self.options.domain);
        Ok(())
    }
}
