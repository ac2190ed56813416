use serde::Deserialize;

use crate::{
    foundation::error::{ThumbnailError, ThumbnailResult},
    scene::renderer::{INPUT_IMAGE_NODE, SceneRenderer},
    thumbnail::contract::{ThumbnailRenderer, apply_domain_color, load_image},
};

/// Entry options accepted by [`GeneralRenderer`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralOptions {
    /// Content domain selecting the brand color.
    pub domain: String,
}

/// Input image over the domain color. A missing image is always a failure.
#[derive(Clone, Debug)]
pub struct GeneralRenderer {
    input_image: String,
    options: GeneralOptions,
}

impl GeneralRenderer {
    /// Renderer for `input_image` (a portable path).
    pub fn new(input_image: impl Into<String>, options: GeneralOptions) -> Self {
        Self {
            input_image: input_image.into(),
            options,
        }
    }
}

impl ThumbnailRenderer for GeneralRenderer {
    fn set_up(&self, scene: &mut dyn SceneRenderer) -> ThumbnailResult<()> {
        apply_domain_color(scene, self.color_channels(), &self.options.domain);

        if !load_image(scene, INPUT_IMAGE_NODE, &self.input_image) {
            return Err(ThumbnailError::ImageLoad);
        }
        Ok(())
    }
}
