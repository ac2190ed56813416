//! Thumbnail renderer variants.
//!
//! Each variant knows which scene nodes its thumbnail kind uses and how an entry's options map
//! onto them. All variants share [`contract::ThumbnailRenderer::render`], which switches the
//! scene's working directory, runs the variant's set-up, and renders.

/// The renderer trait, variant selection, and entry option parsing.
pub mod contract;
/// Image plus domain color.
pub mod general;
/// Poster frame with an optional image.
pub mod poster_frame;
/// Single-scene title card (image and text both optional).
pub mod title_card;
/// Video thumbnail with laid-out title text.
pub mod youtube;
