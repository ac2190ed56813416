use crate::color::hex::Rgb8;

/// Brand color per content domain, keyed by the identifier the web app uses.
pub const DOMAIN_COLORS: [(&str, Rgb8); 7] = [
    ("math", Rgb8::from_hex_u32(0x58c4dd)),
    ("science", Rgb8::from_hex_u32(0xc55f73)),
    ("humanities", Rgb8::from_hex_u32(0xf16257)),
    ("economics-finance-domain", Rgb8::from_hex_u32(0xd2923d)),
    ("computing", Rgb8::from_hex_u32(0x76b056)),
    ("test-prep", Rgb8::from_hex_u32(0xb189c6)),
    ("partner-content", Rgb8::from_hex_u32(0x46a592)),
];

/// Color used for unknown or empty domains.
pub const DEFAULT_DOMAIN_COLOR: Rgb8 = Rgb8::from_hex_u32(0x46a592);

/// Look up the brand color for `domain`.
///
/// Case-sensitive; anything not in [`DOMAIN_COLORS`] (including `""`) maps to
/// [`DEFAULT_DOMAIN_COLOR`].
pub fn resolve_domain_color(domain: &str) -> Rgb8 {
    DOMAIN_COLORS
        .iter()
        .find(|(key, _)| *key == domain)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_DOMAIN_COLOR)
}

/// Channel representation a renderer variant hands to the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChannels {
    /// `[r, g, b, 1.0]` in `0.0..=1.0`.
    Normalized,
    /// `[r, g, b]` in `0..=255`.
    Bytes,
}

impl ColorChannels {
    /// Encode `color` in this representation.
    pub fn encode(self, color: Rgb8) -> SceneColor {
        match self {
            Self::Normalized => SceneColor::Normalized(color.to_normalized_rgba()),
            Self::Bytes => SceneColor::Bytes(color.to_bytes()),
        }
    }
}

/// A color value as passed to a scene color node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneColor {
    /// `[r, g, b, a]` in `0.0..=1.0`.
    Normalized([f32; 4]),
    /// `[r, g, b]` in `0..=255`, opaque.
    Bytes([u8; 3]),
}

impl SceneColor {
    /// Straight RGBA8, whichever representation was supplied.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f32) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        match self {
            Self::Normalized([r, g, b, a]) => [to_u8(r), to_u8(g), to_u8(b), to_u8(a)],
            Self::Bytes([r, g, b]) => [r, g, b, 255],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/domain.rs"]
mod tests;
