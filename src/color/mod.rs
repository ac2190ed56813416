//! Color values: hex parsing, domain brand colors, and scene channel encodings.

/// Domain identifier to brand color lookup.
pub mod domain;
/// Hex color parsing and 8-bit RGB values.
pub mod hex;
