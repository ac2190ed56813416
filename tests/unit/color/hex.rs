use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(parse_hex("#58c4dd").unwrap(), Rgb8::new(0x58, 0xc4, 0xdd));
    assert_eq!(parse_hex("58C4DD").unwrap(), Rgb8::new(0x58, 0xc4, 0xdd));
}

#[test]
fn rejects_malformed_hex() {
    assert!(parse_hex("#58c4d").is_err());
    assert!(parse_hex("#58c4dd80").is_err());
    assert!(parse_hex("zzzzzz").is_err());
}

#[test]
fn hex_literal_and_normalized_channels() {
    let c = Rgb8::from_hex_u32(0xff8000);
    assert_eq!(c.to_bytes(), [255, 128, 0]);
    let n = c.to_normalized_rgba();
    assert!((n[0] - 1.0).abs() < 1e-6);
    assert!((n[1] - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(n[2], 0.0);
    assert_eq!(n[3], 1.0);
}

#[test]
fn deserializes_from_hex_string_or_byte_array() {
    let c: Rgb8 = serde_json::from_value(json!("#102030")).unwrap();
    assert_eq!(c, Rgb8::new(0x10, 0x20, 0x30));
    let c: Rgb8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));
    assert!(serde_json::from_value::<Rgb8>(json!([1, 2])).is_err());
}
