use super::*;
use serde_json::json;

fn parse(v: serde_json::Value) -> SceneTemplate {
    serde_json::from_value(v).unwrap()
}

#[test]
fn defaults_fill_in_canvas_and_framing() {
    let t = parse(json!({ "layers": [] }));
    assert_eq!(t.canvas, Canvas::default());
    assert_eq!(t.ortho_half_width, 5.0);
    assert!(t.validate().is_ok());
    assert_eq!(t.layout_frame(), LayoutFrame::default());
}

#[test]
fn valid_template_with_all_layer_kinds() {
    let t = parse(json!({
        "canvas": { "width": 64, "height": 36 },
        "colors": { "DomainColor": "#46a592", "Plate": [0, 0, 0] },
        "switches": { "ImageExists": false, "TextExists": false },
        "images": ["InputImage"],
        "layers": [
            { "type": "fill", "color": "DomainColor" },
            { "type": "image", "image": "InputImage", "rect": [0.1, 0.1, 0.8, 0.8],
              "visible_when": "ImageExists" },
            { "type": "title_plate", "color": "Plate", "visible_when": "TextExists" }
        ]
    }));
    t.validate().unwrap();
    assert_eq!(t.layers[1].visible_when(), Some("ImageExists"));
}

#[test]
fn reports_every_dangling_reference_with_path() {
    let t = parse(json!({
        "canvas": { "width": 0, "height": 36 },
        "layers": [
            { "type": "fill", "color": "Nope" },
            { "type": "image", "image": "Missing", "rect": [0, 0, 0, 1] },
            { "type": "title_plate", "color": "Nope", "visible_when": "Ghost" }
        ]
    }));
    let msg = t.validate().unwrap_err().to_string();
    assert!(msg.contains("$.canvas"));
    assert!(msg.contains("$.layers[0].color"));
    assert!(msg.contains("$.layers[1].image"));
    assert!(msg.contains("$.layers[1].rect"));
    assert!(msg.contains("$.layers[2].visible_when"));
}

#[test]
fn unknown_top_level_keys_are_rejected() {
    let r = SceneTemplate::from_reader(r#"{ "layers": [], "extra": 1 }"#.as_bytes());
    assert!(matches!(r, Err(ThumbnailError::Validation(_))));
}

#[test]
fn image_rect_must_stay_within_canvas_fractions() {
    for rect in [
        json!([0, 0, 1e6, 1e6]),
        json!([-0.5, 0, 0.5, 0.5]),
        json!([0, 2, 0.5, 0.5]),
    ] {
        let t = parse(json!({
            "images": ["InputImage"],
            "layers": [{ "type": "image", "image": "InputImage", "rect": rect }]
        }));
        let msg = t.validate().unwrap_err().to_string();
        assert!(msg.contains("$.layers[0].rect"), "{msg}");
    }

    let t = parse(json!({
        "images": ["InputImage"],
        "layers": [{ "type": "image", "image": "InputImage", "rect": [0, 0, 1, 1] }]
    }));
    assert!(t.validate().is_ok());
}
