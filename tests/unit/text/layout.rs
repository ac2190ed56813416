use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn fixed_mode_places_text_below_top_edge() {
    let l = layout_title("The Beauty of Algebra", LayoutMode::Fixed);
    assert_eq!(l.body, "THE BEAUTY OF ALGEBRA");
    assert!(approx(l.font_size, 0.5));

    let half_height = 5.0 * (720.0 / 1280.0);
    let expected = half_height - 0.1 - 0.5 * 0.5627;
    assert!(approx(l.vertical_offset, expected));
    assert_eq!(l.position(), Position3::new(0.0, expected, 0.0));
}

#[test]
fn fixed_mode_ignores_line_count() {
    let one = layout_title("a", LayoutMode::Fixed);
    let two = layout_title("a\nb", LayoutMode::Fixed);
    assert!(approx(one.font_size, two.font_size));
    assert!(approx(one.vertical_offset, two.vertical_offset));
    assert_eq!(two.newline_count, 1);
}

#[test]
fn auto_mode_single_line_uses_full_line_height() {
    let l = layout_title("Algebra", LayoutMode::AutoScale);
    assert_eq!(l.multiline_scaling_factor, 1.0);
    let base = (13.0 / 90.0) * (2.0 * 5.0 * (720.0 / 1280.0));
    assert!(approx(l.font_size, base / 0.5627));
    assert!(approx(l.vertical_offset, 0.0));
}

#[test]
fn auto_mode_halves_size_for_any_newline() {
    let single = layout_title("x", LayoutMode::AutoScale);
    for text in ["a\nb", "a\nb\nc", "\n"] {
        let l = layout_title(text, LayoutMode::AutoScale);
        assert_eq!(l.multiline_scaling_factor, 0.5, "{text:?}");
        assert!(approx(l.font_size, single.font_size / 2.0));
        assert!(approx(
            l.vertical_offset,
            l.newline_count as f64 * l.font_size / 2.0
        ));
    }
}

#[test]
fn uppercasing_applies_in_both_modes_and_empty_is_fine() {
    for mode in [LayoutMode::Fixed, LayoutMode::AutoScale] {
        assert_eq!(layout_title("ß and é", mode).body, "SS AND É");
        let empty = layout_title("", mode);
        assert_eq!(empty.body, "");
        assert_eq!(empty.newline_count, 0);
    }
}

#[test]
fn framing_scales_fixed_offset() {
    let frame = LayoutFrame {
        ortho_half_width: 10.0,
        aspect: 1.0,
    };
    let l = layout_title_in("x", LayoutMode::Fixed, frame);
    assert!(approx(l.vertical_offset, 10.0 - 0.2 - 0.5 * 0.5627));
}

#[test]
fn mode_names_in_json() {
    let m: LayoutMode = serde_json::from_str("\"auto\"").unwrap();
    assert_eq!(m, LayoutMode::AutoScale);
    let m: LayoutMode = serde_json::from_str("\"fixed\"").unwrap();
    assert_eq!(m, LayoutMode::Fixed);
}
