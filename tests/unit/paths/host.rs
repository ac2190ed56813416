use super::*;

#[test]
fn translate_matches_host_convention() {
    let cases = [
        ("", "//"),
        ("a.png", "//a.png"),
        ("relative/path.png", "//relative/path.png"),
        ("./a.png", "/a.png"),
        ("./../a.png", "/../a.png"),
        ("/a.png", "/a.png"),
        ("/absolute/path.png", "/absolute/path.png"),
    ];
    for (input, expected) in cases {
        assert_eq!(translate_path(input), expected, "input {input:?}");
    }
}

#[test]
fn translate_leaves_dot_prefixed_names_relative() {
    assert_eq!(translate_path(".hidden.png"), "//.hidden.png");
    assert_eq!(translate_path("../up.png"), "//../up.png");
}

#[test]
fn resolve_joins_relative_paths_onto_working_dir() {
    let base = Path::new("/scenes/thumbs");
    assert_eq!(
        resolve_host_path(base, "//in/a.png"),
        PathBuf::from("/scenes/thumbs/in/a.png")
    );
    assert_eq!(resolve_host_path(base, "/abs/a.png"), PathBuf::from("/abs/a.png"));
}
