use super::*;

#[test]
fn listed_policy_only_loads_listed_paths() {
    let mut scene = RecordingScene::new("/tpl").with_loadable_images(["//in/a.png"]);
    assert!(scene.set_scene_image("InputImage", "//in/a.png"));
    assert!(!scene.set_scene_image("InputImage", "//in/b.png"));
    assert_eq!(scene.calls().len(), 2);
}

#[test]
fn filesystem_policy_resolves_against_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    image::RgbaImage::new(2, 2)
        .save(dir.path().join("a.png"))
        .unwrap();
    std::fs::write(dir.path().join("junk.png"), b"not an image").unwrap();

    let mut scene = RecordingScene::new(dir.path());
    assert!(!scene.set_scene_image("InputImage", "//a.png"));

    let tpl = scene.template_dir().to_path_buf();
    scene.set_working_dir(&tpl);
    assert!(scene.set_scene_image("InputImage", "//a.png"));
    assert!(!scene.set_scene_image("InputImage", "//junk.png"));
    assert!(!scene.set_scene_image("InputImage", "//missing.png"));
    assert!(!scene.set_scene_image("InputImage", "//"));
}

#[test]
fn tracks_last_switch_color_and_renders() {
    let mut scene = RecordingScene::new("/tpl").with_render_status(RenderStatus::Failed);
    scene.set_switch("ImageExists", true);
    scene.set_switch("ImageExists", false);
    scene.set_scene_color("DomainColor", SceneColor::Bytes([1, 2, 3]));
    assert_eq!(scene.render_to("//out/a.png"), RenderStatus::Failed);

    assert_eq!(scene.switch("ImageExists"), Some(false));
    assert_eq!(scene.switch("TextExists"), None);
    assert_eq!(scene.color("DomainColor"), Some(SceneColor::Bytes([1, 2, 3])));
    assert_eq!(scene.rendered_paths(), vec!["//out/a.png"]);

    scene.clear_calls();
    assert!(scene.calls().is_empty());
}
