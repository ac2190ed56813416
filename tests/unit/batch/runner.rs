use serde_json::json;

use super::*;
use crate::scene::recording::{RecordingScene, SceneCall};

fn manifest(v: serde_json::Value) -> Manifest {
    Manifest::from_value(v).unwrap()
}

fn run(
    m: &Manifest,
    kind: RendererKind,
    scene: &mut RecordingScene,
    opts: &BatchOpts,
) -> (BatchReport, String) {
    let mut out = Vec::new();
    let report = render_manifest(m, kind, scene, opts, &mut out).unwrap();
    (report, String::from_utf8(out).unwrap())
}

#[test]
fn failures_do_not_stop_later_entries() {
    let m = manifest(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": [
            { "image": "bad1.png" },
            { "image": "a.png" },
            { "image": "bad2.png" },
            { "image": "b.png" }
        ]
    }));
    let mut scene = RecordingScene::new("/tpl").with_loadable_images(["//in/a.png", "//in/b.png"]);

    let (report, text) = run(&m, RendererKind::General, &mut scene, &BatchOpts::default());

    assert_eq!(report.failed_images(), vec!["bad1.png", "bad2.png"]);
    assert_eq!(scene.rendered_paths(), vec!["//out/a.png", "//out/b.png"]);
    assert!(text.starts_with(
        "Failure for bad1.png: Failed to load image\n\
         Success: a.png\n\
         Failure for bad2.png: Failed to load image\n\
         Success: b.png\n\
         Done. Succeeded: 2. Failed: 2.\n"
    ));
}

#[test]
fn configuration_errors_are_per_entry() {
    let m = manifest(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": [
            { "image": "a.png", "colour": "red" },
            { "image": "b.png", "domain": "math" }
        ]
    }));
    let mut scene = RecordingScene::new("/tpl").with_loadable_images(["//in/a.png", "//in/b.png"]);

    let (report, text) = run(&m, RendererKind::General, &mut scene, &BatchOpts::default());

    assert_eq!(report.failed_images(), vec!["a.png"]);
    assert!(text.contains("Failure for a.png: configuration error: general renderer: unknown field `colour`"));
    assert_eq!(scene.rendered_paths(), vec!["//out/b.png"]);
}

#[test]
fn every_entry_switches_to_template_dir_by_default() {
    let m = manifest(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": [ { "image": "a.png" }, { "image": "b.png" } ]
    }));
    let mut scene = RecordingScene::new("/tpl").with_loadable_images(["//in/a.png", "//in/b.png"]);

    run(&m, RendererKind::General, &mut scene, &BatchOpts::default());
    let switches = scene
        .calls()
        .iter()
        .filter(|c| matches!(c, SceneCall::WorkingDir(_)))
        .count();
    assert_eq!(switches, 2);

    scene.clear_calls();
    let opts = BatchOpts {
        change_working_directory: false,
    };
    run(&m, RendererKind::General, &mut scene, &opts);
    assert!(!scene
        .calls()
        .iter()
        .any(|c| matches!(c, SceneCall::WorkingDir(_))));
}

#[test]
fn check_manifest_reports_only_bad_options() {
    let m = manifest(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": [
            { "image": "a.png", "title_text": "ok" },
            { "image": "b.png", "has_image": 1 },
            { "image": "c.png", "domain": "math" }
        ]
    }));
    let problems = check_manifest(&m, RendererKind::YouTube);
    let names: Vec<&str> = problems.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["b.png", "c.png"]);
    assert!(problems
        .iter()
        .all(|(_, e)| matches!(e, ThumbnailError::Configuration(_))));
}

#[test]
fn missing_manifest_file_is_fatal() {
    let mut scene = RecordingScene::new("/tpl");
    let mut out = Vec::new();
    let err = run_batch(
        Path::new("/definitely/not/here.json"),
        RendererKind::General,
        &mut scene,
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, ThumbnailError::Validation(_)));
    assert!(out.is_empty());
    assert!(scene.calls().is_empty());
}
