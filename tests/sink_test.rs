//! Integration tests for artifact sinks and image stagers.

use std::fs;

use scrolly::error::Error;
use scrolly::sink::{LocalImageStager, LocalSink, MemorySink};
use scrolly::{ArtifactKind, ArtifactSink, ImageStager, Scrolly};

const ARTICLE: &str = r#"{
    "articleId": "gallery",
    "title": "Gallery",
    "pages": [{
        "id": "001",
        "pinnable": true,
        "layout": {"template": "single"},
        "frames": [
            {"id": "1", "components": [
                {"id": "001-1-1", "type": "image", "position": "center",
                 "animation": "fade", "image": {"data": "IMAGE"}}
            ]},
            {"id": "2", "components": [
                {"id": "001-2-1", "type": "text", "position": "center",
                 "animation": "TRANSITION", "contentHtml": "<p>Caption</p>"}
            ]}
        ]
    }]
}"#;

fn article(image: &str, transition: &str) -> String {
    ARTICLE
        .replace("IMAGE", image)
        .replace("TRANSITION", transition)
}

#[test]
fn test_stage_then_commit_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let stager = LocalImageStager::new(dir.path());
    let sink = LocalSink::new(dir.path());

    let reference = stager.stage("gallery", "cover.png", b"\x89PNG").unwrap();
    assert_eq!(reference, "images/cover.png");

    let result = Scrolly::new()
        .parse_str(&article(&reference, "zoom"))
        .unwrap();
    let locations = result.commit(&sink).unwrap();
    assert_eq!(locations.len(), 3);

    let root = dir.path().join("gallery");
    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(html.contains("src=\"images/cover.png\""));
    assert!(fs::read_to_string(root.join("css/styles.css"))
        .unwrap()
        .contains("#page-001-center {"));
    assert!(fs::read_to_string(root.join("js/animation.js"))
        .unwrap()
        .contains("ScrollTrigger.create({"));

    // Committing does not disturb staged images.
    assert_eq!(fs::read(root.join("images/cover.png")).unwrap(), b"\x89PNG");
    assert!(!root.join(".staging").exists());
}

#[test]
fn test_recommit_replaces_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let sink = LocalSink::new(dir.path());

    Scrolly::new()
        .parse_str(&article("a.png", "fade"))
        .unwrap()
        .commit(&sink)
        .unwrap();
    Scrolly::new()
        .parse_str(&article("b.png", "fade"))
        .unwrap()
        .commit(&sink)
        .unwrap();

    let html = fs::read_to_string(dir.path().join("gallery/index.html")).unwrap();
    assert!(html.contains("images/b.png"));
    assert!(!html.contains("images/a.png"));
}

#[test]
fn test_failed_compile_leaves_disk_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let sink = LocalSink::new(dir.path());

    let result = Scrolly::new()
        .parse_str(&article("a.png", "wobble"))
        .unwrap();
    assert!(matches!(
        result.commit(&sink),
        Err(Error::UnknownTransition { .. })
    ));
    assert!(!dir.path().join("gallery").exists());
}

#[test]
fn test_duplicate_image_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let stager = LocalImageStager::new(dir.path());

    stager.stage("gallery", "cover.png", b"one").unwrap();
    let err = stager.stage("gallery", "cover.png", b"two").unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(ref name) if name == "cover.png"));
    assert!(err.to_string().contains("different name"));

    // The first upload is kept.
    let stored = fs::read(stager.image_dir("gallery").join("cover.png")).unwrap();
    assert_eq!(stored, b"one");
}

#[test]
fn test_memory_sink_commit() {
    let sink = MemorySink::new();
    let result = Scrolly::new()
        .parse_str(&article("cover.png", "fly-in-left"))
        .unwrap();

    let locations = result.commit(&sink).unwrap();
    assert_eq!(locations.len(), 3);
    assert_eq!(sink.len(), 3);
    assert_eq!(
        locations[0].location,
        "memory://gallery/index.html"
    );

    let js = sink.get("gallery", ArtifactKind::AnimationProgram).unwrap();
    assert!(js.contains("x: -500"));
}

#[test]
fn test_memory_sink_failure_is_all_or_nothing() {
    let sink = MemorySink::failing(ArtifactKind::AnimationProgram);
    let result = Scrolly::new()
        .parse_str(&article("cover.png", "fade"))
        .unwrap();

    assert!(matches!(result.commit(&sink), Err(Error::Storage(_))));
    assert!(sink.is_empty());
    assert!(sink.get("gallery", ArtifactKind::Html).is_none());
}

#[test]
fn test_memory_stager() {
    let stager = MemorySink::new();
    assert_eq!(
        stager.stage("gallery", "cover.png", b"png").unwrap(),
        "images/cover.png"
    );
    assert!(matches!(
        stager.stage("gallery", "cover.png", b"png"),
        Err(Error::AlreadyExists(_))
    ));
    assert_eq!(stager.image("gallery", "cover.png").unwrap(), b"png");
}

#[test]
fn test_sinks_as_trait_objects() {
    let dir = tempfile::tempdir().unwrap();
    let sinks: Vec<Box<dyn ArtifactSink>> = vec![
        Box::new(LocalSink::new(dir.path())),
        Box::new(MemorySink::new()),
    ];
    let names: Vec<&str> = sinks.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["local", "memory"]);

    let bundle = scrolly::compile_str(&article("cover.png", "fade")).unwrap();
    for sink in &sinks {
        assert_eq!(sink.commit("gallery", &bundle).unwrap().len(), 3);
    }
}
