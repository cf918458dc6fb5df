// Integration tests for episode dataset decoding and addressing.
// These tests are native-friendly and avoid wasm/browser APIs.

use episode_guesser::episodes::{LoadError, dataset_url, parse_dataset};
use episode_guesser::quiz::{EPISODE_COUNT, rand_index};

#[test]
fn dataset_urls_cover_all_episodes() {
    for n in 1..=EPISODE_COUNT {
        let url = dataset_url(n);
        assert_eq!(url, format!("/jsons/ep{n}.json"));
    }
}

#[test]
fn realistic_dataset_document_decodes() {
    // Shape matches the shipped per-episode JSON files.
    let text = r#"[
        {"episode": "ep1", "frame": "00:01:12.040", "url": "/frames/ep1/00_01_12_040.jpg"},
        {"episode": "ep1", "frame": "00:08:03.500", "url": "/frames/ep1/00_08_03_500.jpg"},
        {"episode": "ep1", "frame": "00:19:44.000", "url": "/frames/ep1/00_19_44_000.jpg"}
    ]"#;
    let frames = parse_dataset(text).expect("document must decode");
    assert_eq!(frames.len(), 3);
    assert!(frames.iter().all(|f| f.episode == "ep1"));
    assert!(frames.iter().all(|f| f.url.starts_with("/frames/ep1/")));
}

#[test]
fn unknown_fields_are_tolerated() {
    // Dataset generators have grown extra fields before; decoding must not
    // depend on their absence.
    let text = r#"[
        {"episode": "ep9", "frame": "x", "url": "/x.jpg", "width": 1920, "height": 1080}
    ]"#;
    let frames = parse_dataset(text).expect("extra fields must be ignored");
    assert_eq!(frames[0].episode, "ep9");
}

#[test]
fn broken_documents_are_errors_not_panics() {
    for text in [
        "",
        "null",
        "{}",
        "\"ep1\"",
        "[{\"episode\": 7, \"frame\": \"x\", \"url\": \"/x.jpg\"}]",
        "[{\"frame\": \"x\", \"url\": \"/x.jpg\"}]",
    ] {
        assert!(
            matches!(parse_dataset(text), Err(LoadError::Parse(_))),
            "document {text:?} must be a parse error"
        );
    }
}

#[test]
fn empty_dataset_is_its_own_error() {
    match parse_dataset("[]") {
        Err(LoadError::EmptyDataset) => {}
        other => panic!("expected EmptyDataset, got {other:?}"),
    }
}

#[test]
fn frame_picking_index_is_in_bounds_for_dataset_sizes() {
    // Shipped datasets range from a handful to a few hundred frames.
    for len in [1usize, 2, 17, 240] {
        for _ in 0..100 {
            assert!(rand_index(len) < len, "index out of bounds for len {len}");
        }
    }
}
