//! Episode datasets: one static JSON document per episode, each an ordered
//! array of candidate frames. URL layout and field names follow the data the
//! site already serves, so the wasm build drops in against the same assets.
//!
//! The URL / parse half is plain Rust (native-testable); only `fetch_dataset`
//! touches the browser.

use serde::Deserialize;
use thiserror::Error;

/// One displayable quiz item: an image plus its true source-episode label.
/// `frame` is an opaque identifier (a timestamp in the shipped datasets) and
/// is carried only for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Frame {
    pub episode: String,
    pub frame: String,
    pub url: String,
}

/// Why a round load produced no dataset. All variants degrade the same way:
/// the error is logged and the player is offered a retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset request failed with HTTP status {0}")]
    Status(u16),
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no frames")]
    EmptyDataset,
    #[error("browser fetch failed: {0}")]
    Fetch(String),
}

/// Location of the dataset for one episode number.
pub fn dataset_url(episode: u32) -> String {
    format!("/jsons/ep{episode}.json")
}

/// Decode a dataset document. Strict: the document must be a JSON array of
/// frame objects, and an empty array is an error (there would be nothing to
/// display).
pub fn parse_dataset(text: &str) -> Result<Vec<Frame>, LoadError> {
    let frames: Vec<Frame> = serde_json::from_str(text)?;
    if frames.is_empty() {
        return Err(LoadError::EmptyDataset);
    }
    Ok(frames)
}

/// Fetch and decode the dataset for one episode.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_dataset(episode: u32) -> Result<Vec<Frame>, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Response, window};

    let js_err = |e: wasm_bindgen::JsValue| LoadError::Fetch(format!("{e:?}"));

    let win = window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
    let resp_value = JsFuture::from(win.fetch_with_str(&dataset_url(episode)))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Fetch("fetch did not yield a Response".into()))?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let text_value = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text = text_value
        .as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".into()))?;
    parse_dataset(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_url_is_keyed_by_episode_number() {
        assert_eq!(dataset_url(1), "/jsons/ep1.json");
        assert_eq!(dataset_url(7), "/jsons/ep7.json");
        assert_eq!(dataset_url(12), "/jsons/ep12.json");
    }

    #[test]
    fn parse_accepts_well_formed_dataset() {
        let text = r#"[
            {"episode": "ep7", "frame": "00:01:02.003", "url": "/frames/ep7/a.jpg"},
            {"episode": "ep7", "frame": "00:04:05.006", "url": "/frames/ep7/b.jpg"}
        ]"#;
        let frames = parse_dataset(text).expect("valid dataset must parse");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].episode, "ep7");
        assert_eq!(frames[1].url, "/frames/ep7/b.jpg");
    }

    #[test]
    fn parse_preserves_document_order() {
        let text = r#"[
            {"episode": "ep1", "frame": "b", "url": "/b.jpg"},
            {"episode": "ep1", "frame": "a", "url": "/a.jpg"}
        ]"#;
        let frames = parse_dataset(text).unwrap();
        assert_eq!(frames[0].frame, "b");
        assert_eq!(frames[1].frame, "a");
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse_dataset("not json at all"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(parse_dataset("[{\"episode\""), Err(LoadError::Parse(_))));
    }

    #[test]
    fn parse_rejects_non_array_documents() {
        let text = r#"{"episode": "ep1", "frame": "x", "url": "/x.jpg"}"#;
        assert!(matches!(parse_dataset(text), Err(LoadError::Parse(_))));
    }

    #[test]
    fn parse_rejects_entries_missing_fields() {
        let text = r#"[{"episode": "ep1", "url": "/x.jpg"}]"#;
        assert!(matches!(parse_dataset(text), Err(LoadError::Parse(_))));
    }

    #[test]
    fn parse_rejects_empty_dataset() {
        assert!(matches!(parse_dataset("[]"), Err(LoadError::EmptyDataset)));
    }

    #[test]
    fn load_error_messages_are_descriptive() {
        assert_eq!(
            LoadError::Status(404).to_string(),
            "dataset request failed with HTTP status 404"
        );
        assert_eq!(
            LoadError::EmptyDataset.to_string(),
            "dataset contains no frames"
        );
    }
}
