// Browser smoke test (wasm-pack test --headless). Verifies the page skeleton
// mounts with every control the game needs and that teardown is safe to call.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_mounts_the_full_ui() {
    episode_guesser::start_game().expect("start_game must mount");
    let doc = web_sys::window().unwrap().document().unwrap();

    for id in [
        "eg-root",
        "eg-score",
        "eg-title",
        "eg-frame",
        "eg-choices",
        "eg-result",
        "eg-next",
        "eg-reset",
    ] {
        assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
    }
    for n in 1..=12 {
        assert!(
            doc.get_element_by_id(&format!("eg-choice-{n}")).is_some(),
            "missing guess button {n}"
        );
    }

    // Mounting again must reuse the existing tree, not duplicate it.
    let root_before = doc.get_element_by_id("eg-root").unwrap();
    episode_guesser::start_game().expect("restart must be idempotent");
    let root_after = doc.get_element_by_id("eg-root").unwrap();
    assert_eq!(root_before, root_after);

    episode_guesser::stop_game();
    episode_guesser::stop_game(); // teardown is idempotent too
}
