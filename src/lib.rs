//! Episode Guesser core crate.
//!
//! A single-page quiz game compiled to WASM: one still frame from a randomly
//! chosen episode is shown, the player names the episode, and a running score
//! is kept. A recurring timing probe watches for an open devtools debugger
//! and, when it trips, locks the game behind a shame screen until the player
//! resets. `start_game()` builds the whole page from Rust; the host document
//! only needs a `<body>`.
//!
//! Game rules and dataset decoding live in the ungated `quiz` / `episodes`
//! modules and are exercised by native `cargo test`; everything touching the
//! browser is gated to wasm32.

use wasm_bindgen::prelude::*;

pub mod episodes;
pub mod quiz;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod devtools;
#[cfg(target_arch = "wasm32")]
mod view;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the UI, arm the devtools watch, and load the first round.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    view::mount()?;
    devtools::start(app::devtools_tripped)?;
    app::start_round();
    Ok(())
}

/// Tear down the recurring devtools watch. The DOM is left in place; only the
/// timer needs explicit release.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn stop_game() {
    devtools::stop();
}
