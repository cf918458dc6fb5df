//! Shared application state and the orchestration entrypoints that DOM event
//! closures, the async dataset loader, and the devtools watch call into.
//!
//! All state lives in one thread_local cell on the single UI thread; every
//! entrypoint mutates under a short borrow and then repaints, so no borrow is
//! ever held across an await point or a nested event dispatch.

use std::cell::RefCell;

use crate::episodes;
use crate::quiz::{self, QuizState};
use crate::view;

thread_local! {
    static STATE: RefCell<QuizState> = RefCell::new(QuizState::new());
}

/// Apply `f` to the shared state, then repaint from the result.
fn mutate(f: impl FnOnce(&mut QuizState)) {
    STATE.with(|cell| f(&mut cell.borrow_mut()));
    refresh();
}

/// Repaint the view from the current state.
pub fn refresh() {
    STATE.with(|cell| view::render(&cell.borrow()));
}

/// Begin a fresh round: pick a random episode, fetch its dataset, and put a
/// random frame from it on screen. Refused (nothing happens beyond a repaint)
/// while locked or while a load is already in flight.
pub fn start_round() {
    let started = STATE.with(|cell| cell.borrow_mut().begin_round());
    refresh();
    if !started {
        return;
    }
    let episode = quiz::random_episode();
    wasm_bindgen_futures::spawn_local(async move {
        match episodes::fetch_dataset(episode).await {
            Ok(mut frames) => {
                let frame = frames.swap_remove(quiz::rand_index(frames.len()));
                mutate(|st| st.round_loaded(frame));
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("error loading episode {episode} dataset: {e}").into(),
                );
                mutate(|st| st.round_failed());
            }
        }
    });
}

/// One episode button was clicked.
pub fn submit_guess(label: &str) {
    mutate(|st| {
        st.handle_guess(label);
    });
}

/// The devtools watch tripped. Idempotent past the first firing; on the
/// transition itself the score is pinned and the player is told off.
pub fn devtools_tripped() {
    let transitioned = STATE.with(|cell| cell.borrow_mut().lock());
    if !transitioned {
        return;
    }
    refresh();
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message("STOP CHEATING");
    }
}

/// The reset control in the locked state: clear the lock, zero the score, and
/// load a fresh round.
pub fn reset_lock() {
    STATE.with(|cell| cell.borrow_mut().unlock());
    start_round();
}
