//! Devtools watch: a recurring timing probe that notices a paused debugger.
//!
//! The probe body is a single `debugger;` statement. With devtools closed it
//! is a no-op measured in microseconds; with devtools open the browser parks
//! on the statement until the user resumes, so wall-clock time around the
//! call blows straight past the threshold. This is a soft heuristic with
//! plenty of false negatives (detached consoles, disabled breakpoints) and is
//! in no way a security control.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

/// Elapsed probe time above this means a human sat on the breakpoint.
const PAUSE_THRESHOLD_MS: f64 = 160.0;
/// How often the probe runs.
const PROBE_PERIOD_MS: i32 = 2000;

/// A live watch: the interval handle plus the closure keeping it callable.
/// Dropping the closure before clearing the interval would leave the browser
/// invoking freed memory, so both travel together.
struct Watch {
    handle: i32,
    _tick: Closure<dyn FnMut()>,
}

thread_local! {
    static WATCH: RefCell<Option<Watch>> = RefCell::new(None);
}

/// Start (or restart) the watch. `on_detect` fires on every probe that trips
/// the threshold; callers are expected to make it idempotent. Any previous
/// watch is cancelled first so at most one interval ever runs.
pub fn start(on_detect: fn()) -> Result<(), JsValue> {
    stop();
    let probe = js_sys::Function::new_no_args("debugger;");
    let tick = Closure::wrap(Box::new(move || {
        let Some(perf) = window().and_then(|w| w.performance()) else {
            return;
        };
        let before = perf.now();
        let _ = probe.call0(&JsValue::NULL);
        if perf.now() - before > PAUSE_THRESHOLD_MS {
            on_detect();
        }
    }) as Box<dyn FnMut()>);
    let handle = window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            PROBE_PERIOD_MS,
        )?;
    WATCH.with(|w| w.replace(Some(Watch { handle, _tick: tick })));
    Ok(())
}

/// Cancel the watch and release its closure. Safe to call when no watch is
/// running; required on view teardown so the interval does not outlive the
/// game.
pub fn stop() {
    WATCH.with(|w| {
        if let Some(watch) = w.borrow_mut().take() {
            if let Some(win) = window() {
                win.clear_interval_with_handle(watch.handle);
            }
        }
    });
}
