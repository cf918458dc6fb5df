//! Presentation layer: builds the page DOM once on mount, then repaints as a
//! pure function of [`QuizState`]. All elements carry `eg-` ids so mounting is
//! idempotent (existing elements are reused, never duplicated) and renders can
//! re-query the tree instead of holding element handles.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlImageElement, MouseEvent, window};

use crate::app;
use crate::quiz::{self, EPISODE_COUNT, GuessOutcome, QuizState, RoundPhase};

const TITLE: &str = "\u{1f3b8} Bocchi the Rock: Episode Guesser";
const LOCKED_TITLE: &str = "Walter is Watching.";
const PENALTY_IMAGE_URL: &str = "/DogOfShame.jpg";

// Inline styles, translated from the page's original utility classes.
const ROOT_STYLE: &str = "min-height:100vh; background:#030712; color:#fff; display:flex; \
    flex-direction:column; align-items:center; justify-content:center; \
    padding:32px 16px; font-family:sans-serif;";
const SCORE_STYLE: &str = "font-size:24px; margin:0 0 8px;";
const TITLE_STYLE: &str = "font-size:40px; font-weight:700; margin:0 0 32px; color:#f472b6; \
    text-align:center;";
const FRAME_STYLE: &str = "border-radius:8px; width:100%; max-width:1024px; height:auto; \
    margin-bottom:24px; border:2px solid #ec4899; pointer-events:none;";
const CHOICES_STYLE: &str = "display:grid; grid-template-columns:repeat(4, minmax(0,1fr)); \
    gap:16px; margin-top:16px;";
const CHOICE_STYLE: &str = "background:#ec4899; color:#fff; padding:8px 16px; border:none; \
    border-radius:8px; cursor:pointer; font-size:15px;";
const RESULT_STYLE: &str = "margin-top:24px; font-weight:600; font-size:18px; text-align:center;";
const NEXT_STYLE: &str = "margin-left:16px; background:#3b82f6; color:#fff; padding:8px 16px; \
    border:none; border-radius:8px; cursor:pointer;";
const RESET_STYLE: &str = "margin-top:16px; background:#dc2626; color:#fff; padding:12px 24px; \
    border:none; border-radius:8px; font-weight:700; cursor:pointer;";

/// Build the page skeleton under `<body>` if it is not already there.
/// Listeners are wired only when an element is first created, so calling
/// `start_game()` twice never double-registers handlers.
pub fn mount() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if doc.get_element_by_id("eg-root").is_some() {
        return Ok(());
    }
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let root = doc.create_element("div")?;
    root.set_id("eg-root");
    root.set_attribute("style", ROOT_STYLE)?;
    body.append_child(&root)?;

    let score = doc.create_element("p")?;
    score.set_id("eg-score");
    score.set_attribute("style", SCORE_STYLE)?;
    root.append_child(&score)?;

    let title = doc.create_element("h1")?;
    title.set_id("eg-title");
    title.set_attribute("style", TITLE_STYLE)?;
    title.set_text_content(Some(TITLE));
    root.append_child(&title)?;

    // The quiz frame (or, while locked, the penalty image). Dragging and the
    // context menu are suppressed as a casual save-the-image deterrent only.
    let img: HtmlImageElement = doc.create_element("img")?.dyn_into()?;
    img.set_id("eg-frame");
    img.set_attribute("style", FRAME_STYLE)?;
    img.set_alt("Anime frame");
    img.set_draggable(false);
    img.set_hidden(true);
    {
        let block_menu = Closure::wrap(Box::new(move |evt: MouseEvent| {
            evt.prevent_default();
        }) as Box<dyn FnMut(_)>);
        img.add_event_listener_with_callback("contextmenu", block_menu.as_ref().unchecked_ref())?;
        block_menu.forget();
    }
    root.append_child(&img)?;

    // One guess button per episode.
    let choices = doc.create_element("div")?;
    choices.set_id("eg-choices");
    choices.set_attribute("style", CHOICES_STYLE)?;
    root.append_child(&choices)?;
    for n in 1..=EPISODE_COUNT {
        let button: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
        button.set_id(&format!("eg-choice-{n}"));
        button.set_attribute("style", CHOICE_STYLE)?;
        button.set_text_content(Some(&format!("Episode {n}")));
        let label = quiz::episode_label(n);
        let on_click = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            app::submit_guess(&label);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        choices.append_child(&button)?;
    }

    // Result line: outcome text plus the next/retry control.
    let result = doc.create_element("div")?;
    result.set_id("eg-result");
    result.set_attribute("style", RESULT_STYLE)?;
    let result_text = doc.create_element("span")?;
    result_text.set_id("eg-result-text");
    result.append_child(&result_text)?;
    let next: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
    next.set_id("eg-next");
    next.set_attribute("style", NEXT_STYLE)?;
    next.set_text_content(Some("Next"));
    {
        let on_click = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            app::start_round();
        }) as Box<dyn FnMut(_)>);
        next.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    result.append_child(&next)?;
    root.append_child(&result)?;

    // Reset control, visible only while locked.
    let reset: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
    reset.set_id("eg-reset");
    reset.set_attribute("style", RESET_STYLE)?;
    reset.set_text_content(Some("Pray to Walter"));
    reset.set_hidden(true);
    {
        let on_click = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            app::reset_lock();
        }) as Box<dyn FnMut(_)>);
        reset.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    root.append_child(&reset)?;

    Ok(())
}

/// Repaint every mounted element from the given state. Safe to call before
/// `mount()` (missing elements are skipped).
pub fn render(st: &QuizState) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(el) = doc.get_element_by_id("eg-score") {
        el.set_text_content(Some(&format!("Score: {}", st.score)));
    }
    if let Some(el) = doc.get_element_by_id("eg-title") {
        el.set_text_content(Some(if st.locked { LOCKED_TITLE } else { TITLE }));
    }

    render_frame(&doc, st);
    render_choices(&doc, st);
    render_result(&doc, st);

    if let Some(reset) = html_by_id(&doc, "eg-reset") {
        reset.set_hidden(!st.locked);
    }
}

fn render_frame(doc: &Document, st: &QuizState) {
    let Some(img) = doc
        .get_element_by_id("eg-frame")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    let src = if st.locked {
        Some(PENALTY_IMAGE_URL)
    } else {
        st.current.as_ref().map(|f| f.url.as_str())
    };
    match src {
        Some(src) => {
            // Only touch src on change so repaints never restart the load.
            if img.get_attribute("src").as_deref() != Some(src) {
                img.set_src(src);
            }
            img.set_hidden(false);
        }
        None => img.set_hidden(true),
    }
}

fn render_choices(doc: &Document, st: &QuizState) {
    if let Some(choices) = html_by_id(doc, "eg-choices") {
        choices.set_hidden(st.locked);
    }
    let playable = !st.locked && st.phase == RoundPhase::Ready && st.current.is_some();
    for n in 1..=EPISODE_COUNT {
        if let Some(button) = doc
            .get_element_by_id(&format!("eg-choice-{n}"))
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(!playable);
        }
    }
}

fn render_result(doc: &Document, st: &QuizState) {
    let Some(result) = html_by_id(doc, "eg-result") else {
        return;
    };
    // (text, color, next-control label); None hides the whole line.
    let line: Option<(String, &str, &str)> = if st.locked {
        None
    } else {
        match (st.phase, st.outcome) {
            (RoundPhase::Answered, Some(GuessOutcome::Correct)) => {
                Some(("\u{2705} Correct!".to_string(), "#4ade80", "Next"))
            }
            (RoundPhase::Answered, Some(GuessOutcome::Wrong)) => {
                let number = st
                    .current
                    .as_ref()
                    .map(|f| quiz::episode_number(&f.episode))
                    .unwrap_or("?");
                Some((
                    format!("\u{274c} Nope! It was episode {number}"),
                    "#f87171",
                    "Try Again",
                ))
            }
            // A load failed (or never ran): offer only the retry control.
            (RoundPhase::Ready, _) if st.current.is_none() => {
                Some((String::new(), "#9ca3af", "New Frame"))
            }
            _ => None,
        }
    };
    match line {
        Some((text, color, next_label)) => {
            if let Some(span) = html_by_id(doc, "eg-result-text") {
                span.set_text_content(Some(&text));
                span.set_attribute("style", &format!("color:{color};")).ok();
            }
            if let Some(next) = doc.get_element_by_id("eg-next") {
                next.set_text_content(Some(next_label));
            }
            result.set_hidden(false);
        }
        None => result.set_hidden(true),
    }
}

fn html_by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)?.dyn_into().ok()
}
