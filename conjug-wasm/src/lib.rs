//! Browser runtime for the conjugation jigsaw: wires the pool zone, the
//! assembly slot and the round controls together and owns the round state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

mod models;
mod piece;
mod pool;
mod slot;
mod state;
mod text;
mod utils;

use conjug_core::{DragPayload, Position, PuzzleOption};

use crate::models::Round;
use crate::state::{PlacedPiece, STATE, State};
use crate::text::t;
use crate::utils::{asset_url, fetch_text_with_fallbacks, get_query_param, log, warn};

fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{id} not found")))
}

/// Run one state mutation and re-render. Every user interaction funnels
/// through here, so presentation is always recomputed synchronously from the
/// current state before paint.
fn dispatch(f: impl FnOnce(&mut State)) {
    STATE.with(|st| {
        if let Some(rc) = st.borrow().as_ref() {
            let mut s = rc.borrow_mut();
            f(&mut s);
            if let Err(err) = render(&s) {
                warn(&format!("render failed: {err:?}"));
            }
        }
    });
}

fn clear_validation(s: &mut State) {
    if let Some(p) = s.stem_slot.as_mut() {
        p.correctness = None;
    }
    if let Some(p) = s.ending_slot.as_mut() {
        p.correctness = None;
    }
    s.locked = false;
}

/// Put an option into the side its position axis names, replacing the
/// previous occupant. Placement never mutates the pool: drags copy.
fn place(s: &mut State, option: PuzzleOption) {
    if s.locked {
        return;
    }
    clear_validation(s);
    let placed = PlacedPiece::new(option);
    match placed.option.slot_type.position {
        Position::Stem => s.stem_slot = Some(placed),
        Position::Ending => s.ending_slot = Some(placed),
    }
}

fn remove(s: &mut State, position: Position) {
    clear_validation(s);
    match position {
        Position::Stem => s.stem_slot = None,
        Position::Ending => s.ending_slot = None,
    }
}

/// Piece-level validation: with both sides filled, both placed pieces get
/// the verdict for the pairing. A correct pair locks the pool until reset.
fn check(s: &mut State) {
    let ok = match (&s.stem_slot, &s.ending_slot) {
        (Some(stem), Some(ending)) => s.data.is_answer(&stem.option.id, &ending.option.id),
        _ => return,
    };
    if let Some(p) = s.stem_slot.as_mut() {
        p.correctness = Some(ok);
    }
    if let Some(p) = s.ending_slot.as_mut() {
        p.correctness = Some(ok);
    }
    s.locked = ok;
}

fn reset(s: &mut State) {
    s.stem_slot = None;
    s.ending_slot = None;
    s.locked = false;
}

fn status_key(s: &State) -> &'static str {
    match (&s.stem_slot, &s.ending_slot) {
        (Some(a), Some(b)) => match (a.correctness, b.correctness) {
            (Some(true), _) | (_, Some(true)) => "status.correct",
            (Some(false), _) | (_, Some(false)) => "status.wrong",
            _ => "status.ready",
        },
        (None, None) => "status.empty",
        _ => "status.partial",
    }
}

fn render(s: &State) -> Result<(), JsValue> {
    let document = &s.document;

    let pool_el = require(document, "pool")?;
    let on_click: Rc<dyn Fn(PuzzleOption)> = Rc::new(|option| dispatch(move |s| place(s, option)));
    pool::render_pool(document, &pool_el, &s.data.options, s.locked, on_click)?;

    let slot_el = require(document, "assembly")?;
    let on_remove: Rc<dyn Fn(Position)> =
        Rc::new(|position| dispatch(move |s| remove(s, position)));
    slot::render_slot(
        document,
        &slot_el,
        s.stem_slot.as_ref(),
        s.ending_slot.as_ref(),
        &s.lang,
        on_remove,
    )?;

    if let Some(el) = document.get_element_by_id("status")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(t(&s.lang, status_key(s)));
    }
    if let Some(el) = document.get_element_by_id("note")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(s.data.note(&s.lang).unwrap_or(""));
    }
    if let Some(el) = document.get_element_by_id("roundTitle")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(s.data.title.as_deref().unwrap_or(""));
    }
    Ok(())
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    // Assembly slot is the drop target; unknown payloads are rejected.
    let slot_el = require(&doc, "assembly")?;
    let on_drop: Rc<dyn Fn(DragPayload)> = Rc::new(|payload| {
        dispatch(move |s| {
            match slot::resolve_payload(&s.data.options, &payload).cloned() {
                Some(option) => place(s, option),
                None => warn(&format!(
                    "dropped piece `{}` is not part of this round",
                    payload.text
                )),
            }
        })
    });
    slot::attach_drop_target(&slot_el, on_drop)?;

    if let Some(btn) = doc.get_element_by_id("checkAnswer")
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(|| dispatch(check)));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = doc.get_element_by_id("resetRound")
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(|| dispatch(reset)));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Language selector
    if let Some(sel) = doc.get_element_by_id("langSel")
        && let Ok(sel) = sel.dyn_into::<HtmlSelectElement>()
    {
        let sel_read = sel.clone();
        let onchange = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let v = sel_read.value();
            dispatch(move |s| {
                s.lang = if v.to_lowercase().starts_with("fr") {
                    "fr".to_string()
                } else {
                    "en".to_string()
                };
            });
        }));
        sel.set_onchange(Some(onchange.as_ref().unchecked_ref()));
        onchange.forget();
    }

    // About modal open/close (presentational glue only)
    for (id, hidden) in [("aboutOpen", false), ("aboutClose", true)] {
        if let Some(btn) = doc.get_element_by_id(id)
            && let Ok(btn) = btn.dyn_into::<HtmlElement>()
        {
            let doc2 = doc.clone();
            let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(modal) = doc2.get_element_by_id("aboutModal")
                    && let Ok(modal) = modal.dyn_into::<HtmlElement>()
                {
                    modal.set_hidden(hidden);
                }
            }));
            btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
            onclick.forget();
        }
    }

    Ok(())
}

fn default_round() -> Round {
    match serde_json::from_str(include_str!("../../rounds/parler.json")) {
        Ok(r) => r,
        Err(e) => {
            warn(&format!("bundled round is malformed: {e}"));
            Round::default()
        }
    }
}

async fn fetch_and_load_round(name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let urls = [
        asset_url(&format!("rounds/{}.json", name)),
        format!("/rounds/{}.json", name),
        format!("rounds/{}.json", name),
    ];
    let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();
    let text = fetch_text_with_fallbacks(&window, &url_refs)
        .await
        .ok_or_else(|| JsValue::from_str("round file not found"))?;
    let round: Round =
        serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    dispatch(move |s| {
        s.data = round;
        reset(s);
    });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let data = default_round();
    // If URL param round is set, fetch rounds/<round>.json; fire-and-forget,
    // the bundled default stays up meanwhile.
    if let Ok(search) = window.location().search()
        && let Some(name) = get_query_param(&search, "round")
    {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = fetch_and_load_round(&name).await {
                log(&format!("Failed to load round '{}': {:?}", name, err));
            }
        });
    }

    let state = Rc::new(RefCell::new(State {
        document,
        data,
        stem_slot: None,
        ending_slot: None,
        locked: false,
        lang: "en".to_string(),
    }));
    STATE.with(|st| st.replace(Some(state.clone())));
    attach_ui(state.clone())?;
    render(&state.borrow())?;
    Ok(())
}
