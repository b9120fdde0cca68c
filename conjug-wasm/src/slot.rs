use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DragEvent, Element, HtmlElement, MouseEvent};

use conjug_core::transfer::{DRAG_EFFECT, TEXT_KEY, TYPE_KEY};
use conjug_core::{DragPayload, Position, PuzzleOption};

use crate::piece::{PieceFlags, build_piece};
use crate::state::PlacedPiece;
use crate::text::t;
use crate::utils::warn;

/// Resolve a drop payload back to a pool option.
///
/// The wire format carries text and type only, so identity is recovered by
/// matching both against the current pool. A payload matching nothing did
/// not come from this round: reject it.
pub fn resolve_payload<'a>(
    pool: &'a [PuzzleOption],
    payload: &DragPayload,
) -> Option<&'a PuzzleOption> {
    pool.iter()
        .find(|o| o.text == payload.text && o.slot_type == payload.slot_type)
}

/// Wire `container` as a drop target. Decoding fails closed: a malformed
/// payload is logged and dropped without touching any state.
pub fn attach_drop_target(
    container: &Element,
    on_drop: Rc<dyn Fn(DragPayload)>,
) -> Result<(), JsValue> {
    let dragover = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
        if let Some(dt) = e.data_transfer() {
            dt.set_drop_effect(DRAG_EFFECT);
        }
    }));
    container.add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref())?;
    dragover.forget();

    let drop = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
        let Some(dt) = e.data_transfer() else {
            return;
        };
        let text = dt.get_data(TEXT_KEY).ok();
        let tag = dt.get_data(TYPE_KEY).ok();
        match DragPayload::decode(text, tag) {
            Ok(payload) => on_drop(payload),
            Err(err) => warn(&format!("rejected drop: {err}")),
        }
    }));
    container.add_event_listener_with_callback("drop", drop.as_ref().unchecked_ref())?;
    drop.forget();
    Ok(())
}

/// Render the assembly slot: the stem side then the ending side, placed
/// pieces jigsaw-shaped, empty sides as labeled placeholders. Clicking a
/// placed piece hands it back via `on_remove`.
pub fn render_slot(
    document: &Document,
    container: &Element,
    stem: Option<&PlacedPiece>,
    ending: Option<&PlacedPiece>,
    lang: &str,
    on_remove: Rc<dyn Fn(Position)>,
) -> Result<(), JsValue> {
    container.set_inner_html("");
    render_side(
        document,
        container,
        stem,
        Position::Stem,
        t(lang, "slot.stem"),
        on_remove.clone(),
    )?;
    render_side(
        document,
        container,
        ending,
        Position::Ending,
        t(lang, "slot.ending"),
        on_remove,
    )
}

fn render_side(
    document: &Document,
    container: &Element,
    placed: Option<&PlacedPiece>,
    position: Position,
    placeholder: &str,
    on_remove: Rc<dyn Fn(Position)>,
) -> Result<(), JsValue> {
    match placed {
        Some(p) => {
            let flags = PieceFlags {
                // a placed piece reads as picked until the check runs
                selected: p.correctness.is_none(),
                correctness: p.correctness,
                show_connectors: true,
                disabled: false,
            };
            let el = build_piece(document, &p.option, flags)?;
            let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
                on_remove(position);
            }));
            el.set_onclick(Some(onclick.as_ref().unchecked_ref()));
            onclick.forget();
            container.append_child(&el)?;
        }
        None => {
            let el: HtmlElement = document.create_element("div")?.dyn_into()?;
            el.set_text_content(Some(placeholder));
            let style = el.style();
            style.set_property("display", "inline-flex")?;
            style.set_property("align-items", "center")?;
            style.set_property("justify-content", "center")?;
            style.set_property("min-width", "100px")?;
            style.set_property("padding", "16px 24px")?;
            style.set_property("border", "2px dashed #cbd5e1")?;
            style.set_property("border-radius", "12px")?;
            style.set_property("color", "#94a3b8")?;
            container.append_child(&el)?;
        }
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use conjug_core::SlotType;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pool() -> Vec<PuzzleOption> {
        vec![
            PuzzleOption::new("1", "parl", SlotType::STEM_MAIN),
            PuzzleOption::new("2", "é", SlotType::ENDING_MAIN),
        ]
    }

    #[wasm_bindgen_test]
    fn payload_resolves_by_text_and_type() {
        let pool = pool();
        let payload = DragPayload::new("parl", SlotType::STEM_MAIN);
        assert_eq!(resolve_payload(&pool, &payload).map(|o| o.id.as_str()), Some("1"));

        let stranger = DragPayload::new("mang", SlotType::STEM_MAIN);
        assert!(resolve_payload(&pool, &stranger).is_none());
        let wrong_type = DragPayload::new("parl", SlotType::ENDING_MAIN);
        assert!(resolve_payload(&pool, &wrong_type).is_none());
    }

    #[wasm_bindgen_test]
    fn empty_slot_renders_two_placeholders() {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        render_slot(&document, &container, None, None, "en", Rc::new(|_| {})).unwrap();
        assert_eq!(container.child_element_count(), 2);
    }
}
