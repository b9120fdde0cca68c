use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

use conjug_core::PuzzleOption;

use crate::piece::{PieceFlags, build_piece};

/// Render the pool of available pieces into `container`.
///
/// Pool pieces are flat tray blocks: never selected, never validated,
/// connectors off. The zone holds no selection state of its own; it only
/// routes clicks to `on_piece_click` with the clicked option. Duplicate ids
/// in `options` are the round author's problem, not checked here.
pub fn render_pool(
    document: &Document,
    container: &Element,
    options: &[PuzzleOption],
    locked: bool,
    on_piece_click: Rc<dyn Fn(PuzzleOption)>,
) -> Result<(), JsValue> {
    container.set_inner_html("");
    for option in options {
        let flags = PieceFlags {
            disabled: locked,
            ..Default::default()
        };
        let el = build_piece(document, option, flags)?;
        if !locked {
            let cb = on_piece_click.clone();
            let clicked = option.clone();
            let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
                cb(clicked.clone());
            }));
            el.set_onclick(Some(onclick.as_ref().unchecked_ref()));
            onclick.forget();
        }
        container.append_child(&el)?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use conjug_core::SlotType;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn setup() -> (Document, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();
        (document, container)
    }

    fn sample_pool() -> Vec<PuzzleOption> {
        vec![
            PuzzleOption::new("1", "parl", SlotType::STEM_MAIN),
            PuzzleOption::new("2", "é", SlotType::ENDING_MAIN),
        ]
    }

    #[wasm_bindgen_test]
    fn click_reports_the_clicked_option_exactly_once() {
        let (document, container) = setup();
        let clicks: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = clicks.clone();
        render_pool(
            &document,
            &container,
            &sample_pool(),
            false,
            Rc::new(move |o| sink.borrow_mut().push(o.id)),
        )
        .unwrap();
        let first: HtmlElement = container
            .first_element_child()
            .unwrap()
            .dyn_into()
            .unwrap();
        first.click();
        assert_eq!(clicks.borrow().as_slice(), ["1".to_string()]);
    }

    #[wasm_bindgen_test]
    fn locked_pool_ignores_clicks() {
        let (document, container) = setup();
        let clicks: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = clicks.clone();
        render_pool(
            &document,
            &container,
            &sample_pool(),
            true,
            Rc::new(move |o| sink.borrow_mut().push(o.id)),
        )
        .unwrap();
        let first: HtmlElement = container
            .first_element_child()
            .unwrap()
            .dyn_into()
            .unwrap();
        first.click();
        assert!(clicks.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    fn every_option_is_rendered_in_order() {
        let (document, container) = setup();
        render_pool(&document, &container, &sample_pool(), false, Rc::new(|_| {})).unwrap();
        assert_eq!(container.child_element_count(), 2);
        let first: HtmlElement = container
            .first_element_child()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(first.inner_text(), "parl");
    }
}
