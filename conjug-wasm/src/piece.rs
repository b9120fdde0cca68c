use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, Document, DragEvent, HtmlButtonElement, HtmlElement};

use conjug_core::theme::{self, Connector, Presentation, palette};
use conjug_core::transfer::DRAG_EFFECT;
use conjug_core::{DragPayload, PuzzleOption, derive_presentation};

use crate::utils::warn;

/// Render flags for one piece, supplied by the holder of round state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PieceFlags {
    pub selected: bool,
    pub correctness: Option<bool>,
    pub show_connectors: bool,
    pub disabled: bool,
}

/// Write the drag payload onto a transfer: both entries plus copy-only
/// effect. The caller suppresses the drag entirely for disabled pieces.
pub fn write_payload(dt: &DataTransfer, payload: &DragPayload) -> Result<(), JsValue> {
    for (key, value) in payload.entries() {
        dt.set_data(key, value)?;
    }
    dt.set_effect_allowed(DRAG_EFFECT);
    Ok(())
}

/// Build the DOM node for one piece: a styled button carrying the connector
/// shapes and the dragstart wiring. Click wiring belongs to the zone that
/// hosts the piece.
pub fn build_piece(
    document: &Document,
    option: &PuzzleOption,
    flags: PieceFlags,
) -> Result<HtmlElement, JsValue> {
    let pres = derive_presentation(
        option.slot_type,
        flags.selected,
        flags.correctness,
        flags.show_connectors,
    );

    let button: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    button.set_type("button");
    apply_body_style(&button, &pres)?;

    match pres.connector {
        Connector::Knob => {
            button.append_child(&knob(document, &pres)?.into())?;
            button.append_child(&bridge(document, &pres)?.into())?;
        }
        Connector::Socket => {
            button.append_child(&socket_hole(document)?.into())?;
            button.append_child(&socket_arc(document, &pres)?.into())?;
        }
        Connector::None => {}
    }

    // Label sits above the connector layers.
    let label: HtmlElement = document.create_element("span")?.dyn_into()?;
    label.set_text_content(Some(&option.text));
    label.style().set_property("position", "relative")?;
    label.style().set_property("z-index", "4")?;
    button.append_child(&label)?;

    if flags.disabled {
        button.set_disabled(true);
        button.style().set_property("opacity", "0.5")?;
        button.style().set_property("cursor", "not-allowed")?;
    } else {
        button.set_draggable(true);
        button.style().set_property("cursor", "grab")?;
    }

    let payload = DragPayload::new(option.text.clone(), option.slot_type);
    let disabled = flags.disabled;
    let ondragstart = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
        if disabled {
            e.prevent_default();
            return;
        }
        if let Some(dt) = e.data_transfer()
            && let Err(err) = write_payload(&dt, &payload)
        {
            warn(&format!("drag payload write failed: {err:?}"));
        }
    }));
    button.add_event_listener_with_callback("dragstart", ondragstart.as_ref().unchecked_ref())?;
    ondragstart.forget();

    Ok(button.unchecked_into())
}

fn apply_body_style(button: &HtmlButtonElement, pres: &Presentation) -> Result<(), JsValue> {
    let style = button.style();
    style.set_property("position", "relative")?;
    style.set_property("overflow", "visible")?;
    style.set_property("display", "inline-flex")?;
    style.set_property("align-items", "center")?;
    style.set_property("justify-content", "center")?;
    style.set_property("min-width", "100px")?;
    style.set_property("font-weight", "700")?;
    style.set_property("font-size", "1.1rem")?;
    style.set_property("user-select", "none")?;
    style.set_property("background", pres.fill)?;
    style.set_property("color", pres.ink)?;
    let stroke = if pres.dashed { "dashed" } else { "solid" };
    style.set_property("border", &format!("2px {} {}", stroke, pres.edge))?;
    if let Some(ring) = pres.ring {
        style.set_property("box-shadow", &format!("0 0 0 4px {}", ring))?;
    }
    // Connector sides keep a square edge so the knob/socket sits flush.
    let (radius, padding) = match pres.connector {
        Connector::Knob => ("8px 0 0 8px", "16px 24px 16px 16px"),
        Connector::Socket => ("0 8px 8px 0", "16px 16px 16px 24px"),
        Connector::None => ("12px", "16px 24px"),
    };
    style.set_property("border-radius", radius)?;
    style.set_property("padding", padding)?;
    Ok(())
}

fn abs_circle(document: &Document, side: &str) -> Result<HtmlElement, JsValue> {
    let d = theme::CONNECTOR_DIAMETER;
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    let style = el.style();
    style.set_property("position", "absolute")?;
    style.set_property(side, &format!("-{}px", d / 2))?;
    style.set_property("top", "50%")?;
    style.set_property("transform", "translateY(-50%)")?;
    style.set_property("width", &format!("{}px", d))?;
    style.set_property("height", &format!("{}px", d))?;
    style.set_property("border-radius", "50%")?;
    Ok(el)
}

// Convex knob centered on the trailing edge.
fn knob(document: &Document, pres: &Presentation) -> Result<HtmlElement, JsValue> {
    let el = abs_circle(document, "right")?;
    let style = el.style();
    style.set_property("background", pres.fill)?;
    style.set_property("border", &format!("2px dashed {}", pres.edge))?;
    style.set_property("z-index", "1")?;
    Ok(el)
}

// Rectangle centered on the seam so the border line does not show a gap.
fn bridge(document: &Document, pres: &Presentation) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    let style = el.style();
    style.set_property("position", "absolute")?;
    style.set_property("right", &format!("-{}px", theme::BRIDGE_WIDTH / 2))?;
    style.set_property("top", "50%")?;
    style.set_property("transform", "translateY(-50%)")?;
    style.set_property("width", &format!("{}px", theme::BRIDGE_WIDTH))?;
    style.set_property("height", &format!("{}px", theme::BRIDGE_HEIGHT))?;
    style.set_property("background", pres.fill)?;
    style.set_property("z-index", "2")?;
    Ok(el)
}

// Canvas-colored circle overlapping the leading edge: the "hole".
fn socket_hole(document: &Document) -> Result<HtmlElement, JsValue> {
    let el = abs_circle(document, "left")?;
    let style = el.style();
    style.set_property("background", palette::CANVAS)?;
    style.set_property("z-index", "2")?;
    Ok(el)
}

// Border arc clipped to its inward-facing half: the socket contour.
fn socket_arc(document: &Document, pres: &Presentation) -> Result<HtmlElement, JsValue> {
    let el = abs_circle(document, "left")?;
    let style = el.style();
    style.set_property("background", "transparent")?;
    style.set_property("border", &format!("2px solid {}", pres.edge))?;
    style.set_property("clip-path", "inset(0 0 0 50%)")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", "3")?;
    Ok(el)
}
