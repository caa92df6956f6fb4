//! Browser binding for [`TabGroup`](super::TabGroup).
//!
//! Built with the `wasm` feature; the module starts itself when loaded.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{ACTIVE_CLASS, TAB_BUTTON_CLASS, TAB_CONTENT_CLASS, TAB_TARGET_ATTR};
use super::{TabButton, TabGroup, TabPanel};

struct TabElements {
    buttons: Vec<Element>,
    panels: Vec<Element>,
}

fn select_all(document: &Document, class: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(&format!(".{class}"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn is_active(element: &Element) -> bool {
    element.class_list().contains(ACTIVE_CLASS)
}

fn set_active(element: &Element, active: bool) -> Result<(), JsValue> {
    let classes = element.class_list();
    if active {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    }
}

/// Errors from deferred callbacks have no caller to return to; log them.
fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_2(&JsValue::from_str(context), &err);
    }
}

fn sync(elements: &TabElements, group: &TabGroup) -> Result<(), JsValue> {
    for (element, button) in elements.buttons.iter().zip(group.buttons()) {
        set_active(element, button.active)?;
    }
    for (element, panel) in elements.panels.iter().zip(group.panels()) {
        set_active(element, panel.active)?;
    }
    Ok(())
}

/// Bind click handlers to every tab button in `document`
pub fn wire_tabs(document: &Document) -> Result<(), JsValue> {
    let elements = Rc::new(TabElements {
        buttons: select_all(document, TAB_BUTTON_CLASS)?,
        panels: select_all(document, TAB_CONTENT_CLASS)?,
    });

    let group = TabGroup::new(
        elements
            .buttons
            .iter()
            .map(|el| TabButton {
                target: el.get_attribute(TAB_TARGET_ATTR),
                active: is_active(el),
            })
            .collect(),
        elements
            .panels
            .iter()
            .map(|el| TabPanel {
                id: el.id(),
                active: is_active(el),
            })
            .collect(),
    );
    let group = Rc::new(RefCell::new(group));

    for (index, button) in elements.buttons.iter().enumerate() {
        let elements = Rc::clone(&elements);
        let group = Rc::clone(&group);
        let handler = Closure::<dyn FnMut()>::new(move || {
            let mut group = group.borrow_mut();
            if group.click(index) {
                report("tab sync failed:", sync(&elements, &group));
            }
        });
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        handler.forget();
    }

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let ready = document.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            report("tab setup failed:", wire_tabs(&ready));
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            handler.as_ref().unchecked_ref(),
        )?;
        handler.forget();
    } else {
        wire_tabs(&document)?;
    }
    Ok(())
}
