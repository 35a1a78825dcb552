use image_preview_core::css::{parse_px, HIDDEN_INPUT_STYLE};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement, Window};

pub(crate) fn as_file_input(element: &Element) -> Option<HtmlInputElement> {
    if !element.tag_name().eq_ignore_ascii_case("input") {
        return None;
    }
    let input = element.dyn_ref::<HtmlInputElement>()?;
    if input.type_() != "file" {
        return None;
    }
    Some(input.clone())
}

pub(crate) fn has_file_reader(window: &Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str("FileReader"))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

pub(crate) fn data_attribute(element: &HtmlElement, key: &str) -> Option<String> {
    element
        .dataset()
        .get(key)
        .filter(|value| !value.trim().is_empty())
}

pub(crate) fn set_style(element: &HtmlElement, name: &str, value: &str) {
    let _ = element.style().set_property(name, value);
}

pub(crate) fn set_visible(element: &HtmlElement, visible: bool) {
    let style = element.style();
    if visible {
        let _ = style.remove_property("display");
    } else {
        let _ = style.set_property("display", "none");
    }
}

/// Content width in CSS pixels, the way layout sees it right now.
pub(crate) fn content_width(window: &Window, element: &HtmlElement) -> f64 {
    let computed = window
        .get_computed_style(element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("width").ok())
        .and_then(|width| parse_px(&width));
    computed.unwrap_or_else(|| element.client_width().max(0) as f64)
}

/// Inline values overwritten by [`hide_input`], restored on unbind.
pub(crate) struct SavedInlineStyle {
    entries: Vec<(&'static str, String, String)>,
}

impl SavedInlineStyle {
    pub(crate) fn restore(&self, element: &HtmlElement) {
        let style = element.style();
        for (name, value, priority) in &self.entries {
            if value.is_empty() {
                let _ = style.remove_property(name);
            } else {
                let _ = style.set_property_with_priority(name, value, priority);
            }
        }
    }
}

/// Moves the input off-screen while keeping it in layout and tab order.
pub(crate) fn hide_input(input: &HtmlInputElement) -> SavedInlineStyle {
    let style = input.style();
    let mut entries = Vec::with_capacity(HIDDEN_INPUT_STYLE.len());
    for (name, value) in HIDDEN_INPUT_STYLE {
        let previous = style.get_property_value(name).unwrap_or_default();
        let priority = style.get_property_priority(name);
        entries.push((name, previous, priority));
        let _ = style.set_property(name, value);
    }
    SavedInlineStyle { entries }
}

/// Returns true when the attribute was added here and should be removed on unbind.
pub(crate) fn ensure_accept(input: &HtmlInputElement, accept: &str) -> bool {
    if input.has_attribute("accept") {
        return false;
    }
    input.set_accept(accept);
    true
}
