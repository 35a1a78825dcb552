use image_preview_core::WidgetConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::error::BindError;

/// Replacement UI, with its parts resolved once into typed references.
pub(crate) struct Markup {
    pub(crate) container: Element,
    pub(crate) preview: Option<HtmlElement>,
    pub(crate) remove_button: Option<HtmlElement>,
    pub(crate) trigger_button: Option<HtmlElement>,
}

impl Markup {
    pub(crate) fn build(document: &Document, config: &WidgetConfig) -> Result<Self, BindError> {
        let holder = document.create_element("div")?;
        holder.set_inner_html(config.markup_template.trim());
        let container = holder
            .first_element_child()
            .ok_or(BindError::EmptyTemplate)?;
        let _ = holder.remove_child(&container);
        let preview = find_part(&container, &config.preview_selector);
        let remove_button = find_part(&container, &config.remove_button_selector);
        let trigger_button = find_part(&container, &config.trigger_button_selector);
        Ok(Self {
            container,
            preview,
            remove_button,
            trigger_button,
        })
    }

    pub(crate) fn missing_parts(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.preview.is_none() {
            missing.push("preview");
        }
        if self.remove_button.is_none() {
            missing.push("remove button");
        }
        if self.trigger_button.is_none() {
            missing.push("trigger button");
        }
        missing
    }

    pub(crate) fn insert_before(&self, input: &HtmlInputElement) -> Result<(), BindError> {
        input.before_with_node_1(&self.container)?;
        Ok(())
    }
}

/// Invalid selectors count as matching nothing.
fn find_part(container: &Element, selector: &str) -> Option<HtmlElement> {
    container
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}
