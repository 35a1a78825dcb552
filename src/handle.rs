use std::rc::Rc;

use image_preview_core::WidgetConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::error::BindError;
use crate::registry;
use crate::widget::Widget;

/// Handle to a bound widget. Clones share the same widget.
#[wasm_bindgen]
#[derive(Clone)]
pub struct ImagePreview {
    widget: Rc<Widget>,
}

impl PartialEq for ImagePreview {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.widget, &other.widget)
    }
}

impl ImagePreview {
    /// Binds `element`, or returns the existing handle when it is already bound.
    ///
    /// The widget stays registered until [`ImagePreview::unbind`] or
    /// [`release_detached`]; dropping the handle does not detach it.
    pub fn bind(element: &Element, config: WidgetConfig) -> Result<Self, BindError> {
        if let Some(widget) = registry::lookup(element) {
            return Ok(Self { widget });
        }
        let widget = Rc::new(Widget::attach(element, config)?);
        registry::register(Rc::clone(&widget));
        Ok(Self { widget })
    }

    pub fn for_element(element: &Element) -> Option<Self> {
        registry::lookup(element).map(|widget| Self { widget })
    }

    pub fn element(&self) -> HtmlInputElement {
        self.widget.input().clone()
    }

    pub fn container(&self) -> Element {
        self.widget.container().clone()
    }

    pub fn preview(&self) -> Option<HtmlElement> {
        self.widget.preview().cloned()
    }

    pub fn remove_button(&self) -> Option<HtmlElement> {
        self.widget.remove_button().cloned()
    }

    pub fn trigger_button(&self) -> Option<HtmlElement> {
        self.widget.trigger_button().cloned()
    }
}

#[wasm_bindgen]
impl ImagePreview {
    #[wasm_bindgen(getter, js_name = currentImage)]
    pub fn current_image(&self) -> Option<String> {
        self.widget.current_image()
    }

    #[wasm_bindgen(getter, js_name = defaultImage)]
    pub fn default_image(&self) -> Option<String> {
        self.widget.default_image()
    }

    #[wasm_bindgen(getter, js_name = hasImage)]
    pub fn has_image(&self) -> bool {
        self.widget.has_image()
    }

    #[wasm_bindgen(getter, js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        self.widget.is_bound()
    }

    /// Same effect as clicking the remove button.
    pub fn clear(&self) {
        self.widget.clear();
    }

    /// Detaches handlers, removes the markup and restores the input.
    pub fn unbind(&self) {
        registry::release(&self.widget);
        self.widget.unbind();
    }
}

/// Unbinds every widget whose input is no longer in the document and
/// returns how many were released.
pub fn release_detached() -> usize {
    let detached = registry::detached();
    for widget in &detached {
        registry::release(widget);
        widget.unbind();
    }
    detached.len()
}

/// Binds every element matching `selector`, skipping the ones that fail.
pub fn bind_all(selector: &str, config: &WidgetConfig) -> Vec<ImagePreview> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut handles = Vec::new();
    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        match ImagePreview::bind(&element, config.clone()) {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                if config.diagnostics {
                    gloo::console::warn!("image-preview: bind skipped", err.to_string());
                }
            }
        }
    }
    handles
}
