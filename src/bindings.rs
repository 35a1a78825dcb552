use image_preview_core::WidgetConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::error::BindError;
use crate::handle::{bind_all, release_detached, ImagePreview};

fn parse_options(options: &JsValue) -> Result<WidgetConfig, BindError> {
    if options.is_undefined() || options.is_null() {
        return Ok(WidgetConfig::default());
    }
    let Some(raw) = js_sys::JSON::stringify(options)?.as_string() else {
        return Ok(WidgetConfig::default());
    };
    Ok(WidgetConfig::from_json(&raw)?)
}

fn options_or_warn(options: &JsValue) -> Option<WidgetConfig> {
    match parse_options(options) {
        Ok(config) => Some(config),
        Err(err) => {
            gloo::console::warn!("image-preview: invalid options", err.to_string());
            None
        }
    }
}

/// Binds one element. Returns `undefined` when the element cannot be bound.
#[wasm_bindgen(js_name = bindImagePreview)]
pub fn bind_image_preview(element: JsValue, options: JsValue) -> Option<ImagePreview> {
    let config = options_or_warn(&options)?;
    let Some(element) = element.dyn_ref::<Element>() else {
        if config.diagnostics {
            gloo::console::warn!("image-preview: bind skipped", "target is not an element");
        }
        return None;
    };
    match ImagePreview::bind(element, config.clone()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            if config.diagnostics {
                gloo::console::warn!("image-preview: bind skipped", err.to_string());
            }
            None
        }
    }
}

#[wasm_bindgen(js_name = bindImagePreviews)]
pub fn bind_image_previews(selector: &str, options: JsValue) -> js_sys::Array {
    let handles = js_sys::Array::new();
    let Some(config) = options_or_warn(&options) else {
        return handles;
    };
    for handle in bind_all(selector, &config) {
        handles.push(&JsValue::from(handle));
    }
    handles
}

/// Unbinds widgets whose input was removed from the page.
#[wasm_bindgen(js_name = releaseDetachedImagePreviews)]
pub fn release_detached_image_previews() -> u32 {
    u32::try_from(release_detached()).unwrap_or(u32::MAX)
}
