use image_preview_core::ConfigError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("element is not an <input type=\"file\">")]
    NotFileInput,
    #[error("FileReader is not available")]
    FileReaderUnavailable,
    #[error("missing window")]
    MissingWindow,
    #[error("missing document")]
    MissingDocument,
    #[error("markup template produced no element")]
    EmptyTemplate,
    #[error("dom error: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for BindError {
    fn from(error: JsValue) -> Self {
        BindError::Dom(js_err(error))
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            if value != "{}" {
                return value;
            }
        }
    }
    if let Ok(message) = js_sys::Reflect::get(&error, &JsValue::from_str("message")) {
        if let Some(value) = message.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
