use serde::{Deserialize, Serialize};

pub const DEFAULT_MARKUP_TEMPLATE: &str = concat!(
    r#"<div class="image-preview">"#,
    r#"<div class="image-preview__preview"></div>"#,
    r#"<div class="image-preview__buttons">"#,
    r#"<span class="image-preview__trigger-button"><i class="fa fa-plus"></i></span>"#,
    r#"<span class="image-preview__remove-button"><i class="fa fa-times"></i></span>"#,
    r#"</div>"#,
    r#"</div>"#,
);
pub const DEFAULT_PREVIEW_SELECTOR: &str = ".image-preview__preview";
pub const DEFAULT_REMOVE_BUTTON_SELECTOR: &str = ".image-preview__remove-button";
pub const DEFAULT_TRIGGER_BUTTON_SELECTOR: &str = ".image-preview__trigger-button";

pub const DATA_DEFAULT_KEY: &str = "default";
pub const DATA_CURRENT_KEY: &str = "current";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget options: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub default_image_url: Option<String>,
    pub markup_template: String,
    pub preview_selector: String,
    pub remove_button_selector: String,
    pub trigger_button_selector: String,
    /// Console logging for binding and file selection.
    pub diagnostics: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_image_url: None,
            markup_template: DEFAULT_MARKUP_TEMPLATE.to_string(),
            preview_selector: DEFAULT_PREVIEW_SELECTOR.to_string(),
            remove_button_selector: DEFAULT_REMOVE_BUTTON_SELECTOR.to_string(),
            trigger_button_selector: DEFAULT_TRIGGER_BUTTON_SELECTOR.to_string(),
            diagnostics: false,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_default_image(mut self, url: impl Into<String>) -> Self {
        self.default_image_url = Some(url.into());
        self
    }

    /// Replaces the markup along with the selectors that locate its parts.
    pub fn with_markup(
        mut self,
        template: impl Into<String>,
        preview_selector: impl Into<String>,
        remove_button_selector: impl Into<String>,
        trigger_button_selector: impl Into<String>,
    ) -> Self {
        self.markup_template = template.into();
        self.preview_selector = preview_selector.into();
        self.remove_button_selector = remove_button_selector.into();
        self.trigger_button_selector = trigger_button_selector.into();
        self
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// `data-default` wins over the configured default when it is non-empty.
    pub fn resolve_default_image(&self, data_default: Option<&str>) -> Option<String> {
        non_empty(data_default)
            .or_else(|| non_empty(self.default_image_url.as_deref()))
            .map(str::to_string)
    }
}

pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
