pub mod config;
pub mod css;
pub mod mime;
pub mod preview;

pub use config::{ConfigError, WidgetConfig, DATA_CURRENT_KEY, DATA_DEFAULT_KEY};
pub use mime::{accept_attribute, is_accepted_mime, ACCEPTED_MIME_TYPES};
pub use preview::{PreviewState, PreviewView, ReadOutcome, ReadTicket};
