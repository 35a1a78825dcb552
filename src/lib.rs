//! Image preview control for `<input type="file">` elements.
//!
//! Binding hides the input off-screen, inserts a preview box with trigger and
//! remove buttons before it, and keeps the preview background in sync with the
//! selected image (read locally as a data URL) or a default image.

mod bindings;
mod dom;
mod error;
mod file_read;
mod handle;
mod markup;
mod registry;
mod widget;

pub use bindings::{bind_image_preview, bind_image_previews, release_detached_image_previews};
pub use error::BindError;
pub use handle::{bind_all, release_detached, ImagePreview};
pub use image_preview_core::{is_accepted_mime, ConfigError, WidgetConfig, ACCEPTED_MIME_TYPES};
