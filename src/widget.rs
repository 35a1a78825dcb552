use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::file::FileReadError;
use image_preview_core::css::format_px;
use image_preview_core::{
    accept_attribute, is_accepted_mime, PreviewState, ReadOutcome, ReadTicket, WidgetConfig,
    DATA_CURRENT_KEY, DATA_DEFAULT_KEY,
};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlInputElement, Window};

use crate::dom::{self, SavedInlineStyle};
use crate::error::BindError;
use crate::file_read::PendingRead;
use crate::markup::Markup;

/// State and element references the event handlers work on.
pub(crate) struct Shared {
    window: Window,
    input: HtmlInputElement,
    preview: Option<HtmlElement>,
    remove_button: Option<HtmlElement>,
    trigger_button: Option<HtmlElement>,
    state: RefCell<PreviewState>,
    pending: RefCell<Option<PendingRead>>,
    diagnostics: bool,
}

impl Shared {
    fn trace(&self, message: &str, detail: &str) {
        if self.diagnostics {
            gloo::console::log!(message, detail);
        }
    }

    pub(crate) fn resize(&self) {
        let Some(preview) = self.preview.as_ref() else {
            return;
        };
        if !preview.is_connected() {
            return;
        }
        let width = dom::content_width(&self.window, preview);
        dom::set_style(preview, "height", &format_px(width));
    }

    pub(crate) fn update_ui(&self) {
        let view = self.state.borrow().view();
        if let Some(preview) = self.preview.as_ref() {
            for (name, value) in view.background_declarations() {
                dom::set_style(preview, name, value);
            }
        }
        if let Some(remove_button) = self.remove_button.as_ref() {
            dom::set_visible(remove_button, view.remove_visible);
        }
    }

    fn open_picker(&self) {
        self.input.click();
    }

    fn select_file(self: &Rc<Self>) {
        let Some(file) = self.input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let mime = file.type_();
        if !is_accepted_mime(&mime) {
            self.input.set_value("");
            self.trace("image-preview: rejected file type", &mime);
            return;
        }
        let ticket = self.state.borrow_mut().begin_read();
        self.trace("image-preview: reading", &file.name());
        let weak = Rc::downgrade(self);
        let read = PendingRead::start(file, ticket, move |ticket, result| {
            if let Some(shared) = weak.upgrade() {
                shared.finish_read(ticket, result);
            }
        });
        let previous = self.pending.borrow_mut().replace(read);
        if let Some(previous) = previous {
            self.trace(
                "image-preview: superseded read",
                &previous.ticket().generation().to_string(),
            );
        }
    }

    fn finish_read(&self, ticket: ReadTicket, result: Result<String, FileReadError>) {
        let data_url = match result {
            Ok(data_url) => data_url,
            Err(err) => {
                self.trace("image-preview: read failed", &format!("{err:?}"));
                return;
            }
        };
        let outcome = self.state.borrow_mut().finish_read(ticket, data_url);
        match outcome {
            ReadOutcome::Applied => {
                self.trace("image-preview: image loaded", &ticket.generation().to_string());
                self.update_ui();
            }
            ReadOutcome::Stale => {
                self.trace("image-preview: stale read", &ticket.generation().to_string());
            }
        }
    }

    fn cancel_read(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(pending) = pending {
            self.trace(
                "image-preview: cancelled read",
                &pending.ticket().generation().to_string(),
            );
        }
    }

    pub(crate) fn remove_image(&self) {
        self.input.set_value("");
        self.state.borrow_mut().clear();
        self.cancel_read();
        self.update_ui();
    }
}

fn intercept(event: &Event) {
    event.stop_propagation();
    event.prevent_default();
}

fn listen<F>(
    target: &EventTarget,
    event_type: &'static str,
    shared: &Rc<Shared>,
    handler: F,
) -> EventListener
where
    F: Fn(&Rc<Shared>, &Event) + 'static,
{
    let shared = Rc::clone(shared);
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        move |event| handler(&shared, event),
    )
}

fn register_listeners(shared: &Rc<Shared>) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    listeners.push(listen(&shared.window, "resize", shared, |shared, _event| {
        shared.resize();
    }));
    listeners.push(listen(&shared.input, "change", shared, |shared, event| {
        intercept(event);
        shared.select_file();
    }));
    if let Some(trigger_button) = shared.trigger_button.as_ref() {
        listeners.push(listen(trigger_button, "click", shared, |shared, event| {
            intercept(event);
            shared.open_picker();
        }));
    }
    if let Some(preview) = shared.preview.as_ref() {
        listeners.push(listen(preview, "click", shared, |shared, event| {
            intercept(event);
            shared.open_picker();
        }));
    }
    if let Some(remove_button) = shared.remove_button.as_ref() {
        listeners.push(listen(remove_button, "click", shared, |shared, event| {
            intercept(event);
            shared.remove_image();
        }));
    }
    listeners
}

/// One bound input. Dropping the listeners detaches every handler.
pub(crate) struct Widget {
    shared: Rc<Shared>,
    container: Element,
    saved_style: SavedInlineStyle,
    added_accept: bool,
    listeners: RefCell<Vec<EventListener>>,
    bound: Cell<bool>,
}

impl Widget {
    pub(crate) fn attach(element: &Element, config: WidgetConfig) -> Result<Self, BindError> {
        let input = dom::as_file_input(element).ok_or(BindError::NotFileInput)?;
        let window = web_sys::window().ok_or(BindError::MissingWindow)?;
        if !dom::has_file_reader(&window) {
            return Err(BindError::FileReaderUnavailable);
        }
        let document = window.document().ok_or(BindError::MissingDocument)?;
        let markup = Markup::build(&document, &config)?;

        let saved_style = dom::hide_input(&input);
        let default_image = config
            .resolve_default_image(dom::data_attribute(&input, DATA_DEFAULT_KEY).as_deref());
        let current_image = dom::data_attribute(&input, DATA_CURRENT_KEY);

        if let Err(err) = markup.insert_before(&input) {
            saved_style.restore(&input);
            return Err(err);
        }
        let added_accept = dom::ensure_accept(&input, &accept_attribute());

        if config.diagnostics {
            let missing = markup.missing_parts();
            if !missing.is_empty() {
                gloo::console::warn!("image-preview: markup is missing", missing.join(", "));
            }
            gloo::console::log!(
                "image-preview: bound",
                input.id(),
                default_image.clone().unwrap_or_default()
            );
        }

        let Markup {
            container,
            preview,
            remove_button,
            trigger_button,
        } = markup;
        let shared = Rc::new(Shared {
            window,
            input,
            preview,
            remove_button,
            trigger_button,
            state: RefCell::new(PreviewState::new(default_image, current_image)),
            pending: RefCell::new(None),
            diagnostics: config.diagnostics,
        });
        let listeners = register_listeners(&shared);
        shared.resize();
        shared.update_ui();

        Ok(Self {
            shared,
            container,
            saved_style,
            added_accept,
            listeners: RefCell::new(listeners),
            bound: Cell::new(true),
        })
    }

    pub(crate) fn input(&self) -> &HtmlInputElement {
        &self.shared.input
    }

    pub(crate) fn input_value(&self) -> &JsValue {
        self.shared.input.as_ref()
    }

    pub(crate) fn container(&self) -> &Element {
        &self.container
    }

    pub(crate) fn preview(&self) -> Option<&HtmlElement> {
        self.shared.preview.as_ref()
    }

    pub(crate) fn remove_button(&self) -> Option<&HtmlElement> {
        self.shared.remove_button.as_ref()
    }

    pub(crate) fn trigger_button(&self) -> Option<&HtmlElement> {
        self.shared.trigger_button.as_ref()
    }

    pub(crate) fn current_image(&self) -> Option<String> {
        self.shared.state.borrow().current_image().map(str::to_string)
    }

    pub(crate) fn default_image(&self) -> Option<String> {
        self.shared.state.borrow().default_image().map(str::to_string)
    }

    pub(crate) fn has_image(&self) -> bool {
        self.shared.state.borrow().has_image()
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.bound.get()
    }

    pub(crate) fn clear(&self) {
        self.shared.remove_image();
    }

    pub(crate) fn unbind(&self) {
        if !self.bound.replace(false) {
            return;
        }
        self.listeners.borrow_mut().clear();
        self.shared.cancel_read();
        self.container.remove();
        self.saved_style.restore(&self.shared.input);
        if self.added_accept {
            let _ = self.shared.input.remove_attribute("accept");
        }
        self.shared.trace("image-preview: unbound", &self.shared.input.id());
    }
}
