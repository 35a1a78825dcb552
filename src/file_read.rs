use gloo::file::callbacks::{read_as_data_url, FileReader};
use gloo::file::{File, FileReadError};
use image_preview_core::ReadTicket;

/// A data URL read in flight. Dropping it aborts the browser read and
/// detaches its callbacks, so `on_done` never runs afterwards.
pub(crate) struct PendingRead {
    ticket: ReadTicket,
    _reader: FileReader,
}

impl PendingRead {
    pub(crate) fn start<F>(file: web_sys::File, ticket: ReadTicket, on_done: F) -> Self
    where
        F: FnOnce(ReadTicket, Result<String, FileReadError>) + 'static,
    {
        let file = File::from(file);
        let reader = read_as_data_url(&file, move |result| on_done(ticket, result));
        Self {
            ticket,
            _reader: reader,
        }
    }

    pub(crate) fn ticket(&self) -> ReadTicket {
        self.ticket
    }
}
