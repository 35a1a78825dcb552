use crate::config::non_empty;
use crate::css::{background_image, BACKGROUND_POSITION, BACKGROUND_REPEAT, BACKGROUND_SIZE};

/// Handed out when a read starts. Only the newest ticket may complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTicket(u64);

impl ReadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Applied,
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewView {
    pub background_image: String,
    pub remove_visible: bool,
}

impl PreviewView {
    pub fn background_declarations(&self) -> [(&'static str, &str); 4] {
        [
            ("background-image", self.background_image.as_str()),
            ("background-size", BACKGROUND_SIZE),
            ("background-repeat", BACKGROUND_REPEAT),
            ("background-position", BACKGROUND_POSITION),
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct PreviewState {
    default_image: Option<String>,
    current_image: Option<String>,
    generation: u64,
}

impl PreviewState {
    pub fn new(default_image: Option<String>, current_image: Option<String>) -> Self {
        Self {
            default_image: normalize(default_image),
            current_image: normalize(current_image),
            generation: 0,
        }
    }

    pub fn default_image(&self) -> Option<&str> {
        self.default_image.as_deref()
    }

    pub fn current_image(&self) -> Option<&str> {
        self.current_image.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.current_image.is_some()
    }

    /// Invalidates every ticket handed out so far.
    pub fn begin_read(&mut self) -> ReadTicket {
        self.generation = self.generation.wrapping_add(1);
        ReadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn finish_read(&mut self, ticket: ReadTicket, data_url: String) -> ReadOutcome {
        if !self.is_current(ticket) {
            return ReadOutcome::Stale;
        }
        self.current_image = normalize(Some(data_url));
        ReadOutcome::Applied
    }

    /// Drops the current image and any read still in flight.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.current_image = None;
    }

    pub fn view(&self) -> PreviewView {
        match self.current_image.as_deref() {
            Some(current) => PreviewView {
                background_image: background_image(Some(current)),
                remove_visible: true,
            },
            None => PreviewView {
                background_image: background_image(self.default_image.as_deref()),
                remove_visible: false,
            },
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    non_empty(value.as_deref())?;
    value
}
