pub const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/gif", "image/jpg", "image/jpeg", "image/png"];

/// Declared types are matched exactly; browsers already lowercase them.
pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime)
}

/// Comma separated form suitable for an `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_MIME_TYPES.join(",")
}
