pub const BACKGROUND_SIZE: &str = "cover";
pub const BACKGROUND_REPEAT: &str = "no-repeat";
pub const BACKGROUND_POSITION: &str = "center center";
pub const BACKGROUND_NONE: &str = "none";

pub const HIDDEN_INPUT_POSITION: &str = "fixed";
pub const HIDDEN_INPUT_OFFSET: &str = "-1000px";

/// Inline declarations applied to the bound input to move it off-screen.
pub const HIDDEN_INPUT_STYLE: [(&str, &str); 3] = [
    ("position", HIDDEN_INPUT_POSITION),
    ("top", HIDDEN_INPUT_OFFSET),
    ("left", HIDDEN_INPUT_OFFSET),
];

pub fn css_url(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 7);
    out.push_str("url('");
    for ch in src.chars() {
        match ch {
            '\\' | '\'' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            '\x0C' => out.push_str("\\c "),
            _ => out.push(ch),
        }
    }
    out.push_str("')");
    out
}

pub fn background_image(src: Option<&str>) -> String {
    match src {
        Some(src) => css_url(src),
        None => BACKGROUND_NONE.to_string(),
    }
}

/// Parses a computed pixel length such as `"120.5px"`.
pub fn parse_px(value: &str) -> Option<f64> {
    let number = value.trim().strip_suffix("px")?.trim();
    let parsed = number.parse::<f64>().ok()?;
    if parsed.is_finite() && parsed >= 0.0 {
        Some(parsed)
    } else {
        None
    }
}

pub fn format_px(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    let mut out = format!("{:.3}", value);
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
    out.push_str("px");
    out
}
