use chrono::{DateTime, TimeZone, Utc};

// Reference-date layout tokens and their strftime equivalents.
// Order matters: longer tokens come before any shorter token they
// start with ("Monday" before "Mon", "15" before "1", ".000000000"
// before ".000").
const LAYOUT_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    ("Jan", "%b"),
    ("Mon", "%a"),
    ("2006", "%Y"),
    (".000000000", "%.9f"),
    (".000000", "%.6f"),
    (".000", "%.3f"),
    ("15", "%H"),
    ("01", "%m"),
    ("02", "%d"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("06", "%y"),
    ("-07:00", "%:z"),
    ("-0700", "%z"),
    ("Z07:00", "%:z"),
    ("Z0700", "%z"),
    ("MST", "%Z"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("_2", "%e"),
    ("1", "%-m"),
    ("2", "%-d"),
    ("3", "%-I"),
    ("4", "%-M"),
    ("5", "%-S"),
];

/// Translates a reference-date layout ("2 Jan 2006 15:04:05") into a
/// strftime format string. Unrecognized text passes through literally;
/// a literal percent sign is escaped so chrono never misreads it.
pub fn layout_to_strftime(layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() + 8);
    let mut rest = layout;

    while let Some(ch) = rest.chars().next() {
        if let Some((spec, tail)) = match_token(rest) {
            out.push_str(spec);
            rest = tail;
            continue;
        }
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    out
}

fn match_token(rest: &str) -> Option<(&'static str, &str)> {
    for (token, spec) in LAYOUT_TOKENS {
        if let Some(tail) = rest.strip_prefix(token) {
            return Some((spec, tail));
        }
    }
    None
}

/// Formats a Unix timestamp in UTC with the given layout. Returns None
/// when the epoch is outside the representable range.
pub fn format_unix(epoch: i64, layout: &str) -> Option<String> {
    let instant = Utc.timestamp_opt(epoch, 0).single()?;
    Some(format_instant(&instant, layout))
}

pub fn format_instant(instant: &DateTime<Utc>, layout: &str) -> String {
    instant.format(&layout_to_strftime(layout)).to_string()
}
