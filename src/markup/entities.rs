//! Lenient entity decoding
//!
//! Icon exports are not always well-formed XML. HTML named entities such as
//! `&nbsp;` are resolved to their characters, and references nothing can
//! resolve (`&ns_svg;` from a stripped DOCTYPE, a bare `&`) are kept as
//! literal text instead of failing the parse.

use std::borrow::Cow;

use quick_xml::escape::{unescape_with, EscapeError};

/// Decode entity references in raw text or attribute content
pub fn decode(raw: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !raw.contains('&') {
        return Ok(Cow::Borrowed(raw));
    }
    let escaped = escape_unresolvable(raw);
    unescape_with(&escaped, html_entity).map(|decoded| Cow::Owned(decoded.into_owned()))
}

/// Escape the `&` of every reference that would not resolve, so it decodes
/// back to itself
fn escape_unresolvable(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let name = after.find(';').map(|end| &after[..end]);
        match name {
            Some(name) if resolves(name) => out.push('&'),
            _ => out.push_str("&amp;"),
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

fn resolves(name: &str) -> bool {
    if let Some(number) = name.strip_prefix('#') {
        return !number.is_empty();
    }
    matches!(name, "amp" | "lt" | "gt" | "quot" | "apos") || html_entity(name).is_some()
}

/// Common HTML named entities seen in exported icons
fn html_entity(name: &str) -> Option<&'static str> {
    let value = match name {
        "nbsp" => "\u{a0}",
        "ensp" => "\u{2002}",
        "emsp" => "\u{2003}",
        "thinsp" => "\u{2009}",
        "zwnj" => "\u{200c}",
        "zwj" => "\u{200d}",
        "shy" => "\u{ad}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "laquo" => "\u{ab}",
        "raquo" => "\u{bb}",
        "hellip" => "\u{2026}",
        "middot" => "\u{b7}",
        "bull" => "\u{2022}",
        "deg" => "\u{b0}",
        "times" => "\u{d7}",
        "divide" => "\u{f7}",
        "plusmn" => "\u{b1}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "trade" => "\u{2122}",
        "sect" => "\u{a7}",
        "para" => "\u{b6}",
        "cent" => "\u{a2}",
        "pound" => "\u{a3}",
        "yen" => "\u{a5}",
        "euro" => "\u{20ac}",
        "larr" => "\u{2190}",
        "uarr" => "\u{2191}",
        "rarr" => "\u{2192}",
        "darr" => "\u{2193}",
        _ => return None,
    };
    Some(value)
}
