//! Icon name normalization
//!
//! Turns a raw SVG filename into the key used by the generated icon map and
//! the PascalCase identifier used for the component.
//!
//! # Example
//!
//! ```rust
//! use conjure_icons::naming::normalize;
//!
//! let identity = normalize("42-cool&icon.svg");
//! assert_eq!(identity.clean_key, "42-coolandicon");
//! assert_eq!(identity.pascal_name, "Icon42Coolandicon");
//! assert!(identity.was_renamed);
//! ```

pub mod lexer;

/// File extension of icon sources
pub const SVG_EXTENSION: &str = ".svg";

/// Prefix added to identifiers that would otherwise be invalid
pub const IDENTIFIER_PREFIX: &str = "Icon";

/// Names derived from a single icon file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconIdentity {
    /// Filename without the `.svg` suffix
    pub original_name: String,
    /// Sanitized name, used as the public lookup key
    pub clean_key: String,
    /// Component identifier (the generated component is `<pascal_name>Icon`)
    pub pascal_name: String,
    /// Whether sanitization changed the name
    pub was_renamed: bool,
}

impl IconIdentity {
    /// Name of the generated component
    pub fn component_name(&self) -> String {
        format!("{}Icon", self.pascal_name)
    }
}

/// Derive the identity of an icon from its filename
pub fn normalize(raw_file_name: &str) -> IconIdentity {
    let original_name = strip_svg_extension(raw_file_name).to_string();
    let clean_key = clean_file_name(&original_name);
    let pascal_name = to_pascal_case(&clean_key);
    let was_renamed = original_name != clean_key;

    IconIdentity {
        original_name,
        clean_key,
        pascal_name,
        was_renamed,
    }
}

/// Remove a trailing `.svg`, if present
pub fn strip_svg_extension(name: &str) -> &str {
    name.strip_suffix(SVG_EXTENSION).unwrap_or(name)
}

/// Sanitize a filename into a lookup key
///
/// The extension is stripped, `&` becomes `and`, and anything other than
/// ASCII letters, digits, `-` and `_` is dropped.
pub fn clean_file_name(name: &str) -> String {
    strip_svg_extension(name)
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Convert a key into a PascalCase identifier
///
/// Words are split on runs of `-`, `_` and whitespace. Identifiers that are
/// empty or start with a digit get the `Icon` prefix.
pub fn to_pascal_case(name: &str) -> String {
    let pascal: String = lexer::words(name).map(|word| capitalize(&word)).collect();

    match pascal.chars().next() {
        Some(c) if !c.is_ascii_digit() => pascal,
        _ => format!("{}{}", IDENTIFIER_PREFIX, pascal),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
