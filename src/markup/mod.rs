//! SVG markup to React component transformation
//!
//! This is the core of the generator: raw icon markup goes in, a formatted
//! ref-forwarding component comes out.
//!
//! # Example
//!
//! ```rust
//! use conjure_icons::markup::transform;
//!
//! let out = transform(r##"<svg viewBox="0 0 20 20"><path stroke-width="2" fill="#000"/></svg>"##).unwrap();
//! assert_eq!(out.view_box, "0 0 20 20");
//! assert!(out.source.contains(r#"<path strokeWidth="2" fill="currentColor" />"#));
//! ```

pub mod attributes;
mod entities;
pub mod format;
pub mod tree;

pub use attributes::INHERIT_COLOR;
pub use format::FormatOptions;

use crate::error::MarkupError;

/// viewBox used when the source icon declares none
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Result of transforming one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedMarkup {
    /// Formatted component source
    pub source: String,
    /// viewBox of the source icon, or the default
    pub view_box: String,
}

/// Transform SVG markup into component source with default formatting
pub fn transform(svg_markup: &str) -> Result<TransformedMarkup, MarkupError> {
    transform_with_options(svg_markup, &FormatOptions::default())
}

/// Transform SVG markup into component source
pub fn transform_with_options(
    svg_markup: &str,
    options: &FormatOptions,
) -> Result<TransformedMarkup, MarkupError> {
    let cleaned = strip_prologue(svg_markup);
    let nodes = tree::parse(&cleaned)?;

    let mut svg = tree::find_first_named(nodes, "svg").ok_or(MarkupError::NoSvgElement)?;

    let view_box = svg
        .get_attribute("viewBox")
        .filter(|vb| !vb.is_empty())
        .unwrap_or(DEFAULT_VIEW_BOX)
        .to_string();
    svg.remove_attribute("class");

    svg.walk_mut(&mut attributes::rewrite_element);

    let source = format::format_component(&view_box, &svg.children, options);
    Ok(TransformedMarkup { source, view_box })
}

/// Remove XML declarations and DOCTYPE declarations from markup
pub fn strip_prologue(markup: &str) -> String {
    let without_decl = remove_delimited(markup, "<?xml", |rest| rest.find("?>").map(|i| i + 2));
    remove_delimited(&without_decl, "<!DOCTYPE", |rest| {
        let close = rest.find('>')?;
        // An internal subset ends at `]>`
        match rest[..close].find('[') {
            Some(_) => rest.find("]>").map(|i| i + 2),
            None => Some(close + 1),
        }
    })
}

/// Remove every span starting with `open` and ending where `end_of` says.
/// An unterminated span is left untouched.
fn remove_delimited<F>(input: &str, open: &str, end_of: F) -> String
where
    F: Fn(&str) -> Option<usize>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match end_of(candidate) {
            Some(end) => rest = &candidate[end..],
            None => {
                rest = candidate;
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prologue() {
        let input = "<?xml version=\"1.0\"?>\n<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"x.dtd\">\n<svg/>";
        assert_eq!(strip_prologue(input).trim(), "<svg/>");
    }

    #[test]
    fn test_strip_doctype_internal_subset() {
        let input = "<!DOCTYPE svg [<!ENTITY a \"b\">]><svg/>";
        assert_eq!(strip_prologue(input), "<svg/>");
    }

    #[test]
    fn test_strip_unterminated_kept() {
        assert_eq!(strip_prologue("<?xml version"), "<?xml version");
    }

    #[test]
    fn test_transform_default_view_box() {
        let out = transform(r#"<svg><path d="M0 0"/></svg>"#).expect("Should transform");
        assert_eq!(out.view_box, DEFAULT_VIEW_BOX);
        assert!(out.source.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn test_transform_no_svg() {
        let result = transform("<div><span/></div>");
        assert_eq!(result, Err(MarkupError::NoSvgElement));
    }

    #[test]
    fn test_transform_root_class_dropped() {
        let out = transform(r#"<svg class="icon" viewBox="0 0 16 16"><g class="keep"/></svg>"#)
            .expect("Should transform");
        assert!(out.source.contains(r#"<g class="keep" />"#));
        assert!(!out.source.contains(r#"class="icon""#));
    }

    #[test]
    fn test_transform_descendants_rewritten() {
        let out = transform(
            r##"<svg><g stroke="#111" stroke-linejoin="round"><circle fill="red" r="2"/><rect fill="none"/></g></svg>"##,
        )
        .expect("Should transform");
        assert!(out.source.contains(r#"<g stroke="currentColor" strokeLinejoin="round">"#));
        assert!(out.source.contains(r#"<circle fill="currentColor" r="2" />"#));
        assert!(out.source.contains(r#"<rect fill="none" />"#));
    }
}
