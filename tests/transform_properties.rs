//! Behavioural checks for name normalization and markup transformation

use conjure_icons::markup::{DEFAULT_VIEW_BOX, INHERIT_COLOR};
use conjure_icons::{normalize, transform, MarkupError};

const FILE_NAMES: &[&str] = &[
    "arrow-up.svg",
    "42-cool&icon.svg",
    "0.svg",
    "9lives & more.svg",
    "___.svg",
    "&&.svg",
    "Mixed_CASE-name.svg",
    "emoji-😀-face.svg",
    "no-extension",
    "dots.in.name.svg",
];

#[test]
fn test_pascal_name_never_starts_with_digit() {
    for name in FILE_NAMES {
        let identity = normalize(name);
        let first = identity.pascal_name.chars().next();
        assert!(
            matches!(first, Some(c) if !c.is_ascii_digit()),
            "{name} produced {:?}",
            identity.pascal_name
        );
    }
}

#[test]
fn test_ampersands_become_and() {
    for name in FILE_NAMES.iter().filter(|n| n.contains('&')) {
        let identity = normalize(name);
        assert!(!identity.clean_key.contains('&'));
        assert!(
            identity.clean_key.matches("and").count() >= name.matches('&').count(),
            "{name} produced {}",
            identity.clean_key
        );
    }
    assert_eq!(normalize("&&.svg").clean_key, "andand");
}

#[test]
fn test_clean_key_characters() {
    for name in FILE_NAMES {
        let key = normalize(name).clean_key;
        assert!(
            key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "{name} produced {key}"
        );
    }
}

#[test]
fn test_normalize_idempotent() {
    for name in FILE_NAMES {
        let key = normalize(name).clean_key;
        assert_eq!(normalize(&format!("{key}.svg")).clean_key, key);
    }
}

#[test]
fn test_missing_view_box_defaults() {
    for markup in [
        "<svg/>",
        r#"<svg width="24" height="24"><path d="M0 0"/></svg>"#,
        r#"<svg viewBox=""><g/></svg>"#,
    ] {
        let out = transform(markup).expect("Should transform");
        assert_eq!(out.view_box, DEFAULT_VIEW_BOX);
    }
}

#[test]
fn test_stroke_always_inherits() {
    for value in ["#fff", "none", "url(#grad)", "rgb(0, 0, 0)"] {
        let markup = format!(r#"<svg><line stroke="{value}"/></svg>"#);
        let out = transform(&markup).expect("Should transform");
        assert!(
            out.source.contains(&format!(r#"<line stroke="{INHERIT_COLOR}" />"#)),
            "stroke {value} not rebound:\n{}",
            out.source
        );
    }
}

#[test]
fn test_fill_rules() {
    let out = transform(r##"<svg><path fill="none"/><path fill="#abc"/></svg>"##)
        .expect("Should transform");
    assert!(out.source.contains(r#"<path fill="none" />"#));
    assert!(out.source.contains(r#"<path fill="currentColor" />"#));
    // The root's own fill attribute is always the wrapper's "none"
    assert!(out.source.contains(r#"      fill="none""#));
}

#[test]
fn test_no_svg_element_is_an_error() {
    assert_eq!(transform("<g><path/></g>"), Err(MarkupError::NoSvgElement));
    assert_eq!(transform(""), Err(MarkupError::NoSvgElement));
}

#[test]
fn test_syntax_error_is_reported() {
    let err = transform("<svg><path></svg>").unwrap_err();
    assert!(matches!(err, MarkupError::Syntax { .. }));
}

#[test]
fn test_nested_svg_is_found() {
    let out = transform(r#"<div><svg viewBox="0 0 8 8"><rect/></svg></div>"#).expect("Should transform");
    assert_eq!(out.view_box, "0 0 8 8");
    assert!(out.source.contains("<rect />"));
}

#[test]
fn test_inline_style_becomes_object() {
    let out = transform(r#"<svg><path style="stroke-linecap: round; opacity: .5"/></svg>"#)
        .expect("Should transform");
    assert!(out
        .source
        .contains(r#"<path style={{ strokeLinecap: "round", opacity: ".5" }} />"#));
}

#[test]
fn test_text_content_preserved() {
    let out = transform("<svg><title>Close</title><text>{x}</text></svg>").expect("Should transform");
    assert!(out.source.contains("<title>Close</title>"));
    assert!(out.source.contains(r#"<text>{"{x}"}</text>"#));
}

#[test]
fn test_space_between_text_and_element_survives() {
    let out = transform(r#"<svg><text x="0">Hello <tspan>world</tspan></text></svg>"#)
        .expect("Should transform");
    assert!(
        out.source
            .contains("<text x=\"0\">\n        Hello{\" \"}\n        <tspan>world</tspan>\n      </text>"),
        "space lost:\n{}",
        out.source
    );
}

#[test]
fn test_html_and_undeclared_entities_accepted() {
    let out = transform("<svg><text>a&nbsp;b</text></svg>").expect("Should transform");
    assert!(out.source.contains("<text>a\u{a0}b</text>"));

    // Illustrator exports reference entities declared in the stripped DOCTYPE
    let illustrator = "<?xml version=\"1.0\"?>\n<!DOCTYPE svg [\n  <!ENTITY ns_svg \"http://www.w3.org/2000/svg\">\n]>\n<svg xmlns:x=\"&ns_svg;\"><path d=\"M0 0\"/></svg>";
    let out = transform(illustrator).expect("Should transform");
    assert!(out.source.contains(r#"<path d="M0 0" />"#));
}
