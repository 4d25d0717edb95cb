//! Deterministic JSX source formatting
//!
//! The generated component is printed in one canonical layout: fixed
//! indentation, double-quoted attribute strings, and an opening tag kept on
//! one line only when it fits within the print width. Formatting never
//! changes what the component renders.

use super::tree::{Attribute, AttributeValue, Element, Node};

/// Namespace declared on every generated `<svg>` root
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Layout options for the formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line width before an opening tag is broken across lines
    pub print_width: usize,
    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            indent_width: 2,
        }
    }
}

impl FormatOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the print width
    pub fn with_print_width(mut self, width: usize) -> Self {
        self.print_width = width;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Build JSX source line by line
pub struct JsxBuilder<'a> {
    options: &'a FormatOptions,
    lines: Vec<String>,
}

impl<'a> JsxBuilder<'a> {
    pub fn new(options: &'a FormatOptions) -> Self {
        Self {
            options,
            lines: vec![],
        }
    }

    fn indent_str(&self, depth: usize) -> String {
        " ".repeat(self.options.indent_width * depth)
    }

    /// Push a raw line at the given depth
    pub fn line(&mut self, depth: usize, content: &str) {
        if content.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", self.indent_str(depth), content));
        }
    }

    /// Push an empty line
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Print an element and its subtree
    pub fn element(&mut self, el: &Element, depth: usize) {
        let attrs: Vec<String> = el.attributes.iter().map(render_attribute).collect();
        self.tag(&el.name, &attrs, &el.children, depth);
    }

    /// Print a tag with pre-rendered attributes and the given children
    pub fn tag(&mut self, name: &str, attrs: &[String], children: &[Node], depth: usize) {
        let indent = self.indent_str(depth);
        let inline_attrs: String = attrs.iter().map(|a| format!(" {}", a)).collect();

        if children.is_empty() {
            let single = format!("{}<{}{} />", indent, name, inline_attrs);
            if self.fits(&single) || attrs.len() <= 1 {
                self.lines.push(single);
            } else {
                self.broken_open_tag(name, attrs, depth);
                self.line(depth, "/>");
            }
            return;
        }

        // Text-only content stays inline when the whole element fits
        if children.iter().all(|c| matches!(c, Node::Text(_))) {
            let text: String = children
                .iter()
                .filter_map(|c| match c {
                    Node::Text(t) => Some(render_text(collapse_whitespace(t).trim_matches(' '))),
                    Node::Element(_) => None,
                })
                .collect::<Vec<_>>()
                .join(" ");
            let single = format!("{}<{}{}>{}</{}>", indent, name, inline_attrs, text, name);
            if self.fits(&single) {
                self.lines.push(single);
                return;
            }
        }

        let open = format!("{}<{}{}>", indent, name, inline_attrs);
        if self.fits(&open) || attrs.len() <= 1 {
            self.lines.push(open);
        } else {
            self.broken_open_tag(name, attrs, depth);
            self.line(depth, ">");
        }

        for (index, child) in children.iter().enumerate() {
            match child {
                Node::Element(el) => self.element(el, depth + 1),
                Node::Text(text) => {
                    let after_element = index > 0 && is_element(&children[index - 1]);
                    let before_element = children.get(index + 1).is_some_and(is_element);
                    let line = text_line(text, after_element, before_element);
                    self.line(depth + 1, &line);
                }
            }
        }

        self.line(depth, &format!("</{}>", name));
    }

    fn broken_open_tag(&mut self, name: &str, attrs: &[String], depth: usize) {
        self.line(depth, &format!("<{}", name));
        for attr in attrs {
            self.line(depth + 1, attr);
        }
    }

    fn fits(&self, line: &str) -> bool {
        line.chars().count() <= self.options.print_width
    }

    /// Finish and return the source, terminated by a newline
    pub fn build(self) -> String {
        let mut source = self.lines.join("\n");
        source.push('\n');
        source
    }
}

/// Print the complete component module for an icon
pub fn format_component(view_box: &str, children: &[Node], options: &FormatOptions) -> String {
    let mut builder = JsxBuilder::new(options);

    builder.line(0, r#"import React, { forwardRef, type SVGProps } from "react";"#);
    builder.blank();
    builder.line(
        0,
        "const Icon = forwardRef<SVGSVGElement, SVGProps<SVGSVGElement>>(",
    );
    builder.line(1, "(props, ref) => (");

    let root_attrs = vec![
        r#"width="1em""#.to_string(),
        r#"height="1em""#.to_string(),
        format!("viewBox={}", jsx_string(view_box)),
        r#"fill="none""#.to_string(),
        format!("xmlns={}", jsx_string(SVG_NAMESPACE)),
        "ref={ref}".to_string(),
        "{...props}".to_string(),
    ];
    builder.tag("svg", &root_attrs, children, 2);

    builder.line(1, "),");
    builder.line(0, ");");
    builder.blank();
    builder.line(0, r#"Icon.displayName = "Icon";"#);
    builder.blank();
    builder.line(0, "export default Icon;");

    builder.build()
}

/// Render one attribute as JSX
pub fn render_attribute(attr: &Attribute) -> String {
    match &attr.value {
        AttributeValue::Text(value) => format!("{}={}", attr.name, jsx_string(value)),
        AttributeValue::Style(declarations) => {
            format!("{}={{{}}}", attr.name, style_object(declarations))
        }
    }
}

/// Quote a value as a JSX attribute string, falling back to an expression
/// when JSX string syntax cannot hold it verbatim
pub fn jsx_string(value: &str) -> String {
    let has_double = value.contains('"');
    let has_single = value.contains('\'');
    if value.contains('&') || (has_double && has_single) {
        format!("{{{}}}", js_string_literal(value))
    } else if has_double {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}

/// JSX drops whitespace at the edge of a text line, so a space that separates
/// text from a neighbouring element is spelled `{" "}`
const JSX_SPACE: &str = "{\" \"}";

fn is_element(node: &Node) -> bool {
    matches!(node, Node::Element(_))
}

/// One text child on its own line
fn text_line(text: &str, after_element: bool, before_element: bool) -> String {
    let collapsed = collapse_whitespace(text);
    let mut line = String::new();
    if after_element && collapsed.starts_with(' ') {
        line.push_str(JSX_SPACE);
    }
    line.push_str(&render_text(collapsed.trim_matches(' ')));
    if before_element && collapsed.ends_with(' ') {
        line.push_str(JSX_SPACE);
    }
    line
}

/// Replace every whitespace run with a single space
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() && c != '\u{a0}' {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Render text content, wrapping it in an expression when it holds JSX syntax
pub fn render_text(text: &str) -> String {
    if text.contains(['{', '}', '<', '>', '&']) {
        format!("{{{}}}", js_string_literal(text))
    } else {
        text.to_string()
    }
}

fn style_object(declarations: &[(String, String)]) -> String {
    if declarations.is_empty() {
        return "{}".to_string();
    }
    let body = declarations
        .iter()
        .map(|(property, value)| format!("{}: {}", object_key(property), js_string_literal(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {} }}", body)
}

fn object_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if is_identifier {
        key.to_string()
    } else {
        js_string_literal(key)
    }
}

/// Double-quoted JavaScript string literal
pub fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
