//! Attribute rewriting rules applied to every element of an icon

use super::tree::{AttributeValue, Element};

/// Color value that makes the icon follow the surrounding text color
pub const INHERIT_COLOR: &str = "currentColor";

/// Apply all attribute rules to one element
pub fn rewrite_element(el: &mut Element) {
    camel_case_attributes(el);
    inherit_colors(el);
    convert_inline_style(el);
}

/// Convert a hyphenated name to camelCase: each hyphen is removed and the
/// character after it uppercased
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Rename hyphenated attributes in place. When the camelCase name is already
/// present, the hyphenated attribute's value wins and the duplicate is dropped.
pub fn camel_case_attributes(el: &mut Element) {
    let mut i = 0;
    while i < el.attributes.len() {
        if !el.attributes[i].name.contains('-') {
            i += 1;
            continue;
        }

        let camel = camel_case(&el.attributes[i].name);
        match el.attributes.iter().position(|a| a.name == camel) {
            Some(existing) => {
                let attr = el.attributes.remove(i);
                let existing = if existing > i { existing - 1 } else { existing };
                el.attributes[existing].value = attr.value;
            }
            None => {
                el.attributes[i].name = camel;
                i += 1;
            }
        }
    }
}

/// Rebind `stroke` (any value) and `fill` (anything but `none`) to the
/// inherited color
pub fn inherit_colors(el: &mut Element) {
    if el.attribute("stroke").is_some() {
        el.set_attribute("stroke", INHERIT_COLOR);
    }
    let rebind_fill = el
        .attribute("fill")
        .is_some_and(|fill| fill.as_text() != Some("none"));
    if rebind_fill {
        el.set_attribute("fill", INHERIT_COLOR);
    }
}

/// Turn a CSS `style` string into declarations a JSX style object can hold
pub fn convert_inline_style(el: &mut Element) {
    for attr in el.attributes.iter_mut().filter(|a| a.name == "style") {
        if let AttributeValue::Text(css) = &attr.value {
            attr.value = AttributeValue::Style(parse_style(css));
        }
    }
}

/// Parse `a: b; c-d: e` into `[("a", "b"), ("cD", "e")]`.
/// Custom properties (`--name`) keep their name.
pub fn parse_style(css: &str) -> Vec<(String, String)> {
    css.split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            let property = if property.starts_with("--") {
                property.to_string()
            } else {
                camel_case(property)
            };
            Some((property, value.to_string()))
        })
        .collect()
}
