//! Conjure Icons - generate typed React icon components from SVG files
//!
//! This library normalizes icon filenames into component identifiers,
//! transforms SVG markup into ref-forwarding components that inherit the
//! surrounding text color, and writes the component tree with a name union,
//! a lookup map and a barrel index.
//!
//! # Example
//!
//! ```rust
//! use conjure_icons::{normalize, transform};
//!
//! let identity = normalize("arrow-up.svg");
//! assert_eq!(identity.component_name(), "ArrowUpIcon");
//!
//! let component = transform(r#"<svg viewBox="0 0 20 20"><path fill="red"/></svg>"#).unwrap();
//! assert!(component.source.contains(r#"fill="currentColor""#));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod markup;
pub mod naming;

pub use config::{ConfigError, GeneratorConfig, OnMalformed};
pub use error::MarkupError;
pub use generator::{
    generate_icons, GenerateError, GeneratedFile, GeneratedFileSet, GenerationReport,
    GeneratorOptions, IconSource, SkippedIcon,
};
pub use markup::{transform, transform_with_options, FormatOptions, TransformedMarkup};
pub use naming::{normalize, IconIdentity};
