//! Batch generation: reads an icon directory and writes the component tree
//!
//! Icons are processed one at a time in filename order. Each component is
//! written as soon as it is transformed; the types, icon map and index files
//! follow once every icon is done.

pub mod emit;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{GeneratorConfig, OnMalformed};
use crate::error::MarkupError;
use crate::markup;
use crate::naming::{self, IconIdentity, SVG_EXTENSION};

pub use emit::{GeneratedFile, GeneratedFileSet};

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read input directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    /// An icon's markup could not be transformed
    #[error("{file}: {source}")]
    Malformed { file: String, source: MarkupError },
}

/// A raw icon file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    pub file_name: String,
    pub contents: String,
}

/// An icon left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedIcon {
    pub file_name: String,
    pub error: MarkupError,
}

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: GeneratorConfig,
    /// Build everything but write nothing
    pub dry_run: bool,
}

impl GeneratorOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            config: GeneratorConfig::default(),
            dry_run: false,
        }
    }

    /// Set the generator configuration
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Icons with a generated component, in processing order
    pub generated: Vec<IconIdentity>,
    /// Icons skipped because their markup was malformed
    pub skipped: Vec<SkippedIcon>,
    /// Every file written (or that would be written in a dry run)
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}

impl GenerationReport {
    /// Icons whose filename had to be sanitized
    pub fn renamed(&self) -> impl Iterator<Item = &IconIdentity> {
        self.generated.iter().filter(|icon| icon.was_renamed)
    }
}

/// Run the generator over an input directory
pub fn generate_icons(options: &GeneratorOptions) -> Result<GenerationReport, GenerateError> {
    let output = OutputDir::new(&options.output_dir, options.dry_run);
    for dir in [emit::COMPONENTS_DIR, emit::TYPES_DIR, emit::UTILS_DIR] {
        output.create_dir(dir)?;
    }

    let file_names = list_svg_files(&options.input_dir)?;
    info!(
        count = file_names.len(),
        input = %options.input_dir.display(),
        "found SVG files"
    );

    let format = options.config.format_options();
    let mut report = GenerationReport {
        dry_run: options.dry_run,
        ..GenerationReport::default()
    };

    for file_name in file_names {
        let identity = naming::normalize(&file_name);
        let source = read_icon(&options.input_dir, &file_name)?;

        let transformed = match markup::transform_with_options(&source.contents, &format) {
            Ok(transformed) => transformed,
            Err(error) => match options.config.on_malformed {
                OnMalformed::Abort => {
                    return Err(GenerateError::Malformed {
                        file: file_name,
                        source: error,
                    })
                }
                OnMalformed::Skip => {
                    warn!(file = %file_name, %error, "skipping malformed icon");
                    report.skipped.push(SkippedIcon { file_name, error });
                    continue;
                }
            },
        };

        debug!(
            file = %file_name,
            key = %identity.clean_key,
            view_box = %transformed.view_box,
            "transformed icon"
        );
        let path = output.write(&emit::component_path(&identity), &transformed.source)?;
        if options.dry_run {
            info!("✓ Planned: {}", identity.component_name());
        } else {
            info!("✓ Generated: {}", identity.component_name());
        }
        report.files.push(path);
        report.generated.push(identity);
    }

    for file in GeneratedFileSet::for_icons(&report.generated).files {
        let path = output.write(&file.path, &file.contents)?;
        report.files.push(path);
    }

    Ok(report)
}

/// List `.svg` files in a directory, sorted by name
pub fn list_svg_files(dir: &Path) -> Result<Vec<String>, GenerateError> {
    let read_dir_err = |source| GenerateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let is_file = entry.file_type().map_err(read_dir_err)?.is_file();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!(entry = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };
        if is_file && name.ends_with(SVG_EXTENSION) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Read one icon file
pub fn read_icon(dir: &Path, file_name: &str) -> Result<IconSource, GenerateError> {
    let path = dir.join(file_name);
    let contents = fs::read_to_string(&path).map_err(|source| GenerateError::ReadFile {
        path: path.clone(),
        source,
    })?;
    Ok(IconSource {
        file_name: file_name.to_string(),
        contents,
    })
}

/// Output root that either writes files or only records their paths
struct OutputDir<'a> {
    root: &'a Path,
    dry_run: bool,
}

impl<'a> OutputDir<'a> {
    fn new(root: &'a Path, dry_run: bool) -> Self {
        Self { root, dry_run }
    }

    fn create_dir(&self, relative: &str) -> Result<(), GenerateError> {
        if self.dry_run {
            return Ok(());
        }
        let path = self.root.join(relative);
        fs::create_dir_all(&path).map_err(|source| GenerateError::CreateDir { path, source })
    }

    fn write(&self, relative: &Path, contents: &str) -> Result<PathBuf, GenerateError> {
        let path = self.root.join(relative);
        if self.dry_run {
            debug!(path = %path.display(), "dry run, not writing");
            return Ok(path);
        }
        fs::write(&path, contents).map_err(|source| GenerateError::WriteFile {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
