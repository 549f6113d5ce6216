//! apierr-gen: typed API error constructors from YAML definitions
//!
//! The pipeline is load → render → write:
//!
//! - [`loader`] parses and validates the definitions into an [`ErrorsFile`]
//! - [`renderer`] turns the model into Rust source, deterministically
//! - [`generate`] runs both and replaces the output file atomically
//!
//! # Example
//!
//! ```ignore
//! use apierr_gen::{generate, RenderOptions};
//!
//! generate("errors.yml", "src/generr/errors.rs", &RenderOptions::default())?;
//! ```

pub mod loader;
pub mod renderer;
pub mod schema;
pub mod template;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub use loader::{from_yaml, load};
pub use renderer::{render, ErrorRenderer, RenderOptions};
pub use schema::{ArgDef, ErrorDef, ErrorsFile};

/// Errors raised while loading error definitions
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse error definitions: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid error definitions: {0}")]
    Validation(String),
}

/// Errors raised while rendering a schema
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("error `{0}` is defined more than once")]
    DuplicateName(String),
    #[error("identifier `{ident}` would be generated for both {first} and {second}")]
    NameCollision {
        ident: String,
        first: String,
        second: String,
    },
    #[error("invalid template: {0}")]
    Template(#[source] Box<handlebars::TemplateError>),
    #[error("template expansion failed: {0}")]
    Expansion(#[source] Box<handlebars::RenderError>),
}

/// Errors raised by [`generate`]
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads `input`, renders it, and atomically replaces `output`.
///
/// Returns the path written. On failure `output` is left untouched.
pub fn generate(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<PathBuf, GenerateError> {
    let output = output.as_ref();
    let file = load(input)?;
    let source = ErrorRenderer::new(options.clone())?.render(&file)?;

    write_atomic(output, source.as_bytes()).map_err(|source| GenerateError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        errors = file.errors().len(),
        output = %output.display(),
        "error types generated"
    );
    Ok(output.to_path_buf())
}

/// Renders `input` and reports whether `output` already holds that text.
pub fn is_up_to_date(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<bool, GenerateError> {
    let output = output.as_ref();
    let file = load(input)?;
    let expected = ErrorRenderer::new(options.clone())?.render(&file)?;

    match fs::read_to_string(output) {
        Ok(current) => Ok(current == expected),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(GenerateError::Read {
            path: output.to_path_buf(),
            source,
        }),
    }
}

/// Writes to a uniquely named temporary file next to `path`, then persists
/// it over `path`. The temporary file is removed on any failure.
fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
