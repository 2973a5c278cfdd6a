//! File exporter
//!
//! Writes a text payload as a UTF-8 Markdown file. The filename comes from a
//! template (see [`filename`]), always ends in `.md`, and an existing file is
//! never overwritten: `notes.md`, `notes-1.md`, `notes-2.md`, ...

pub mod filename;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use humansize::{format_size, DECIMAL};

use filename::{GenerateError, Template, TemplateError};

/// Media type of exported files.
pub const MEDIA_TYPE: &str = "text/markdown";

/// Highest numeric suffix tried before giving up.
const MAX_SUFFIX: u32 = 9999;

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Filename(#[from] GenerateError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No free filename for {path} (tried {MAX_SUFFIX} suffixes)")]
    NoFreeName { path: PathBuf },
}

impl From<TemplateError> for ExportError {
    fn from(e: TemplateError) -> Self {
        ExportError::Filename(GenerateError::Template(e))
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Path of the written file
    pub path: PathBuf,
    /// Bytes written
    pub size_bytes: usize,
}

impl ExportResult {
    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Saved {} to {}",
            format_size(self.size_bytes, DECIMAL),
            self.path.display()
        )
    }
}

/// Writes payloads into a target directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
    template: Template,
    config: filename::Config,
}

impl Exporter {
    /// Exporter writing into `directory` with the default `{name}` template.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            template: Template::default(),
            config: filename::Config::default(),
        }
    }

    /// Use a filename template such as `{name}_{date}`.
    pub fn with_template(mut self, template: &str) -> Result<Self, ExportError> {
        self.template = Template::parse(template)?;
        Ok(self)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Filename the payload would get for `name`, before collision handling.
    pub fn filename_for(&self, name: &str) -> Result<String, ExportError> {
        let filename = self.template.filename(name, &self.config);
        filename::validate_length(&filename).map_err(GenerateError::from)?;
        Ok(filename)
    }

    /// Write `payload` as UTF-8 under a filename generated from `name`.
    pub fn export(&self, payload: &str, name: &str) -> Result<ExportResult, ExportError> {
        let filename = self.filename_for(name)?;

        fs::create_dir_all(&self.directory).map_err(|source| ExportError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let (path, file) = self.create_unique(&filename)?;
        write_or_remove(&path, file, payload)?;

        tracing::info!(path = %path.display(), bytes = payload.len(), media_type = MEDIA_TYPE, "exported");
        Ok(ExportResult {
            path,
            size_bytes: payload.len(),
        })
    }

    /// Create the first free file among `name.md`, `name-1.md`, ...
    fn create_unique(&self, filename: &str) -> Result<(PathBuf, fs::File), ExportError> {
        let (stem, ext) = match filename.rsplit_once('.') {
            Some((stem, ext)) => (stem, ext),
            None => (filename, filename::EXTENSION),
        };

        for n in 0..=MAX_SUFFIX {
            let candidate = if n == 0 {
                self.directory.join(filename)
            } else {
                self.directory.join(format!("{}-{}.{}", stem, n, ext))
            };
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
            {
                Ok(file) => return Ok((candidate, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => {
                    return Err(ExportError::Io {
                        path: candidate,
                        source,
                    })
                }
            }
        }

        Err(ExportError::NoFreeName {
            path: self.directory.join(filename),
        })
    }
}

/// Write `payload` to the freshly created `path`; a failed write removes the
/// file so the name stays free.
fn write_or_remove(
    path: &Path,
    mut writer: impl Write,
    payload: &str,
) -> Result<(), ExportError> {
    match writer.write_all(payload.as_bytes()).and_then(|_| writer.flush()) {
        Ok(()) => Ok(()),
        Err(source) => {
            drop(writer);
            if let Err(e) = fs::remove_file(path) {
                tracing::warn!(path = %path.display(), error = %e, "could not remove partial export");
            }
            Err(ExportError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
