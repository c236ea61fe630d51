//! Station directory: collects records from many sources and renders them
//! into one page.

use std::path::{Path, PathBuf};

use askama::Template;
use tracing::{debug, info, warn};

use crate::record::{RecordError, Station, StationParser};
use crate::render::{Footnote, FootnoteWriter, PageConfig, PageTemplate};

/// Extension an input file needs to be read.
const INPUT_EXTENSION: &str = "txt";

/// Extension the output file must have.
const OUTPUT_EXTENSION: &str = "html";

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Input file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output path without an .html extension
    #[error("refusing to write to {0}")]
    InvalidOutput(PathBuf),

    /// Rendering into memory failed
    #[error("render error: {0}")]
    Render(#[from] std::io::Error),

    /// Page template failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Footnote export failed
    #[error("footnote export error: {0}")]
    Json(#[from] serde_json::Error),

    /// At least one record could not be parsed
    #[error("{0} record(s) could not be parsed")]
    Records(usize),
}

/// A rendered page and the footnotes collected while rendering it.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub footnotes: Vec<Footnote>,
}

impl RenderedPage {
    /// Footnotes as a JSON array of `{"number", "text"}` objects.
    pub fn footnotes_json(&self) -> Result<String, DirectoryError> {
        Ok(serde_json::to_string_pretty(&self.footnotes)?)
    }
}

/// Stations and record errors gathered from all sources, in input order.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    stations: Vec<Station>,
    errors: Vec<RecordError>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse every `.txt` file in `paths`; other paths are skipped.
    ///
    /// Record errors are collected, not returned. Only an unreadable file
    /// aborts loading.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, DirectoryError> {
        let mut directory = Self::new();
        for path in paths {
            let path = path.as_ref();
            if path.extension().and_then(|ext| ext.to_str()) != Some(INPUT_EXTENSION) {
                warn!(path = %path.display(), "skipping input without .txt extension");
                continue;
            }
            let text = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            directory.parse_source(&path.display().to_string(), &text);
        }
        info!(
            stations = directory.stations.len(),
            errors = directory.errors.len(),
            "loaded station directory"
        );
        Ok(directory)
    }

    /// Parse all records of one source, keeping going after failures.
    pub fn parse_source(&mut self, name: &str, text: &str) {
        let before = self.stations.len();
        for result in StationParser::from_text(name, text) {
            match result {
                Ok(station) => self.stations.push(station),
                Err(err) => {
                    debug!(error = %err, "record failed");
                    self.errors.push(err);
                }
            }
        }
        debug!(
            source = name,
            stations = self.stations.len() - before,
            "parsed source"
        );
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn errors(&self) -> &[RecordError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render all stations as list items through one footnote writer, so
    /// footnote numbers run continuously across the whole page.
    pub fn render_items(&self) -> Result<(String, Vec<Footnote>), DirectoryError> {
        let mut out = FootnoteWriter::new(Vec::new());
        for station in &self.stations {
            station.write_html(&mut out)?;
        }
        let (bytes, footnotes) = out.into_parts();
        // Only UTF-8 text is ever written.
        let items = String::from_utf8_lossy(&bytes).into_owned();
        Ok((items, footnotes))
    }

    /// Render the full page.
    pub fn render(&self, config: &PageConfig) -> Result<RenderedPage, DirectoryError> {
        let (items, footnotes) = self.render_items()?;
        let html = PageTemplate::new(config, &items, &footnotes).render()?;
        Ok(RenderedPage { html, footnotes })
    }

    /// Render the page and write it to `path`, which must end in `.html`.
    ///
    /// Nothing is written when any record failed to parse.
    pub fn write_page(&self, path: &Path, config: &PageConfig) -> Result<RenderedPage, DirectoryError> {
        check_output_path(path)?;
        if self.has_errors() {
            return Err(DirectoryError::Records(self.errors.len()));
        }
        let page = self.render(config)?;
        std::fs::write(path, &page.html).map_err(|source| DirectoryError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            stations = self.stations.len(),
            footnotes = page.footnotes.len(),
            "wrote station page"
        );
        Ok(page)
    }
}

/// Reject output paths without an `.html` extension.
pub fn check_output_path(path: &Path) -> Result<(), DirectoryError> {
    if path.extension().and_then(|ext| ext.to_str()) == Some(OUTPUT_EXTENSION) {
        Ok(())
    } else {
        Err(DirectoryError::InvalidOutput(path.to_path_buf()))
    }
}
