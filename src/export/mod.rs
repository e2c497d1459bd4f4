//! Writing a result set to one or more output files.
//!
//! [`plan_exports`] decides which files to produce from the caller's explicit
//! filename and format; [`Exporter::dispatch`] renders and writes each one.
//! A failing format is reported and the remaining ones are still written.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod persist;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local};
use tracing::{error, info, warn};

use crate::error::ExportError;
use crate::models::{Project, QueryParameters};

pub use self::csv::render_csv;
pub use self::json::render_json;
pub use self::markdown::render_markdown;
pub use self::persist::write_atomic;

/// Prefix of generated output filenames
pub const BASE_NAME_PREFIX: &str = "freelancer.com";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Markdown,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Serialize `projects` and `params` into this format's bytes.
    pub fn render(
        self,
        projects: &[Project],
        params: &QueryParameters,
        generated_at: &DateTime<Local>,
    ) -> Result<Vec<u8>, ExportError> {
        match self {
            Self::Markdown => Ok(render_markdown(projects, params, generated_at)),
            Self::Csv => render_csv(projects, params),
            Self::Json => render_json(projects, params),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnrecognizedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Caller overrides for where and how results are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    /// Explicit output filename, with or without extension
    pub output: Option<String>,
    /// Explicit format name (`md`, `csv`, `json`)
    pub format: Option<String>,
}

impl ExportRequest {
    pub fn new(output: Option<String>, format: Option<String>) -> Self {
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        Self {
            output: non_empty(output),
            format: non_empty(format),
        }
    }
}

/// One file the exporter intends to write.
///
/// `format` is the raw requested name; it may not be a known format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExport {
    pub filename: String,
    pub format: String,
}

impl PlannedExport {
    fn new(filename: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            format: format.into(),
        }
    }
}

/// Base filename for a run started at `now`, e.g. `freelancer.com_14-05-09_19-10-2026`
pub fn generated_base_name(now: &DateTime<Local>) -> String {
    format!("{}_{}", BASE_NAME_PREFIX, now.format("%H-%M-%S_%d-%m-%Y"))
}

/// Decide which files to write.
///
/// 1. filename with an extension: that extension is the format
/// 2. filename without extension plus a format: `<filename>.<format>`
/// 3. filename alone: `<filename>.csv`
/// 4. format alone: `<base_name>.<format>`
/// 5. neither: `<base_name>.md` and `<base_name>.csv`
pub fn plan_exports(request: &ExportRequest, base_name: &str) -> Vec<PlannedExport> {
    match (&request.output, &request.format) {
        (Some(output), format) => {
            let extension = Path::new(output)
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase());

            match (extension, format) {
                (Some(ext), _) => vec![PlannedExport::new(output.as_str(), ext)],
                (None, Some(format)) => {
                    vec![PlannedExport::new(format!("{output}.{format}"), format.as_str())]
                }
                (None, None) => {
                    let csv = OutputFormat::Csv.extension();
                    vec![PlannedExport::new(format!("{output}.{csv}"), csv)]
                }
            }
        }
        (None, Some(format)) => {
            vec![PlannedExport::new(format!("{base_name}.{format}"), format.as_str())]
        }
        (None, None) => [OutputFormat::Markdown, OutputFormat::Csv]
            .into_iter()
            .map(|format| {
                PlannedExport::new(format!("{base_name}.{format}"), format.extension())
            })
            .collect(),
    }
}

/// A file that was written successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub filename: String,
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// A planned file that could not be produced
#[derive(Debug)]
pub struct FailedExport {
    pub filename: String,
    pub error: ExportError,
}

/// Result of one dispatch: every planned file lands in exactly one list.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<WrittenFile>,
    pub failed: Vec<FailedExport>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes result sets below a directory
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `projects` in every format `request` selects.
    ///
    /// `generated_at` names the generated files and stamps the Markdown report.
    pub fn dispatch(
        &self,
        projects: &[Project],
        params: &QueryParameters,
        request: &ExportRequest,
        generated_at: &DateTime<Local>,
    ) -> ExportReport {
        let base_name = generated_base_name(generated_at);
        let mut report = ExportReport::default();

        for planned in plan_exports(request, &base_name) {
            match self.write_one(&planned, projects, params, generated_at) {
                Ok(written) => {
                    info!("Generated: {}", written.filename);
                    report.written.push(written);
                }
                Err(e) => {
                    match &e {
                        ExportError::UnrecognizedFormat(format) => {
                            warn!("Unknown format: {}", format)
                        }
                        other => error!("Failed to export {}: {}", planned.filename, other),
                    }
                    report.failed.push(FailedExport {
                        filename: planned.filename,
                        error: e,
                    });
                }
            }
        }

        report
    }

    fn write_one(
        &self,
        planned: &PlannedExport,
        projects: &[Project],
        params: &QueryParameters,
        generated_at: &DateTime<Local>,
    ) -> Result<WrittenFile, ExportError> {
        let format: OutputFormat = planned.format.parse()?;
        let bytes = format.render(projects, params, generated_at)?;
        let path = write_atomic(&self.dir.join(&planned.filename), &bytes)?;

        Ok(WrittenFile {
            filename: planned.filename.clone(),
            path,
            format,
        })
    }
}
