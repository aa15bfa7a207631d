use std::path::{Path, PathBuf};

use log::info;
use reqwest::StatusCode;

use crate::error::ApiError;
use crate::services::api_client::{ApiClient, read_success_body};

/// Formats served by the validator's export endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn path(self) -> &'static str {
        match self {
            ExportFormat::Csv => "/export.csv",
            ExportFormat::Json => "/export.json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    /// The validator answers `204 No Content` until its initial validation
    /// run has completed.
    NotReady,
    Cancelled,
}

/// Downloads the validated ROA prefixes in `format` into `target`.
pub async fn export_roas(
    client: &ApiClient,
    format: ExportFormat,
    target: &Path,
) -> Result<ExportOutcome, ApiError> {
    let url = client.url(format.path())?;
    let res = client.get(url, &[]).await?;
    if res.status() == StatusCode::NO_CONTENT {
        info!("Export requested before the initial validation run completed");
        return Ok(ExportOutcome::NotReady);
    }

    let (url, body) = read_success_body(res).await?;
    tokio::fs::write(target, body.as_bytes()).await?;
    info!("Exported {} to {}", url, target.display());
    Ok(ExportOutcome::Saved(target.to_path_buf()))
}

/// Suggested file name for a new export.
pub fn default_file_name(format: ExportFormat) -> String {
    format!(
        "roas_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
