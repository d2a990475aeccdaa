use crate::models::AnalysisResult;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid analysis payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse an analysis payload as returned by the analysis service
pub fn parse_analysis(json: &str) -> Result<AnalysisResult, IoError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an analysis payload from disk
pub fn load_analysis(path: &Path) -> Result<AnalysisResult, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path)?;
    let result = parse_analysis(&json)?;
    log::debug!(
        "loaded analysis '{}' from {}",
        result.article_info.title,
        path.display()
    );
    Ok(result)
}

/// Write an export document, creating parent directories as needed
pub fn write_export(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    log::info!("wrote export to {}", path.display());
    Ok(())
}
