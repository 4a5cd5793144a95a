//! Saving rendered text to disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::error::{AsciiError, Result};

const TEXT_EXTENSION: &str = ".txt";

/// Writes rendered output into a fixed base directory.
#[derive(Debug, Clone)]
pub struct Writer {
    base_dir: PathBuf,
}

impl Writer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write `contents` under `base_dir` and return the full path.
    ///
    /// With no name, `ascii_<YYMMDDHHMMSS>.txt` is used. A name without a
    /// `.txt` suffix gets one appended.
    pub fn save_file(&self, contents: &str, name: Option<&str>) -> Result<PathBuf> {
        let file_name = output_file_name(name, Local::now());
        let path = self.base_dir.join(file_name);

        std::fs::write(&path, contents).map_err(|e| AsciiError::Write {
            path: path.clone(),
            source: e,
        })?;

        log::info!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Pick the output file name for a save.
///
/// An empty name counts as no name.
pub fn output_file_name<Tz: TimeZone>(name: Option<&str>, now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match name.filter(|n| !n.is_empty()) {
        Some(n) if n.ends_with(TEXT_EXTENSION) => n.to_string(),
        Some(n) => format!("{}{}", n, TEXT_EXTENSION),
        None => format!("ascii_{}{}", now.format("%y%m%d%H%M%S"), TEXT_EXTENSION),
    }
}
