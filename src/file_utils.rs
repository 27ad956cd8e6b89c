use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::app_config::Config;

// @module: File and directory utilities

/// What was found at one candidate download directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirCheck {
    pub path: PathBuf,
    pub exists: bool,
    pub readable: bool,
}

/// Result of probing the candidate download directories
#[derive(Debug, Clone, Default)]
pub struct DownloadProbe {
    /// First readable directory that holds at least one PDF
    pub selected: Option<PathBuf>,
    /// PDF file names in `selected`, sorted
    pub files: Vec<String>,
    /// Every candidate in probe order
    pub checked: Vec<DirCheck>,
}

impl DownloadProbe {
    pub fn found(&self) -> bool {
        self.selected.is_some()
    }
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file, creating parent directories
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }

    /// Names of the `.pdf` files directly inside `dir` (any extension case), sorted
    pub fn list_pdfs<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| format!("Failed to read directory: {:?}", dir.as_ref()))?;
            if !entry.file_type().is_file() || !is_pdf(entry.path()) {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        names.sort();
        Ok(names)
    }

    /// Check each candidate in order and select the first readable one with PDFs
    pub fn probe_download_dirs<P: AsRef<Path>>(candidates: &[P]) -> DownloadProbe {
        let mut probe = DownloadProbe::default();

        for candidate in candidates {
            let path = candidate.as_ref().to_path_buf();
            let exists = path.is_dir();
            let listing = if exists { Self::list_pdfs(&path).ok() } else { None };
            let readable = listing.is_some();

            debug!("Download dir {:?}: exists={} readable={}", path, exists, readable);
            probe.checked.push(DirCheck {
                path: path.clone(),
                exists,
                readable,
            });

            if probe.selected.is_none() {
                if let Some(files) = listing.filter(|files| !files.is_empty()) {
                    probe.selected = Some(path);
                    probe.files = files;
                }
            }
        }

        probe
    }

    /// Configured download dirs followed by the platform download dir
    pub fn default_candidates(config: &Config) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = config.download_dirs.iter().map(PathBuf::from).collect();
        if let Some(platform) = dirs::download_dir() {
            if !candidates.contains(&platform) {
                candidates.push(platform);
            }
        }
        candidates
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
}
