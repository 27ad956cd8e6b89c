use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::app_config::Config;
use crate::document::PageSource;
use crate::file_utils::{DownloadProbe, FileManager};
use crate::language_utils;
use crate::pipeline::{self, PipelineDriver, Presenter, RevealSurface, RunReport};
use crate::providers::Translator;
use crate::providers::google::GoogleTranslate;
use crate::terminal_surface::TerminalSurface;
use crate::translation::Segmenter;

// @module: Application controller for document translation runs

/// Where the pages of a run come from
pub enum DocumentInput {
    /// PDF on disk, opened on the blocking pool
    File(PathBuf),
    /// Pages already in memory
    Pages(Box<dyn PageSource>),
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Set while a run is active
    running: AtomicBool,
}

/// Clears the busy flag when a run ends, however it ends
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            running: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a run is in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Probe the configured download directories
    pub fn probe_downloads(&self) -> DownloadProbe {
        FileManager::probe_download_dirs(&FileManager::default_candidates(&self.config))
    }

    /// Turn the user's input into a PDF path.
    ///
    /// An existing path is used as is. A bare file name is looked up in the
    /// probed download directory; no input picks the first PDF found there.
    pub fn resolve_input(&self, input: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = input {
            if FileManager::file_exists(path) {
                return Ok(path.to_path_buf());
            }
            if path.components().count() > 1 {
                return Err(anyhow!("Input file does not exist: {:?}", path));
            }
        }

        let probe = self.probe_downloads();
        let Some(dir) = probe.selected.as_ref() else {
            for check in &probe.checked {
                debug!("Checked {:?}: exists={} readable={}", check.path, check.exists, check.readable);
            }
            return Err(anyhow!(
                "No PDF files found in {} download directories",
                probe.checked.len()
            ));
        };

        let name = match input {
            Some(path) => path.to_string_lossy().to_string(),
            None => probe.files[0].clone(),
        };
        if !probe.files.contains(&name) {
            return Err(anyhow!("{} not found in {:?}", name, dir));
        }

        info!("Using {} from {:?}", name, dir);
        Ok(dir.join(name))
    }

    /// PDF names in `dir`, or in the probed download directory when `dir` is None
    pub fn list_documents(&self, dir: Option<&Path>) -> Result<(PathBuf, Vec<String>)> {
        match dir {
            Some(dir) => {
                if !FileManager::dir_exists(dir) {
                    return Err(anyhow!("Directory does not exist: {:?}", dir));
                }
                Ok((dir.to_path_buf(), FileManager::list_pdfs(dir)?))
            }
            None => {
                let probe = self.probe_downloads();
                match probe.selected {
                    Some(selected) => Ok((selected, probe.files)),
                    None => Err(anyhow!("No download directory with PDF files was found")),
                }
            }
        }
    }

    /// Translate the PDF at `pdf` with the configured endpoint, rendering to the terminal.
    ///
    /// Returns `Ok(None)` when another run is already active.
    pub async fn run(&self, pdf: &Path) -> Result<Option<RunReport>> {
        let translator = GoogleTranslate::new(&self.config.translation)?;
        self.run_with(
            DocumentInput::File(pdf.to_path_buf()),
            Arc::new(translator),
            TerminalSurface::new(),
        )
        .await
    }

    /// Run one document through `translator`, revealing on `surface`
    pub async fn run_with<S>(
        &self,
        input: DocumentInput,
        translator: Arc<dyn Translator>,
        surface: S,
    ) -> Result<Option<RunReport>>
    where
        S: RevealSurface + 'static,
    {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("A translation run is already in progress, ignoring request");
            return Ok(None);
        }
        let _guard = RunGuard(&self.running);

        let source_language = language_utils::to_request_code(&self.config.source_language)?;
        let target_language = language_utils::to_request_code(&self.config.target_language)?;

        let (sender, receiver) = pipeline::channel();
        let presenter = Presenter::from_config(surface, &self.config.presentation);
        let presenter_task = tokio::spawn(presenter.run(receiver));

        let mut driver = PipelineDriver::new(translator, self.config.terminology.clone())
            .with_languages(source_language, target_language)
            .with_segmenter(Segmenter::new(self.config.segmentation.min_sentence_chars))
            .with_echo_chars(self.config.translation.echo_chars);

        let report = match input {
            DocumentInput::File(path) => driver.run_file(&path, &sender).await,
            DocumentInput::Pages(document) => driver.run(document, &sender).await,
        };
        drop(sender);

        if let Err(e) = presenter_task.await {
            error!("Presenter task failed: {}", e);
        }

        Ok(Some(report))
    }
}
