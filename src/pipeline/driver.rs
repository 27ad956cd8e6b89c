use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::document::{PageSource, PdfDocument};
use crate::errors::PipelineError;
use crate::pipeline::handoff::{HandoffSender, Presentation, RunOutcome};
use crate::providers::Translator;
use crate::translation::outcome::DEFAULT_ECHO_CHARS;
use crate::translation::{Segmenter, TerminologyMap, TranslationOutcome, truncate_chars};

// @module: Sequential translate-and-present pipeline

/// Longest error message shown to the user when a run fails
pub const ERROR_MESSAGE_CHARS: usize = 120;

/// Lifecycle of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Failed,
}

/// Summary of one run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub state: RunState,
    pub pages_total: usize,
    /// Pages without extractable sentences
    pub pages_skipped: usize,
    pub sentences_presented: usize,
    /// Sentences shown with a failure placeholder
    pub failed_translations: usize,
    /// Truncated message when the run failed
    pub error: Option<String>,
    pub elapsed: Duration,
}

impl RunReport {
    fn new(pages_total: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            state: RunState::Running,
            pages_total,
            pages_skipped: 0,
            sentences_presented: 0,
            failed_translations: 0,
            error: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Completed
    }
}

/// Progress in percent after starting sentence `sentence_index` of
/// `sentence_count` on page `page_index` of `total_pages`.
///
/// Never reaches 100 on its own; the completion step reports that.
pub fn compute_progress(
    page_index: usize,
    total_pages: usize,
    sentence_index: usize,
    sentence_count: usize,
) -> f64 {
    if total_pages == 0 || sentence_count == 0 {
        return 0.0;
    }
    let pages = total_pages as f64;
    let sentences = sentence_count as f64;
    (page_index as f64 / pages + sentence_index as f64 / sentences / pages) * 100.0
}

/// Walks a document page by page and sentence by sentence, translating,
/// correcting and handing each sentence to the presenter before moving on.
pub struct PipelineDriver {
    translator: Arc<dyn Translator>,
    segmenter: Segmenter,
    terminology: TerminologyMap,
    source_language: String,
    target_language: String,
    echo_chars: usize,
    state: RunState,
}

impl PipelineDriver {
    /// English to Korean driver with the default segmenter
    pub fn new(translator: Arc<dyn Translator>, terminology: TerminologyMap) -> Self {
        Self {
            translator,
            segmenter: Segmenter::default(),
            terminology,
            source_language: "en".to_string(),
            target_language: "ko".to_string(),
            echo_chars: DEFAULT_ECHO_CHARS,
            state: RunState::Idle,
        }
    }

    pub fn with_languages(mut self, source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self.target_language = target_language.into();
        self
    }

    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Input characters echoed in failure placeholders
    pub fn with_echo_chars(mut self, echo_chars: usize) -> Self {
        self.echo_chars = echo_chars;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Open the PDF at `path` on the blocking pool and run it
    pub async fn run_file(&mut self, path: &Path, handoff: &HandoffSender) -> RunReport {
        let owned = path.to_path_buf();
        let opened = tokio::task::spawn_blocking(move || PdfDocument::open(owned)).await;

        match opened {
            Ok(Ok(document)) => self.run(Box::new(document), handoff).await,
            Ok(Err(e)) => self.abort(PipelineError::from(e), handoff).await,
            Err(e) => self.abort(PipelineError::Loader(e.to_string()), handoff).await,
        }
    }

    /// Run the whole document. The document is dropped when the run ends.
    pub async fn run(&mut self, document: Box<dyn PageSource>, handoff: &HandoffSender) -> RunReport {
        let started = Instant::now();
        let mut report = RunReport::new(document.page_count());
        self.state = RunState::Running;

        info!(
            "Run {} started: {} pages, {} -> {}",
            report.run_id, report.pages_total, self.source_language, self.target_language
        );

        let result = self.process(document.as_ref(), handoff, &mut report).await;
        drop(document);

        self.conclude(result, handoff, report, started).await
    }

    async fn abort(&mut self, error: PipelineError, handoff: &HandoffSender) -> RunReport {
        let started = Instant::now();
        self.state = RunState::Running;
        self.conclude(Err(error), handoff, RunReport::new(0), started).await
    }

    async fn process(
        &self,
        document: &dyn PageSource,
        handoff: &HandoffSender,
        report: &mut RunReport,
    ) -> Result<(), PipelineError> {
        let total_pages = document.page_count();

        for page_index in 0..total_pages {
            let text = document.page_text(page_index)?;
            let sentences = self.segmenter.segment(text.as_deref());
            if sentences.is_empty() {
                debug!("Skipping page {}: no extractable sentences", page_index + 1);
                report.pages_skipped += 1;
                continue;
            }

            let sentence_count = sentences.len();
            for (sentence_index, sentence) in sentences.into_iter().enumerate() {
                let outcome = self
                    .translator
                    .translate(&sentence, &self.source_language, &self.target_language)
                    .await;

                let translation = match outcome {
                    TranslationOutcome::Translated(text) => self.terminology.correct(&text),
                    failed => {
                        report.failed_translations += 1;
                        failed.into_display_text(self.echo_chars)
                    }
                };

                let progress = compute_progress(page_index, total_pages, sentence_index, sentence_count);
                handoff
                    .present(Presentation {
                        source: sentence,
                        translation,
                        progress,
                    })
                    .await?;
                report.sentences_presented += 1;
            }
        }

        Ok(())
    }

    async fn conclude(
        &mut self,
        result: Result<(), PipelineError>,
        handoff: &HandoffSender,
        mut report: RunReport,
        started: Instant,
    ) -> RunReport {
        let outcome = match result {
            Ok(()) => {
                self.state = RunState::Completed;
                info!(
                    "Run {} completed: {} sentences, {} failed translations, {} pages skipped",
                    report.run_id, report.sentences_presented, report.failed_translations, report.pages_skipped
                );
                RunOutcome::Completed
            }
            Err(e) => {
                self.state = RunState::Failed;
                let message = truncate_chars(&e.to_string(), ERROR_MESSAGE_CHARS);
                error!("Run {} failed: {}", report.run_id, message);
                report.error = Some(message.clone());
                RunOutcome::Failed(message)
            }
        };

        if let Err(e) = handoff.finish(outcome).await {
            warn!("Could not deliver run outcome: {}", e);
        }

        report.state = self.state;
        report.elapsed = started.elapsed();
        report
    }
}
