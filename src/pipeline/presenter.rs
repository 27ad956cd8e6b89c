/*!
 * Typewriter presenter.
 *
 * The presenter is the only owner of rendering state. It runs as one task,
 * takes commands from the handoff receiver and reveals each presentation
 * character by character: the whole source first, then the translation at
 * a slightly slower pace. The driver is released only after the final
 * translation character has been shown.
 */

use log::debug;
use std::time::Duration;

use crate::app_config::PresentationConfig;
use crate::pipeline::buffer::RevealBuffer;
use crate::pipeline::handoff::{HandoffReceiver, Presentation, PresenterCommand, RunOutcome};

/// Prefix added before every revealed block
pub const BULLET: &str = "• ";

/// Which pane a character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    /// Extracted sentence
    Source,
    /// Translated sentence
    Translation,
}

/// Rendering callbacks the host UI implements.
///
/// `reveal` is the per-character hook: it receives the pane's buffer after
/// the character was appended, so a surface can size itself to the content
/// and keep the newest text in view. `finished` is the run-completion hook.
pub trait RevealSurface: Send {
    fn reveal(&mut self, pane: Pane, ch: char, buffer: &RevealBuffer);

    /// Progress readout in percent
    fn progress(&mut self, percent: f64);

    fn finished(&mut self, outcome: &RunOutcome);
}

/// Per-character reveal pace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub source_char_delay: Duration,
    pub translation_char_delay: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            source_char_delay: Duration::from_millis(1),
            translation_char_delay: Duration::from_millis(2),
        }
    }
}

impl RevealTiming {
    /// No delay between characters
    pub fn instant() -> Self {
        Self {
            source_char_delay: Duration::ZERO,
            translation_char_delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &PresentationConfig) -> Self {
        Self {
            source_char_delay: Duration::from_millis(config.source_char_delay_ms),
            translation_char_delay: Duration::from_millis(config.translation_char_delay_ms),
        }
    }
}

/// Wrap `text` the way it is revealed: bullet prefix, blank line after.
///
/// The result is never empty, so even an empty translation produces a
/// final character that releases the driver.
pub fn scaffold(text: &str) -> String {
    format!("{}{}\n\n", BULLET, text)
}

/// Renders presentations onto a `RevealSurface`
pub struct Presenter<S> {
    surface: S,
    source: RevealBuffer,
    translation: RevealBuffer,
    timing: RevealTiming,
    presented: usize,
}

impl<S: RevealSurface> Presenter<S> {
    pub fn new(surface: S, timing: RevealTiming, buffer_cap: usize, buffer_retain: usize) -> Self {
        Self {
            surface,
            source: RevealBuffer::new(buffer_cap, buffer_retain),
            translation: RevealBuffer::new(buffer_cap, buffer_retain),
            timing,
            presented: 0,
        }
    }

    pub fn from_config(surface: S, config: &PresentationConfig) -> Self {
        Self::new(
            surface,
            RevealTiming::from_config(config),
            config.buffer_cap,
            config.buffer_retain,
        )
    }

    pub fn source_buffer(&self) -> &RevealBuffer {
        &self.source
    }

    pub fn translation_buffer(&self) -> &RevealBuffer {
        &self.translation
    }

    /// Number of presentations fully revealed
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Consume commands until the run finishes or the driver goes away.
    /// Returns the surface so callers can inspect what was rendered.
    pub async fn run(mut self, mut receiver: HandoffReceiver) -> S {
        while let Some(command) = receiver.recv().await {
            match command {
                PresenterCommand::Present { presentation, done } => {
                    self.present(&presentation).await;
                    if done.send(()).is_err() {
                        debug!("Driver stopped waiting before reveal {} completed", self.presented);
                    }
                }
                PresenterCommand::Finish(outcome) => {
                    if outcome == RunOutcome::Completed {
                        self.surface.progress(100.0);
                    }
                    self.surface.finished(&outcome);
                    break;
                }
            }
        }
        self.surface
    }

    /// Reveal the source, then the translation, then update progress
    pub async fn present(&mut self, presentation: &Presentation) {
        let source = scaffold(&presentation.source);
        for ch in source.chars() {
            self.source.push(ch);
            self.surface.reveal(Pane::Source, ch, &self.source);
            pace(self.timing.source_char_delay).await;
        }

        let translation = scaffold(&presentation.translation);
        let last = translation.chars().count() - 1;
        for (index, ch) in translation.chars().enumerate() {
            self.translation.push(ch);
            self.surface.reveal(Pane::Translation, ch, &self.translation);
            if index == last {
                self.surface.progress(presentation.progress);
            } else {
                pace(self.timing.translation_char_delay).await;
            }
        }

        self.presented += 1;
    }
}

async fn pace(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
