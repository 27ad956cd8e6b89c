use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::{Pane, RevealBuffer, RevealSurface, RunOutcome};

// @module: Terminal rendering of the typewriter reveal

const SOURCE_COLOR: &str = "\x1B[0;37m";
const TRANSLATION_COLOR: &str = "\x1B[1;36m";
const RESET: &str = "\x1B[0m";

/// Progress bar resolution, in steps per percent
const STEPS_PER_PERCENT: f64 = 10.0;

/// Reveals text above an `indicatif` progress bar.
///
/// The line being typed is shown as the bar message; finished lines are
/// printed above the bar in the colour of their pane.
pub struct TerminalSurface {
    bar: ProgressBar,
    line: String,
    pane: Option<Pane>,
    lines_written: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        let bar = ProgressBar::new((100.0 * STEPS_PER_PERCENT) as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {prefix} {wide_msg}")
            .or_else(|_| ProgressStyle::default_bar().template("[{bar:40}] {prefix} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style.progress_chars("█▓▒░"));
        Self::with_bar(bar)
    }

    /// Surface that renders nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_prefix(format_percent(0.0));
        Self {
            bar,
            line: String::new(),
            pane: None,
            lines_written: 0,
        }
    }

    /// Completed lines printed so far
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    fn flush_line(&mut self) {
        let color = match self.pane {
            Some(Pane::Translation) => TRANSLATION_COLOR,
            _ => SOURCE_COLOR,
        };
        self.bar.println(format!("{}{}{}", color, self.line, RESET));
        self.line.clear();
        self.bar.set_message("");
        self.lines_written += 1;
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealSurface for TerminalSurface {
    fn reveal(&mut self, pane: Pane, ch: char, _buffer: &RevealBuffer) {
        if self.pane != Some(pane) && !self.line.is_empty() {
            self.flush_line();
        }
        self.pane = Some(pane);

        if ch == '\n' {
            self.flush_line();
        } else {
            self.line.push(ch);
            self.bar.set_message(self.line.clone());
        }
    }

    fn progress(&mut self, percent: f64) {
        let percent = percent.clamp(0.0, 100.0);
        self.bar.set_position((percent * STEPS_PER_PERCENT).round() as u64);
        self.bar.set_prefix(format_percent(percent));
    }

    fn finished(&mut self, outcome: &RunOutcome) {
        if !self.line.is_empty() {
            self.flush_line();
        }
        match outcome {
            RunOutcome::Completed => self.bar.finish_with_message("Translation complete"),
            RunOutcome::Failed(message) => self.bar.abandon_with_message(format!("Failed: {}", message)),
        }
    }
}

/// Percent readout with one decimal
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}
