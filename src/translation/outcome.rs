/*!
 * Result of translating one sentence.
 */

use crate::errors::TranslationError;

/// Default number of input characters echoed inside a failure placeholder
pub const DEFAULT_ECHO_CHARS: usize = 40;

/// Either the translated text or the reason it could not be produced.
///
/// Callers never see a raised error for a single sentence; a failure is
/// rendered inline through [`TranslationOutcome::display_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    Failed {
        error: TranslationError,
        /// Text that was sent for translation
        original: String,
    },
}

impl TranslationOutcome {
    pub fn failed(error: TranslationError, original: impl Into<String>) -> Self {
        Self::Failed {
            error,
            original: original.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    pub fn error(&self) -> Option<&TranslationError> {
        match self {
            Self::Translated(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    /// Text to show for this outcome, echoing at most `echo_chars` of the input on failure
    pub fn display_text(&self, echo_chars: usize) -> String {
        match self {
            Self::Translated(text) => text.clone(),
            Self::Failed { error, original } => {
                format!("[translation failed: {}] {}", error.tag(), truncate_chars(original, echo_chars))
            }
        }
    }

    pub fn into_display_text(self, echo_chars: usize) -> String {
        match self {
            Self::Translated(text) => text,
            failed => failed.display_text(echo_chars),
        }
    }
}

/// Keep the first `max_chars` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}
