/*!
 * Sentence segmentation of extracted page text.
 *
 * Pages are split on the literal ". " delimiter. There is no real
 * sentence-boundary detection: abbreviations ("Dr. Smith") and some
 * decimals followed by a space will be split too. That is a known
 * limitation of the splitting rule, not something callers should work
 * around.
 */

/// Default minimum number of characters a trimmed sentence must exceed
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 3;

const DELIMITER: &str = ". ";

/// Splits raw page text into trimmed candidate sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    /// Pieces must have strictly more characters than this after trimming
    min_chars: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SENTENCE_CHARS)
    }
}

impl Segmenter {
    /// Create a segmenter keeping pieces longer than `min_chars` characters
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Threshold this segmenter applies
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Segment one page; `None` or empty text yields no sentences.
    pub fn segment(&self, page_text: Option<&str>) -> Vec<String> {
        let Some(text) = page_text else {
            return Vec::new();
        };
        if text.trim().is_empty() {
            return Vec::new();
        }

        let flattened = text.replace(['\r', '\n'], " ");

        flattened
            .split(DELIMITER)
            .map(str::trim)
            .filter(|piece| piece.chars().count() > self.min_chars)
            .map(str::to_string)
            .collect()
    }
}

/// Segment `page_text` with the given threshold
pub fn segment(page_text: &str, min_chars: usize) -> Vec<String> {
    Segmenter::new(min_chars).segment(Some(page_text))
}
