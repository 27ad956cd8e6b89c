/*!
 * Text processing around a single translation call.
 *
 * - `segmenter`: page text to sentences
 * - `terminology`: post-translation medical term corrections
 * - `outcome`: exhaustive result of one translation request
 */

// Re-export main types for easier usage
pub use self::outcome::{TranslationOutcome, truncate_chars};
pub use self::segmenter::Segmenter;
pub use self::terminology::{TermCorrection, TerminologyMap, correct};

// Submodules
pub mod outcome;
pub mod segmenter;
pub mod terminology;
