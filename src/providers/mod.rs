/*!
 * Translation client implementations.
 *
 * - `google`: the public `translate_a/single` endpoint
 * - `mock`: scripted translator for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::translation::TranslationOutcome;

/// Common trait for all translation clients
///
/// Implementations must not fail: every error is folded into
/// `TranslationOutcome::Failed` so a run can keep going sentence by sentence.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate one sentence
    ///
    /// # Arguments
    /// * `text` - Sentence to translate
    /// * `source_language` - Language code of `text`
    /// * `target_language` - Language code to translate into
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslationOutcome;
}

pub mod google;
pub mod mock;
