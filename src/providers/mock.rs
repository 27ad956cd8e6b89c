/*!
 * Mock translator implementations for testing.
 *
 * This module provides mock translators that simulate different behaviors:
 * - `MockTranslator::echo()` - Returns the input unchanged
 * - `MockTranslator::intermittent(n)` - Fails every Nth request
 * - `MockTranslator::failing(error)` - Always fails with the given error
 * - `MockTranslator::empty()` - Succeeds with an empty string
 * - `MockTranslator::slow(ms)` - Echoes after a delay
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::TranslationError;
use crate::providers::Translator;
use crate::translation::TranslationOutcome;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Returns the input unchanged
    Echo,
    /// Prefixes the input with the target language
    Tagged,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with this error
    Failing(TranslationError),
    /// Succeeds with an empty translation
    Empty,
    /// Echoes after a delay
    Slow { delay_ms: u64 },
}

/// Mock translator recording every request it receives
#[derive(Debug, Clone)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Texts received, in order
    requests: Arc<Mutex<Vec<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn tagged() -> Self {
        Self::new(MockBehavior::Tagged)
    }

    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every: fail_every.max(1) })
    }

    pub fn failing(error: TranslationError) -> Self {
        Self::new(MockBehavior::Failing(error))
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator used instead of echoing
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Texts received so far, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    fn respond(&self, text: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(text),
            None => text.to_string(),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        target_language: &str,
    ) -> TranslationOutcome {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(text.to_string());

        match &self.behavior {
            MockBehavior::Echo => TranslationOutcome::Translated(self.respond(text)),

            MockBehavior::Tagged => {
                TranslationOutcome::Translated(format!("[{}] {}", target_language, self.respond(text)))
            }

            MockBehavior::Intermittent { fail_every } => {
                if *fail_every > 0 && count % fail_every == fail_every - 1 {
                    TranslationOutcome::failed(TranslationError::Http { status_code: 503 }, text)
                } else {
                    TranslationOutcome::Translated(self.respond(text))
                }
            }

            MockBehavior::Failing(error) => TranslationOutcome::failed(error.clone(), text),

            MockBehavior::Empty => TranslationOutcome::Translated(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                TranslationOutcome::Translated(self.respond(text))
            }
        }
    }
}
