/*!
 * Error types for the medtrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Reasons a single sentence could not be translated.
///
/// These never abort a run: the pipeline renders them inline as a tagged
/// placeholder and moves on to the next sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The endpoint answered with a non-success status
    #[error("translation endpoint responded with HTTP {status_code}")]
    Http {
        /// HTTP status code
        status_code: u16,
    },

    /// The request never produced a response (DNS, connect, timeout, body read)
    #[error("network error: {0}")]
    Network(String),

    /// The body was not the expected nested-array JSON
    #[error("malformed translation response: {0}")]
    MalformedResponse(String),

    /// Nothing to translate
    #[error("empty input")]
    EmptyInput,

    /// The response parsed but contained no translated fragments
    #[error("empty translation result")]
    EmptyResult,
}

impl TranslationError {
    /// Short tag shown to the user inside the placeholder text
    pub fn tag(&self) -> String {
        match self {
            Self::Http { status_code } => format!("HTTP {}", status_code),
            Self::Network(_) => "NETWORK".to_string(),
            Self::MalformedResponse(_) => "PARSE".to_string(),
            Self::EmptyInput => "EMPTY INPUT".to_string(),
            Self::EmptyResult => "EMPTY RESULT".to_string(),
        }
    }
}

/// Errors raised while opening a document or extracting its pages
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be opened or parsed as a PDF
    #[error("Failed to open PDF {path}: {message}")]
    Open {
        /// Path of the document
        path: String,
        /// Underlying parser message
        message: String,
    },

    /// Text extraction failed for a page that exists
    #[error("Failed to extract text from page {page}: {message}")]
    Extract {
        /// One-based page number
        page: usize,
        /// Underlying parser message
        message: String,
    },
}

/// Errors that end a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error from the document source
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// The presenter stopped listening before acknowledging a reveal
    #[error("Presenter stopped before the reveal completed")]
    PresenterClosed,

    /// The blocking document loader panicked or was cancelled
    #[error("Document loader failed: {0}")]
    Loader(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the document source
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from the pipeline
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
