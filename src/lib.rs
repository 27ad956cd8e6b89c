/*!
 * # medtrans - medical PDF translation with a typewriter reveal
 *
 * Reads a PDF page by page, splits each page into sentences, translates
 * every sentence from English to Korean through a web translation endpoint,
 * fixes well-known medical mistranslations and reveals each source and
 * translated sentence character by character.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Page text sources (lopdf-backed PDFs, in-memory pages)
 * - `translation`: Sentence segmentation, terminology correction, outcomes
 * - `providers`: Translation clients:
 *   - `providers::google`: `translate_a/single` web endpoint
 *   - `providers::mock`: scripted translator
 * - `pipeline`: Driver, handoff channel and typewriter presenter
 * - `terminal_surface`: Progress-bar rendering for the CLI
 * - `file_utils`: Download directory probing and PDF listing
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pipeline;
pub mod providers;
pub mod terminal_surface;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, DocumentInput};
pub use document::{MemoryDocument, PageSource, PdfDocument};
pub use errors::{AppError, DocumentError, PipelineError, TranslationError};
pub use language_utils::{get_language_name, normalize_to_part2t, to_request_code};
pub use pipeline::{PipelineDriver, Presenter, RevealSurface, RunReport, RunState};
pub use providers::Translator;
pub use translation::{Segmenter, TerminologyMap, TranslationOutcome};
