use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use url::Url;

use crate::file_utils::FileManager;
use crate::language_utils;
use crate::translation::TerminologyMap;
use crate::translation::outcome::DEFAULT_ECHO_CHARS;
use crate::translation::segmenter::DEFAULT_MIN_SENTENCE_CHARS;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Source language code (ISO)
    pub source_language: String,

    /// Target language code (ISO)
    pub target_language: String,

    /// Translation endpoint settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Sentence segmentation settings
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Typewriter reveal settings
    #[serde(default)]
    pub presentation: PresentationConfig,

    /// Directories probed, in order, when looking for PDFs
    #[serde(default = "default_download_dirs")]
    pub download_dirs: Vec<String>,

    /// Post-translation term corrections, applied in order
    #[serde(default = "TerminologyMap::medical_defaults")]
    pub terminology: TerminologyMap,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Remote translation endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value of the `client` query parameter
    #[serde(default = "default_client")]
    pub client: String,

    /// Value of the `dt` query parameter
    #[serde(default = "default_output_type")]
    pub output_type: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Characters of the input echoed in failure placeholders
    #[serde(default = "default_echo_chars")]
    pub echo_chars: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            client: default_client(),
            output_type: default_output_type(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            echo_chars: default_echo_chars(),
        }
    }
}

/// Sentence segmentation configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SegmentationConfig {
    /// Sentences must have more characters than this after trimming
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: default_min_sentence_chars(),
        }
    }
}

/// Typewriter reveal configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PresentationConfig {
    /// Delay between source characters in milliseconds
    #[serde(default = "default_source_char_delay_ms")]
    pub source_char_delay_ms: u64,

    /// Delay between translated characters in milliseconds
    #[serde(default = "default_translation_char_delay_ms")]
    pub translation_char_delay_ms: u64,

    /// Maximum characters retained per pane
    #[serde(default = "default_buffer_cap")]
    pub buffer_cap: usize,

    /// Characters kept once the cap is exceeded
    #[serde(default = "default_buffer_retain")]
    pub buffer_retain: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            source_char_delay_ms: default_source_char_delay_ms(),
            translation_char_delay_ms: default_translation_char_delay_ms(),
            buffer_cap: default_buffer_cap(),
            buffer_retain: default_buffer_retain(),
        }
    }
}

impl PresentationConfig {
    /// Same buffers, no animation delay
    pub fn instant(&self) -> Self {
        Self {
            source_char_delay_ms: 0,
            translation_char_delay_ms: 0,
            ..self.clone()
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_client() -> String {
    "gtx".to_string()
}

fn default_output_type() -> String {
    "t".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_echo_chars() -> usize {
    DEFAULT_ECHO_CHARS
}

fn default_min_sentence_chars() -> usize {
    DEFAULT_MIN_SENTENCE_CHARS
}

fn default_source_char_delay_ms() -> u64 {
    1
}

fn default_translation_char_delay_ms() -> u64 {
    2
}

fn default_buffer_cap() -> usize {
    5000
}

fn default_buffer_retain() -> usize {
    4500
}

// Android download locations, probed before the platform download dir
fn default_download_dirs() -> Vec<String> {
    vec![
        "/storage/emulated/0/Download".to_string(),
        "/sdcard/Download".to_string(),
        "/storage/sdcard0/Download".to_string(),
        "/mnt/sdcard/Download".to_string(),
    ]
}

const MAX_TIMEOUT_SECS: u64 = 120;
const MAX_MIN_SENTENCE_CHARS: usize = 500;

impl Config {
    /// Load the configuration at `path`, writing a default one first if it doesn't exist
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if FileManager::file_exists(path) {
            let content = FileManager::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        FileManager::write_to_file(path, &config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        language_utils::validate_language_code(&self.source_language)
            .context("Invalid source language")?;
        language_utils::validate_language_code(&self.target_language)
            .context("Invalid target language")?;

        let endpoint = Url::parse(&self.translation.endpoint)
            .with_context(|| format!("Invalid translation endpoint: {}", self.translation.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(anyhow!("Translation endpoint must be http or https: {}", endpoint));
        }

        if self.translation.timeout_secs == 0 || self.translation.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(anyhow!(
                "Translation timeout must be between 1 and {} seconds, got {}",
                MAX_TIMEOUT_SECS,
                self.translation.timeout_secs
            ));
        }

        if self.segmentation.min_sentence_chars > MAX_MIN_SENTENCE_CHARS {
            return Err(anyhow!(
                "Minimum sentence length must be at most {} characters, got {}",
                MAX_MIN_SENTENCE_CHARS,
                self.segmentation.min_sentence_chars
            ));
        }

        let presentation = &self.presentation;
        if presentation.buffer_cap == 0 {
            return Err(anyhow!("Reveal buffer cap must be greater than zero"));
        }
        if presentation.buffer_retain == 0 || presentation.buffer_retain >= presentation.buffer_cap {
            return Err(anyhow!(
                "Reveal buffer retain ({}) must be between 1 and the cap ({})",
                presentation.buffer_retain,
                presentation.buffer_cap
            ));
        }

        if self.terminology.iter().any(|entry| entry.wrong.is_empty()) {
            return Err(anyhow!("Terminology entries must have a non-empty 'wrong' fragment"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "en".to_string(),
            target_language: "ko".to_string(),
            translation: TranslationConfig::default(),
            segmentation: SegmentationConfig::default(),
            presentation: PresentationConfig::default(),
            download_dirs: default_download_dirs(),
            terminology: TerminologyMap::medical_defaults(),
            log_level: LogLevel::default(),
        }
    }
}
