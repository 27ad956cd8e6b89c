/*!
 * Tests for application configuration
 */

use anyhow::Result;
use medtrans::app_config::{Config, LogLevel};
use medtrans::translation::TerminologyMap;
use crate::common;

#[test]
fn test_default_config_shouldTranslateEnglishToKorean() {
    let config = Config::default();
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "ko");
    assert_eq!(config.translation.endpoint, "https://translate.googleapis.com/translate_a/single");
    assert_eq!(config.translation.client, "gtx");
    assert_eq!(config.translation.output_type, "t");
    assert_eq!(config.translation.timeout_secs, 10);
    assert_eq!(config.segmentation.min_sentence_chars, 3);
    assert_eq!(config.presentation.buffer_cap, 5000);
    assert_eq!(config.presentation.buffer_retain, 4500);
    assert_eq!(config.terminology, TerminologyMap::medical_defaults());
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefault() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("medtrans.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config, Config::default());
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_load_or_create_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "medtrans.json",
        r#"{
            "source_language": "en",
            "target_language": "ja",
            "translation": { "timeout_secs": 30 },
            "terminology": [ { "wrong": "逮捕", "right": "停止" } ],
            "log_level": "debug"
        }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.target_language, "ja");
    assert_eq!(config.translation.timeout_secs, 30);
    assert_eq!(config.translation.client, "gtx");
    assert_eq!(config.terminology.len(), 1);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.download_dirs.len(), 4);
    Ok(())
}

#[test]
fn test_load_or_create_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "medtrans.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

#[test]
fn test_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "zz".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withThreeLetterCodes_shouldPass() {
    let mut config = Config::default();
    config.source_language = "eng".to_string();
    config.target_language = "kor".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = Config::default();
    config.translation.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    config.translation.endpoint = "ftp://example.com/translate".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withTimeoutOutOfBounds_shouldFail() {
    let mut config = Config::default();
    config.translation.timeout_secs = 0;
    assert!(config.validate().is_err());

    config.translation.timeout_secs = 121;
    assert!(config.validate().is_err());

    config.translation.timeout_secs = 120;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withRetainNotBelowCap_shouldFail() {
    let mut config = Config::default();
    config.presentation.buffer_retain = config.presentation.buffer_cap;
    assert!(config.validate().is_err());

    config.presentation.buffer_cap = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withHugeThreshold_shouldFail() {
    let mut config = Config::default();
    config.segmentation.min_sentence_chars = 10_000;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyTerminologyKey_shouldFail() {
    let mut config = Config::default();
    config.terminology.insert("", "anything");
    assert!(config.validate().is_err());
}

#[test]
fn test_instant_presentation_shouldKeepBuffers() {
    let config = Config::default();
    let instant = config.presentation.instant();
    assert_eq!(instant.source_char_delay_ms, 0);
    assert_eq!(instant.translation_char_delay_ms, 0);
    assert_eq!(instant.buffer_cap, config.presentation.buffer_cap);
}

#[test]
fn test_logLevel_shouldMapToLevelFilter() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
}

#[test]
fn test_load_or_create_withMissingParentDir_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("settings").join("medtrans.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.is_file());
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_validate_withBibliographicCode_shouldPass() {
    let mut config = Config::default();
    config.target_language = "ger".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withWordInsteadOfCode_shouldNameLanguageSide() {
    let mut config = Config::default();
    config.source_language = "english".to_string();
    let error = config.validate().unwrap_err();
    assert!(format!("{:#}", error).contains("source language"));
}
