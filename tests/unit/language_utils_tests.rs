/*!
 * Tests for ISO language code utilities
 */

use medtrans::language_utils::{
    LanguageCodeType, get_language_name, normalize_to_part2t, to_request_code, validate_language_code,
};

#[test]
fn test_validate_language_code_withKnownCodes_shouldDetectType() {
    assert_eq!(validate_language_code("ko").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("kor").unwrap(), LanguageCodeType::Part2T);
    assert_eq!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B);
    assert_eq!(validate_language_code(" EN ").unwrap(), LanguageCodeType::Part1);
}

#[test]
fn test_validate_language_code_withUnknownCodes_shouldFail() {
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("english").is_err());
    assert!(validate_language_code("").is_err());
}

#[test]
fn test_normalize_to_part2t_shouldMapAllForms() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("kor").unwrap(), "kor");
    assert_eq!(normalize_to_part2t("fre").unwrap(), "fra");
}

#[test]
fn test_to_request_code_shouldPreferTwoLetterForm() {
    assert_eq!(to_request_code("eng").unwrap(), "en");
    assert_eq!(to_request_code("KO").unwrap(), "ko");
    assert_eq!(to_request_code("ger").unwrap(), "de");
}

#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("ko").unwrap(), "Korean");
    assert_eq!(get_language_name("eng").unwrap(), "English");
}
