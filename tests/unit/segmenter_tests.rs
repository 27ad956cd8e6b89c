/*!
 * Tests for sentence segmentation
 */

use medtrans::translation::Segmenter;
use medtrans::translation::segmenter::segment;

#[test]
fn test_segment_withNoneOrBlank_shouldReturnNothing() {
    let segmenter = Segmenter::default();
    assert!(segmenter.segment(None).is_empty());
    assert!(segmenter.segment(Some("")).is_empty());
    assert!(segmenter.segment(Some(" \n\r ")).is_empty());
}

#[test]
fn test_segment_withQualifyingPieces_shouldReturnOnePerDelimiterPlusTail() {
    // three ". " delimiters, each followed by at least four characters
    let text = "First sentence. Second one here. Third piece. Tail part";
    let sentences = segment(text, 3);

    assert_eq!(sentences.len(), 4);
    for sentence in &sentences {
        assert_eq!(sentence, sentence.trim());
        assert!(sentence.chars().count() > 3);
    }
}

#[test]
fn test_segment_withShortTail_shouldDropTail() {
    let sentences = segment("Blood pressure stable. Ok.", 3);
    assert_eq!(sentences, vec!["Blood pressure stable".to_string()]);
}

#[test]
fn test_segment_withLineBreaks_shouldJoinLines() {
    let sentences = segment("Patient was\r\nadmitted. Culture\ngrew", 3);
    assert_eq!(
        sentences,
        vec!["Patient was  admitted".to_string(), "Culture grew".to_string()]
    );
}

#[test]
fn test_segment_withAbbreviation_shouldSplitOnDelimiter() {
    // "Dr. Smith" is split; only the qualifying pieces survive
    let sentences = segment("Seen by Dr. Smith today", 3);
    assert_eq!(sentences, vec!["Seen by Dr".to_string(), "Smith today".to_string()]);
}

#[test]
fn test_segment_withHigherThreshold_shouldKeepLongerPieces() {
    let segmenter = Segmenter::new(10);
    let sentences = segmenter.segment(Some("Short one. A considerably longer sentence"));
    assert_eq!(sentences, vec!["A considerably longer sentence".to_string()]);
    assert_eq!(segmenter.min_chars(), 10);
}

#[test]
fn test_segment_withKoreanText_shouldCountCharactersNotBytes() {
    // four Hangul characters are twelve bytes but only four characters
    let sentences = segment("심장정지. 배양", 3);
    assert_eq!(sentences, vec!["심장정지".to_string()]);
}
