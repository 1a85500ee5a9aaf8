//! End-to-end right-to-left correction tests.
//!
//! The parser and detector are replaced with fixed stand-ins so the
//! orchestration can be checked without depending on PDF glyph order or
//! detector heuristics.

mod helpers;

use helpers::{StaticDetector, StaticParser};
use persian_pdf::{ExtractionMode, TextExtractor, correct_rtl_text, reverse_rtl_runs, reverse_words_in_lines};
use std::io::Cursor;

fn extractor(text: &str, language: Option<&'static str>) -> TextExtractor {
    TextExtractor::new(
        Box::new(StaticParser(text.to_string())),
        Box::new(StaticDetector(language)),
    )
}

fn extract(extractor: &TextExtractor, mode: ExtractionMode) -> String {
    extractor
        .extract_text(&mut Cursor::new(b"ignored".to_vec()), mode)
        .unwrap()
}

#[test]
fn test_persian_word_in_visual_order_is_repaired() {
    let extractor = extractor("مالس", Some("fa"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "سلام\n");
}

#[test]
fn test_english_words_are_reordered_without_char_reversal() {
    let extractor = extractor("hello world", Some("en"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "world hello\n");
}

#[test]
fn test_normal_mode_returns_parser_output() {
    let extractor = extractor("مالس ایند", Some("fa"));
    assert_eq!(extract(&extractor, ExtractionMode::Normal), "مالس ایند");
}

#[test]
fn test_persian_sentence_in_visual_order() {
    // "سلام دنیا" as a naive extractor emits it: words reversed, letters reversed.
    let extractor = extractor("ایند مالس", Some("fa"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "سلام دنیا\n");
}

#[test]
fn test_multiline_persian_document() {
    let extractor = extractor("ایند مالس\nبوخ زور", Some("fa"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "سلام دنیا\nروز خوب\n");
}

#[test]
fn test_mixed_script_line_keeps_latin_intact() {
    let extractor = extractor("PDF لیاف", Some("fa"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "فایل PDF\n");
}

#[test]
fn test_arabic_is_treated_as_rtl() {
    let extractor = extractor("ابحرم", Some("ar"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "مرحبا\n");
}

#[test]
fn test_arabic_script_with_other_language_only_reorders_words() {
    let extractor = extractor("ابحرم ملاس", Some("ur"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "ملاس ابحرم\n");
}

#[test]
fn test_undetected_language_only_reorders_words() {
    let extractor = extractor("مالس ایند", None);
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "ایند مالس\n");
}

#[test]
fn test_empty_document_in_advanced_mode() {
    let extractor = extractor("", Some("fa"));
    assert_eq!(extract(&extractor, ExtractionMode::Advanced), "\n");
    assert_eq!(extract(&extractor, ExtractionMode::Normal), "");
}

#[test]
fn test_char_reversal_is_identity_without_rtl_text() {
    for input in ["", "hello world", "line one\nline two", "1234 !?"] {
        assert_eq!(reverse_rtl_runs(input), input);
    }
}

#[test]
fn test_char_reversal_of_pure_rtl_reads_backwards() {
    let input = "سلامدنیا";
    let expected: String = input.chars().rev().collect();
    assert_eq!(reverse_rtl_runs(input), expected);
}

#[test]
fn test_char_reversal_twice_restores_run() {
    let run = "کتابخانه";
    assert_eq!(reverse_rtl_runs(&reverse_rtl_runs(run)), run);
}

#[test]
fn test_word_reversal_examples() {
    assert_eq!(reverse_words_in_lines("a b c"), "c b a\n");
    assert_eq!(reverse_words_in_lines("x y\nz"), "y x\nz\n");
    assert_eq!(reverse_words_in_lines(""), "\n");
}

#[test]
fn test_word_reversal_twice_restores_odd_word_line() {
    let line = "one two three";
    let once = reverse_words_in_lines(line);
    let twice = reverse_words_in_lines(once.trim_end_matches('\n'));
    assert_eq!(twice, format!("{}\n", line));
}

#[test]
fn test_correct_rtl_text_matches_pipeline() {
    let extractor = extractor("ایند مالس", Some("fa"));
    assert_eq!(
        extract(&extractor, ExtractionMode::Advanced),
        correct_rtl_text("ایند مالس", Some("fa"))
    );
}
