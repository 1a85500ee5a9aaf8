//! Right-to-left text repair.
//!
//! Naive PDF text extraction stores Persian and Arabic glyphs in visual order,
//! so every run of right-to-left characters comes out backwards and each line
//! reads from its last word to its first. The two transforms here undo that:
//!
//! - [`reverse_rtl_runs`] reverses each maximal run of U+0600..=U+06FF in place.
//! - [`reverse_words_in_lines`] reverses the order of space-separated words
//!   within every line, keeping the lines themselves in order.
//!
//! Both are pure and total over any `&str`.

/// First code point of the Arabic block (Persian and Arabic letters, digits, marks).
pub const RTL_BLOCK_START: char = '\u{0600}';
/// Last code point of the Arabic block.
pub const RTL_BLOCK_END: char = '\u{06FF}';

/// Whether `c` belongs to the right-to-left block this crate repairs.
#[inline]
pub fn is_rtl_char(c: char) -> bool {
    (RTL_BLOCK_START..=RTL_BLOCK_END).contains(&c)
}

/// Reverse every maximal run of right-to-left characters in `input`.
///
/// Characters outside U+0600..=U+06FF are copied through at their original
/// position; reversal never crosses a run boundary.
///
/// ```rust
/// use persian_pdf::text::reverse_rtl_runs;
///
/// assert_eq!(reverse_rtl_runs("مالس"), "سلام");
/// assert_eq!(reverse_rtl_runs("PDF مالس 2024"), "PDF سلام 2024");
/// ```
pub fn reverse_rtl_runs(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut run: Vec<char> = Vec::new();

    for c in input.chars() {
        if is_rtl_char(c) {
            run.push(c);
            continue;
        }

        if !run.is_empty() {
            output.extend(run.drain(..).rev());
        }
        output.push(c);
    }

    output.extend(run.drain(..).rev());
    output
}

/// Reverse the word order of each line of `input`.
///
/// Lines are split on `'\n'` and words on a single `' '`, so consecutive
/// spaces yield empty words that survive the reversal. Trailing empty
/// segments are dropped, both for lines and for words. Every emitted line,
/// including the last, is terminated with `'\n'`.
///
/// ```rust
/// use persian_pdf::text::reverse_words_in_lines;
///
/// assert_eq!(reverse_words_in_lines("x y\nz"), "y x\nz\n");
/// assert_eq!(reverse_words_in_lines(""), "\n");
/// ```
pub fn reverse_words_in_lines(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + 1);

    for line in split_trimming_trailing_empty(input, '\n') {
        let mut words = split_trimming_trailing_empty(line, ' ');
        words.reverse();
        output.push_str(&words.join(" "));
        output.push('\n');
    }

    output
}

/// Split `input` on `separator`, discarding trailing empty segments.
///
/// An empty `input` yields a single empty segment; a non-empty input made up
/// only of separators yields none.
fn split_trimming_trailing_empty(input: &str, separator: char) -> Vec<&str> {
    if input.is_empty() {
        return vec![input];
    }

    let mut segments: Vec<&str> = input.split(separator).collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
}
