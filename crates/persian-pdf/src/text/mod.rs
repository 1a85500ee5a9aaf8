//! Text transforms applied to extracted content.

pub mod rtl;

pub use rtl::{is_rtl_char, reverse_rtl_runs, reverse_words_in_lines};
