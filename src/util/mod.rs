//! Utility modules

pub mod text;

pub use text::{
    grapheme_after, grapheme_before, horizontal_space_around, is_shell_delimiter, line_end,
    line_start, snap_to_boundary, word_end_after, word_start_before, WordStyle, LINE_SEPARATOR,
};
