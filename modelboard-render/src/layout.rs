//! Display-width aware padding and block composition.

use unicode_width::UnicodeWidthStr;

/// Right-pad `s` with spaces to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// Left-pad `s` with spaces to `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{s}", " ".repeat(width - w))
    }
}

/// Widest line of a block, in display columns.
pub fn block_width(block: &[String]) -> usize {
    block
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0)
}

/// Place blocks side by side, separated by `gap` spaces. Shorter blocks are
/// padded with blank lines.
pub fn hstack(blocks: &[Vec<String>], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks.iter().map(|b| block_width(b)).collect();
    let sep = " ".repeat(gap);
    (0..height)
        .map(|row| {
            let line = blocks
                .iter()
                .zip(&widths)
                .map(|(block, &w)| pad_right(block.get(row).map(String::as_str).unwrap_or(""), w))
                .collect::<Vec<_>>()
                .join(&sep);
            line.trim_end().to_string()
        })
        .collect()
}
