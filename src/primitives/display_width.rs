//! Display width helpers
//!
//! Terminal cells, not bytes, are the unit of every measurement here. CJK and
//! emoji occupy two cells, combining marks occupy none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of a string in terminal cells.
#[inline]
pub fn str_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Width of a single char in terminal cells. Control characters count as zero.
#[inline]
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Longest prefix of `text` that fits in `width` cells.
pub fn take_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Longest suffix of `text` that fits in `width` cells.
///
/// Used for edit buffers, where the caret sits at the end and the most
/// recently typed text must stay on screen.
pub fn tail_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Shorten `text` to at most `width` cells.
///
/// Text that already fits is returned unchanged. Widths of 3 or less get a
/// hard cut with no ellipsis; anything wider keeps `width - 3` cells of text
/// followed by `...`.
pub fn truncate_with_ellipsis(text: &str, width: usize) -> String {
    if str_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return take_width(text, width);
    }
    let mut out = take_width(text, width - 3);
    out.push_str("...");
    out
}

/// Truncate with ellipsis, then right-pad with spaces to exactly `width` cells.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_with_ellipsis(text, width);
    let used = str_width(&out);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Right-align `text` within `width` cells, truncating first if needed.
pub fn pad_left_to_width(text: &str, width: usize) -> String {
    let body = truncate_with_ellipsis(text, width);
    let used = str_width(&body);
    let mut out: String = std::iter::repeat(' ')
        .take(width.saturating_sub(used))
        .collect();
    out.push_str(&body);
    out
}
