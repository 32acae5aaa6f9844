use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells,
/// appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the next grapheme boundary after `offset`.
/// Clamps to `s.len()` at the end of the string.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> usize {
    s[offset..]
        .graphemes(true)
        .next()
        .map_or(s.len(), |g| offset + g.len())
}

/// Byte offset of the previous grapheme boundary before `offset`.
/// Clamps to 0 at the start of the string.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> usize {
    s[..offset]
        .grapheme_indices(true)
        .last()
        .map_or(0, |(i, _)| i)
}

/// Word boundary to the left of `offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..offset].grapheme_indices(true).collect();
    let mut i = graphemes.len();
    while i > 0 && is_blank(graphemes[i - 1].1) {
        i -= 1;
    }
    while i > 0 && !is_blank(graphemes[i - 1].1) {
        i -= 1;
    }
    graphemes.get(i).map_or(0, |&(b, _)| b)
}

/// Word boundary to the right of `offset` (whitespace-delimited).
pub fn word_boundary_right(s: &str, offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[offset..].grapheme_indices(true).collect();
    let mut i = 0;
    while i < graphemes.len() && !is_blank(graphemes[i].1) {
        i += 1;
    }
    while i < graphemes.len() && is_blank(graphemes[i].1) {
        i += 1;
    }
    graphemes.get(i).map_or(s.len(), |&(b, _)| offset + b)
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}
