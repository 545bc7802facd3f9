use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Truncate to fit within `max_cells` terminal cells, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = grapheme_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Display column of the byte offset `byte_offset` within `s`.
pub fn display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Suffix of `s` starting at the first grapheme that begins at or after column `cols`.
pub fn skip_cols(s: &str, cols: usize) -> &str {
    let mut col = 0;
    for (i, g) in s.grapheme_indices(true) {
        if col >= cols {
            return &s[i..];
        }
        col += grapheme_width(g);
    }
    ""
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}
