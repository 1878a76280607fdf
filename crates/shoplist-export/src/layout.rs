//! Page geometry and row pagination.
//!
//! All measurements are PDF points measured from the top edge of the page;
//! the renderer flips them to PDF's bottom-left origin.

use std::ops::Range;

/// Ellipsis appended to cell text that had to be cut.
const ELLIPSIS: &str = "...";

/// Geometry of an exported page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Left, right and bottom margin
    pub margin: f32,
    /// Distance from the top edge to the title baseline
    pub title_baseline: f32,
    /// Title font size
    pub title_size: f32,
    /// Distance from the top edge to the table on the first page
    pub table_top: f32,
    /// Cell font size
    pub font_size: f32,
    /// Height of the header row and of each body row
    pub row_height: f32,
    /// Horizontal padding inside a cell
    pub cell_padding: f32,
}

impl Default for PageLayout {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 40.0,
            title_baseline: 45.0,
            title_size: 16.0,
            table_top: 57.0,
            font_size: 10.0,
            row_height: 20.0,
            cell_padding: 5.0,
        }
    }
}

impl PageLayout {
    /// Width of each of the two table columns.
    #[must_use]
    pub fn column_width(&self) -> f32 {
        (self.width - 2.0 * self.margin) / 2.0
    }

    /// Distance from the top edge to the table on `page` (zero-based).
    ///
    /// Only the first page carries the title.
    #[must_use]
    pub fn table_top_on(&self, page: usize) -> f32 {
        if page == 0 {
            self.table_top
        } else {
            self.margin
        }
    }

    /// Number of body rows that fit below the header on `page`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rows_on(&self, page: usize) -> usize {
        let available = self.height - self.margin - self.table_top_on(page) - self.row_height;
        ((available / self.row_height).floor().max(1.0)) as usize
    }

    /// Split `row_count` rows into per-page ranges.
    ///
    /// An empty table still yields one page so the title and header print.
    #[must_use]
    pub fn paginate(&self, row_count: usize) -> Vec<Range<usize>> {
        let mut pages = Vec::new();
        let mut start = 0;
        loop {
            let end = row_count.min(start + self.rows_on(pages.len()));
            pages.push(start..end);
            if end >= row_count {
                return pages;
            }
            start = end;
        }
    }

    /// Cut `text` so it fits a cell at the body font size.
    #[must_use]
    pub fn fit_cell(&self, text: &str) -> String {
        let max_width = self.column_width() - 2.0 * self.cell_padding;
        fit_width(text, max_width, self.font_size)
    }
}

/// Approximate Helvetica advance width of `c`, in ems.
fn char_width(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.25,
        ' ' | 'f' | 't' | 'r' | 'I' | '(' | ')' | '-' => 0.33,
        'm' | 'w' | 'M' | 'W' | '@' => 0.86,
        c if c.is_uppercase() => 0.70,
        _ => 0.56,
    }
}

/// Estimated rendered width of `text` at `font_size`.
fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_width).sum::<f32>() * font_size
}

/// Cut `text` to `max_width`, marking the cut with an ellipsis.
fn fit_width(text: &str, max_width: f32, font_size: f32) -> String {
    if text_width(text, font_size) <= max_width {
        return text.to_string();
    }

    let budget = max_width - text_width(ELLIPSIS, font_size);
    let mut used = 0.0;
    let mut out = String::new();
    for c in text.chars() {
        used += char_width(c) * font_size;
        if used > budget {
            break;
        }
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}
