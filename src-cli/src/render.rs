//! Terminal rendering of list rows in the active theme.

use shoplist_list::{CategoryCount, FilterSet, ShoppingItem};
use shoplist_theme::{Palette, Rgb};
use std::io::{self, Write};

/// Number of id characters shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// Writes themed text; plain when `color` is off (pipes, tests).
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
    color: bool,
}

impl Renderer {
    pub fn new(palette: Palette, color: bool) -> Self {
        Self { palette, color }
    }

    fn paint(&self, text: &str, color: Rgb) -> String {
        if self.color {
            format!("\x1b[38;2;{};{};{}m{text}\x1b[0m", color.0, color.1, color.2)
        } else {
            text.to_string()
        }
    }

    pub fn primary(&self, text: &str) -> String {
        self.paint(text, self.palette.text_primary)
    }

    pub fn secondary(&self, text: &str) -> String {
        self.paint(text, self.palette.text_secondary)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.palette.accent)
    }

    pub fn danger(&self, text: &str) -> String {
        self.paint(text, self.palette.danger)
    }

    /// One row per item: short id, name, category.
    pub fn items(&self, out: &mut impl Write, items: &[&ShoppingItem]) -> io::Result<()> {
        if items.is_empty() {
            return writeln!(out, "{}", self.secondary("No items to show."));
        }

        let name_width = items
            .iter()
            .map(|item| item.name().chars().count())
            .max()
            .unwrap_or(0);

        for item in items {
            let padding = name_width - item.name().chars().count();
            writeln!(
                out,
                "{}  {}{}  {}",
                self.secondary(short_id(item.id().as_str())),
                self.primary(item.name()),
                " ".repeat(padding),
                self.accent(item.category()),
            )?;
        }
        Ok(())
    }

    /// Category options with counts; selected ones are checked.
    ///
    /// Selected categories with no remaining items are still listed so they
    /// can be deselected.
    pub fn categories(
        &self,
        out: &mut impl Write,
        counts: &[CategoryCount],
        filters: &FilterSet,
    ) -> io::Result<()> {
        let stale = filters
            .iter()
            .filter(|selected| !counts.iter().any(|c| c.category == *selected));

        if counts.is_empty() && filters.is_empty() {
            return writeln!(out, "{}", self.secondary("No categories yet."));
        }

        for count in counts {
            self.category_line(out, &count.category, count.count, filters.contains(&count.category))?;
        }
        for category in stale {
            self.category_line(out, category, 0, true)?;
        }
        Ok(())
    }

    fn category_line(
        &self,
        out: &mut impl Write,
        category: &str,
        count: usize,
        checked: bool,
    ) -> io::Result<()> {
        let mark = if checked { "[x]" } else { "[ ]" };
        writeln!(
            out,
            "{} {} {}",
            self.accent(mark),
            self.primary(category),
            self.secondary(&format!("({count})")),
        )
    }
}

/// Leading characters of an id, enough to pass back as a prefix.
pub fn short_id(id: &str) -> &str {
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(end, _)| &id[..end])
}
