//! Category filter commands.

use crate::cli::FilterAction;
use crate::console::Console;
use crate::state::AppState;
use anyhow::{Context, Result};
use shoplist_core::{normalize, require_non_blank};
use shoplist_storage::KeyValueStore;
use std::io::{BufRead, Write};

/// Print filter options: every category with its count and checked state.
pub fn categories<S, R, W>(state: &AppState<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    let render = console.renderer(state.theme.palette());
    render.categories(
        &mut console.output,
        &state.items.category_counts(),
        state.filters.filters(),
    )?;
    Ok(())
}

/// Toggle, clear or print the selected category filters.
pub fn filter<S, R, W>(
    state: &mut AppState<S>,
    console: &mut Console<R, W>,
    action: FilterAction,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    let render = console.renderer(state.theme.palette());
    match action {
        FilterAction::Toggle { category } => {
            require_non_blank("category", &category)?;
            let selected = state
                .filters
                .toggle(&category)
                .context("failed to save filters")?;
            let verb = if selected { "Showing" } else { "No longer filtering by" };
            writeln!(
                console.output,
                "{verb} {}",
                render.accent(&normalize(&category))
            )?;
        }
        FilterAction::Clear => {
            state.filters.clear().context("failed to save filters")?;
            writeln!(console.output, "Showing all categories")?;
        }
        FilterAction::Show => {
            if state.filters.filters().is_empty() {
                writeln!(console.output, "{}", render.secondary("No filters (showing all)"))?;
            }
            for category in state.filters.filters().iter() {
                writeln!(console.output, "{}", render.accent(category))?;
            }
        }
    }
    Ok(())
}
