//! Theme preference commands.

use crate::cli::ThemeAction;
use crate::console::Console;
use crate::state::AppState;
use anyhow::{Context, Result};
use shoplist_core::ThemePreference;
use shoplist_storage::KeyValueStore;
use std::io::{BufRead, Write};

/// Show, toggle or set the theme, then print the mode now in effect.
pub fn theme<S, R, W>(
    state: &mut AppState<S>,
    console: &mut Console<R, W>,
    action: ThemeAction,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            state.theme.toggle().context("failed to save theme")?;
        }
        ThemeAction::Light => state
            .theme
            .set(ThemePreference::Light)
            .context("failed to save theme")?,
        ThemeAction::Dark => state
            .theme
            .set(ThemePreference::Dark)
            .context("failed to save theme")?,
    }

    let render = console.renderer(state.theme.palette());
    writeln!(console.output, "{}", render.accent(state.theme.current().as_str()))?;
    Ok(())
}
