//! Clearing all stored data.

use crate::console::Console;
use crate::state::AppState;
use anyhow::{Context, Result};
use shoplist_storage::KeyValueStore;
use std::io::{BufRead, Write};

const PROMPT: &str = "Delete all items, filters and the theme preference? This action cannot be undone.";

/// Delete every persisted item, filter and theme preference after
/// confirmation, unless `yes` is set.
pub fn reset<S, R, W>(state: &mut AppState<S>, console: &mut Console<R, W>, yes: bool) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    let render = console.renderer(state.theme.palette());
    if !yes && !console.confirm(&render.danger(PROMPT))? {
        writeln!(console.output, "Cancelled.")?;
        return Ok(());
    }

    state.reset().context("failed to clear storage")?;
    writeln!(console.output, "Cleared.")?;
    Ok(())
}
