//! Command handlers.
//!
//! Each handler performs its mutation (which persists immediately), then
//! writes its result through the [`Console`].

pub mod export;
pub mod filters;
pub mod items;
pub mod reset;
pub mod theme;

use crate::cli::Command;
use crate::console::Console;
use crate::state::AppState;
use anyhow::Result;
use shoplist_storage::KeyValueStore;
use std::io::{BufRead, Write};

/// Run one parsed command against `state`.
pub fn execute<S, R, W>(
    state: &mut AppState<S>,
    command: Command,
    console: &mut Console<R, W>,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Add { name, category } => items::add(state, console, &name, &category),
        Command::List {
            search,
            counts,
            json,
        } => items::list(state, console, search.as_deref().unwrap_or(""), counts, json),
        Command::Categories => filters::categories(state, console),
        Command::Filter { action } => filters::filter(state, console, action),
        Command::Edit { id, name, category } => {
            items::edit(state, console, &id, name.as_deref(), category.as_deref())
        }
        Command::Remove { id, yes } => items::remove(state, console, &id, yes),
        Command::Theme { action } => theme::theme(state, console, action),
        Command::Export { output, search } => export::export(
            state,
            console,
            output.as_deref(),
            search.as_deref().unwrap_or(""),
        ),
        Command::Reset { yes } => reset::reset(state, console, yes),
    }
}
