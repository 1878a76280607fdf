//! Item commands: add, list, edit and remove.

use crate::console::Console;
use crate::render::short_id;
use crate::state::AppState;
use anyhow::{Context, Result};
use serde::Serialize;
use shoplist_core::{require_non_blank, ShoplistError};
use shoplist_list::{CategoryCount, ShoppingItem};
use shoplist_storage::KeyValueStore;
use std::io::{BufRead, Write};

#[derive(Serialize)]
struct ListOutput<'a> {
    items: Vec<&'a ShoppingItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<Vec<CategoryCount>>,
}

/// Add an item after rejecting blank fields.
pub fn add<S, R, W>(
    state: &mut AppState<S>,
    console: &mut Console<R, W>,
    name: &str,
    category: &str,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    require_non_blank("name", name)?;
    require_non_blank("category", category)?;

    let id = state.items.add(name, category).context("failed to save item")?;
    let item = state
        .items
        .get(&id)
        .ok_or_else(|| ShoplistError::NotFound(id.to_string()))?;

    let render = console.renderer(state.theme.palette());
    writeln!(
        console.output,
        "Added {} {} {}",
        render.primary(item.name()),
        render.accent(item.category()),
        render.secondary(&format!("[{}]", short_id(id.as_str()))),
    )?;
    Ok(())
}

/// Print the derived list, optionally with per-category counts.
pub fn list<S, R, W>(
    state: &AppState<S>,
    console: &mut Console<R, W>,
    search: &str,
    counts: bool,
    json: bool,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    let view = state.view(search);

    if json {
        let output = ListOutput {
            items: view,
            counts: counts.then(|| state.items.category_counts()),
        };
        serde_json::to_writer_pretty(&mut console.output, &output)?;
        writeln!(console.output)?;
        return Ok(());
    }

    let render = console.renderer(state.theme.palette());
    render.items(&mut console.output, &view)?;

    if counts {
        writeln!(console.output)?;
        for count in state.items.category_counts() {
            writeln!(
                console.output,
                "{} {}",
                render.accent(&count.category),
                render.secondary(&format!("({})", count.count)),
            )?;
        }
    }
    Ok(())
}

/// Change name and/or category; omitted fields keep their current value.
pub fn edit<S, R, W>(
    state: &mut AppState<S>,
    console: &mut Console<R, W>,
    id: &str,
    name: Option<&str>,
    category: Option<&str>,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    if name.is_none() && category.is_none() {
        return Err(
            ShoplistError::Validation("nothing to edit: pass --name or --category".to_string())
                .into(),
        );
    }
    if let Some(name) = name {
        require_non_blank("name", name)?;
    }
    if let Some(category) = category {
        require_non_blank("category", category)?;
    }

    let id = state.items.resolve(id)?;
    let current = state
        .items
        .get(&id)
        .ok_or_else(|| ShoplistError::NotFound(id.to_string()))?;
    let name = name.unwrap_or(current.name()).to_string();
    let category = category.unwrap_or(current.category()).to_string();

    state
        .items
        .edit(&id, &name, &category)
        .context("failed to save item")?;

    let item = state
        .items
        .get(&id)
        .ok_or_else(|| ShoplistError::NotFound(id.to_string()))?;
    let render = console.renderer(state.theme.palette());
    writeln!(
        console.output,
        "Updated {} {} {}",
        render.secondary(short_id(id.as_str())),
        render.primary(item.name()),
        render.accent(item.category()),
    )?;
    Ok(())
}

/// Remove an item, asking for confirmation unless `yes` is set.
pub fn remove<S, R, W>(
    state: &mut AppState<S>,
    console: &mut Console<R, W>,
    id: &str,
    yes: bool,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    let id = state.items.resolve(id)?;
    let request = state
        .items
        .request_removal(&id)
        .ok_or_else(|| ShoplistError::NotFound(id.to_string()))?;

    let render = console.renderer(state.theme.palette());
    if !yes && !console.confirm(&render.danger(&request.prompt()))? {
        writeln!(console.output, "Cancelled.")?;
        return Ok(());
    }

    let name = request.item().name().to_string();
    state
        .items
        .confirm_removal(request)
        .context("failed to save removal")?;
    writeln!(console.output, "Removed {}", render.primary(&name))?;
    Ok(())
}
