//! PDF export of the displayed list.

use crate::console::Console;
use crate::state::AppState;
use anyhow::{Context, Result};
use shoplist_export::{ExportOptions, PdfExporter};
use shoplist_storage::KeyValueStore;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Write the currently displayed list to a PDF.
pub fn export<S, R, W>(
    state: &AppState<S>,
    console: &mut Console<R, W>,
    output: Option<&Path>,
    search: &str,
) -> Result<()>
where
    S: KeyValueStore + Clone,
    R: BufRead,
    W: Write,
{
    let path = output.map_or_else(|| PathBuf::from(&state.config.export.file_name), Path::to_path_buf);
    let view = state.view(search);

    PdfExporter::new(ExportOptions::from(&state.config.export))
        .write_to(&path, &view)
        .with_context(|| format!("failed to export to {}", path.display()))?;

    let render = console.renderer(state.theme.palette());
    writeln!(
        console.output,
        "Exported {} item{} to {}",
        view.len(),
        if view.len() == 1 { "" } else { "s" },
        render.accent(&path.display().to_string()),
    )?;
    Ok(())
}
