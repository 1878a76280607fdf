//! Command-line surface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shoplist", version)]
#[command(about = "Keep a categorized shopping list", long_about = None)]
pub struct Cli {
    /// Directory holding the persisted list (overrides config and SHOPLIST_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (default: platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add an item to the list
    Add {
        /// Item name
        name: String,
        /// Category the item belongs to
        category: String,
    },

    /// Show the list with active filters applied
    List {
        /// Only show items whose name contains this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Also show item counts per category
        #[arg(long)]
        counts: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show categories with item counts and filter state
    Categories,

    /// Manage category filters
    Filter {
        #[command(subcommand)]
        action: FilterAction,
    },

    /// Change an item's name and/or category
    Edit {
        /// Item id or unique id prefix
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,
    },

    /// Remove an item
    Remove {
        /// Item id or unique id prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or change the display theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },

    /// Export the displayed list to a PDF file
    Export {
        /// Output path (default: `export.file_name` from config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Only export items whose name contains this text
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Delete all items, filters and the theme preference
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum FilterAction {
    /// Select or deselect a category
    Toggle {
        /// Category label (case-insensitive)
        category: String,
    },
    /// Deselect every category
    Clear,
    /// List selected categories
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Use the light theme
    Light,
    /// Use the dark theme
    Dark,
}
