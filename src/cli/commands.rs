use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(version, about = "A local-first markdown note keeper")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notebook in the current directory
    Init,

    /// Add a new note
    Add {
        /// Note title
        title: String,

        /// Markdown body
        #[arg(long, short = 'c')]
        content: Option<String>,

        /// Comma-separated tags, e.g. "shop, home"
        #[arg(long, short = 't')]
        tags: Option<String>,

        /// Card color (indigo, emerald, rose, amber, sky, violet)
        #[arg(long)]
        color: Option<String>,

        /// Category name (defaults to General)
        #[arg(long)]
        category: Option<String>,

        /// Read the body from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes in display order (pinned first)
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note by id or unique id prefix
    Get {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of an existing note
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, short = 'c')]
        content: Option<String>,

        /// Comma-separated tags; replaces the existing list
        #[arg(long, short = 't')]
        tags: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle a note's pinned flag
    Pin { id: String },

    /// Delete a note
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Move a note in front of another note within the current view
    Move {
        /// Note to move
        id: String,

        /// Note whose position it takes
        target: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Write all notes to a JSON file (stdout if no file given)
    Export { file: Option<PathBuf> },

    /// Replace all notes with the contents of a JSON export file
    Import { file: PathBuf },

    /// Manage categories
    Category(CategoryCommand),

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

/// Filter flags shared by `list` and `move`.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Text filter matched against title, content, and tags
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only this category ("All" for everything)
    #[arg(long)]
    pub category: Option<String>,

    /// Only notes created on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only notes created on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args, Debug)]
pub struct CategoryCommand {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// Add a new category
    Add { name: String },

    /// List categories with note counts
    List,
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Set the theme (light, dark, system)
    Set { theme: String },

    /// Cycle system -> dark -> light
    Cycle,
}
