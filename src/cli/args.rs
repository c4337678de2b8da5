//! Command line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Movie Catalog - Browse and edit your movie catalog
#[derive(Parser, Debug)]
#[command(name = "movie-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Admin token (default: MOVIE_CATALOG_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for listings and details.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the local catalog
    List,

    /// Search the external movie database
    Search {
        /// Title to search for
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Show details of a movie
    Show {
        /// Movie ID
        #[arg(value_name = "ID")]
        id: String,

        /// Look the ID up in the external movie database
        #[arg(long)]
        external: bool,
    },

    /// Add a new movie
    New {
        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Edit an existing movie
    Edit {
        /// Movie ID
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Delete a movie
    Delete {
        /// Movie ID
        #[arg(value_name = "ID")]
        id: String,

        /// Confirm deletion
        #[arg(long)]
        confirm: bool,
    },
}

impl Commands {
    /// Whether the command modifies the catalog and needs an admin token.
    pub fn is_mutating(&self) -> bool {
        match self {
            Commands::New { draft } | Commands::Edit { draft, .. } => !draft.dry_run,
            Commands::Delete { .. } => true,
            _ => false,
        }
    }
}

/// Field values and lookup options for `new` and `edit`.
#[derive(Args, Debug, Default)]
pub struct DraftArgs {
    /// Look up the external movie database and adopt a result
    #[arg(long, value_name = "QUERY")]
    pub lookup: Option<String>,

    /// Which lookup result to adopt (1-based)
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub pick: usize,

    /// Title
    #[arg(long)]
    pub title: Option<String>,

    /// Genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Release year (empty to clear)
    #[arg(long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Poster URL
    #[arg(long, value_name = "URL")]
    pub poster: Option<String>,

    /// Synopsis
    #[arg(long)]
    pub synopsis: Option<String>,

    /// Director
    #[arg(long)]
    pub director: Option<String>,

    /// Trailer YouTube ID or URL
    #[arg(long, value_name = "ID_OR_URL")]
    pub trailer: Option<String>,

    /// Print the resulting draft without saving
    #[arg(long)]
    pub dry_run: bool,
}
