use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docrank",
    about = "Search a generated help-documentation index from the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a search against a generated JSON index
    Search {
        /// Path to the index file
        #[arg(short, long)]
        index: String,

        /// Query phrase; supports `*` and `?` wildcards
        query: String,

        /// 1-based result page
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Results per page
        #[arg(long)]
        per_page: Option<usize>,

        /// Restrict results to one category id
        #[arg(long)]
        category: Option<usize>,

        /// Require every term to match
        #[arg(long)]
        all: bool,

        /// Match terms as substrings of keywords
        #[arg(long)]
        substring: bool,
    },

    /// Print index statistics and check referential integrity
    Inspect {
        /// Path to the index file
        #[arg(short, long)]
        index: String,
    },
}
