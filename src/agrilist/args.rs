use agrilist::model::Collection;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agrilist")]
#[command(about = "Browse and filter agricultural schemes and knowledge articles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the cached listing payloads
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List agricultural schemes
    #[command(alias = "s")]
    Schemes {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List knowledge-base articles
    #[command(alias = "a")]
    Articles {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the distinct tags available as filter options
    Tags {
        /// Collection to inspect (schemes or articles)
        collection: Collection,
    },

    /// Show the distinct categories/providers available as filter options
    Categories {
        /// Collection to inspect (schemes or articles)
        collection: Collection,
    },

    /// Show configuration
    Config,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search over title and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by category/provider label (repeatable)
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Filter by tag (repeatable, lenient substring match)
    #[arg(short, long)]
    pub tag: Vec<String>,
}
