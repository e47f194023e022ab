use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitae_core::DocumentKind;

#[derive(Parser)]
#[command(name = "vitae")]
#[command(version)]
#[command(about = "Search over personal-site content")]
pub struct Cli {
    /// Content file (JSON with projects, experiences, certifications, volunteer)
    #[arg(short, long, global = true, default_value = "content.json")]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked full-text search
    Search {
        query: String,

        /// Restrict to one kind: project, experience, certificate, volunteer
        #[arg(short = 't', long = "type")]
        kind: Option<DocumentKind>,

        /// Max results (1-50, default 10)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Autocomplete skill labels and names
    Suggest { prefix: String },

    /// Regenerate the token field of every record in the content file
    Tokens,

    /// Show index statistics
    Stats,

    /// Print version information
    Version,
}
