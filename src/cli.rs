use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reelname")]
#[command(author, version, about = "Infer title, season and episode from media file names")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read three-digit tokens the legacy way (middle digit for both)
    #[arg(long, global = true)]
    pub legacy_compact: bool,

    /// Do not derive episode titles
    #[arg(long, global = true)]
    pub no_episode_titles: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse file names and print what was inferred
    Parse {
        /// File names to parse; read one per line from stdin if omitted
        names: Vec<String>,

        /// Output the debug dump as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical display name for each file name
    PlexName {
        /// File names to parse; read one per line from stdin if omitted
        names: Vec<String>,
    },
}
