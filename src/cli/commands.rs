use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wirecut",
    version,
    about = "Slice newswire batch exports into structured document records",
    after_help = "Records are printed to stdout as a JSON array; warnings about \
                  skipped metadata values go to stderr. Use `wirecut fields` to \
                  inspect which patterns are active for a given config."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Segment a batch export file into document records.
    ///
    /// Documents are cut at "Document N of M" marker lines (German
    /// "Dokument N von M" works too). Metadata lines are matched against
    /// the field mapping; unmatched header lines become the headline or are
    /// dropped, and everything after two blank header lines is body text.
    Parse {
        /// Path to the export file
        file: String,
        /// Field mapping TOML file (default: built-in mapping)
        #[arg(short, long)]
        config: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the active field mapping (token and compiled pattern)
    Fields {
        /// Field mapping TOML file (default: built-in mapping)
        #[arg(short, long)]
        config: Option<String>,
    },
}
