use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the first grammar
    pub first: PathBuf,

    /// File containing the second grammar
    pub second: PathBuf,

    /// Maximum derivation depth (default: 10)
    #[arg(short, long, value_name = "DEPTH")]
    pub depth: Option<usize>,

    /// Maximum generated string length (default: 20)
    #[arg(short, long, value_name = "LEN")]
    pub len: Option<usize>,

    /// Derive depth and length from the grammar sizes instead
    #[arg(short, long, conflicts_with_all = ["depth", "len"])]
    pub auto: bool,

    /// Start symbol of the first grammar (default: first rule head)
    #[arg(long, value_name = "SYMBOL")]
    pub start_first: Option<String>,

    /// Start symbol of the second grammar (default: first rule head)
    #[arg(long, value_name = "SYMBOL")]
    pub start_second: Option<String>,

    /// Do not search for a nonterminal mapping when the languages differ
    #[arg(long)]
    pub no_mapping: bool,

    /// Also print per-nonterminal structure statistics
    #[arg(short, long)]
    pub verbose: bool,
}
