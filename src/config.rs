use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "medicine-recommender",
    about = "Symptom-based medicine recommendations over a TF-IDF index"
)]
pub struct Config {
    /// Medicine catalog CSV
    #[arg(long, env = "RECOMMENDER_CATALOG", default_value = "Medicine_Details.csv")]
    pub catalog: PathBuf,

    /// Newline-separated stop-word list replacing the built-in English list
    #[arg(long, env = "RECOMMENDER_STOP_WORDS")]
    pub stop_words: Option<PathBuf>,

    /// Address the HTTP server listens on
    #[arg(long, env = "RECOMMENDER_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Print recommendations for these symptoms and exit instead of serving
    #[arg(long)]
    pub query: Option<String>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
