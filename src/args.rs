use std::path::PathBuf;

use clap::Parser;

/// Search endpoint queried when `--endpoint` is not given.
pub const DEFAULT_ENDPOINT: &str = "https://spb.hh.ru/search/vacancy";

/// Looks up vacancy counts for programming languages at spb.hh.ru and
/// prints a timestamped report, or appends it to a file.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "hh-monitor",
    author,
    version,
    about,
    long_about = "Looks up vacancy counts for programming languages at spb.hh.ru.\n\n\
                  With no FILE, write to standard output. If FILE is present, the report \
                  is appended to it followed by a blank line."
)]
pub struct Args {
    /// Append the report to FILE instead of writing it to standard output.
    #[clap(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Programming languages to search for. Everything from the first
    /// language on is taken as a language, flags included.
    #[clap(
        value_name = "LANGS",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present = "file"
    )]
    pub langs: Vec<String>,

    /// Give up on a single language after this many seconds.
    /// Without it a request may wait indefinitely.
    #[clap(short = 't', long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Vacancy search endpoint.
    #[clap(long, default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,

    /// Do not draw progress spinners.
    #[clap(short, long)]
    pub quiet: bool,

    /// Log debug output to stderr.
    #[clap(short, long)]
    pub verbose: bool,
}
