use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Lists every way down a mountain of rest stops that a hiker can survive.", long_about = None)]
pub struct Cli {
    /// Input file, one rest stop per line: label, supplies, then obstacles
    pub input: PathBuf,

    /// Suppress the verbose log and the mountain details file.
    #[clap(short, long)]
    pub quiet: bool,

    /// Where to write the verbose log.
    #[clap(long, default_value = "mountain.log")]
    pub log_file: PathBuf,

    /// Where to write the dump of the balanced mountain.
    #[clap(long, default_value = "mountain_details.log")]
    pub details_file: PathBuf,

    /// Food the hiker carries at the start.
    #[clap(long, default_value_t = 0)]
    pub food: u16,

    /// Axes the hiker carries at the start.
    #[clap(long, default_value_t = 0)]
    pub axes: u16,

    /// Rafts the hiker carries at the start.
    #[clap(long, default_value_t = 0)]
    pub rafts: u16,
}
