use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .jucer project file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print the parsed project and resolved module metadata after generation
    #[arg(short, long)]
    pub verbose: bool,
}
