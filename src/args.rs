// src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "treesnap",
    version,
    about = "Snapshot a directory tree into a single JSON document"
)]
pub struct Args {
    /// Directory to snapshot
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    pub root: PathBuf,

    /// Output file; a relative path resolves under ROOT
    #[arg(
        short = 'o',
        long,
        value_hint = ValueHint::FilePath,
        default_value = "files.json"
    )]
    pub output: PathBuf,

    /// Extra directory names to exclude wherever they appear
    #[arg(long = "exclude-dir", value_name = "NAME", value_delimiter = ',')]
    pub exclude_dir: Vec<String>,

    /// Glob over the relative path; matching files are excluded (repeatable)
    #[arg(long = "exclude-path", value_name = "GLOB")]
    pub exclude_path: Vec<String>,

    /// Drop the built-in .git / node_modules exclusions
    #[arg(long)]
    pub no_default_exclude: bool,
}
