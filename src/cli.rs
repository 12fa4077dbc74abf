use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "classfinder", version)]
#[command(about = "Find which Java archive or class file under a directory contains a class")]
pub struct Cli {
    /// Directory to search recursively
    #[arg(short = 'd', value_name = "DIR_NAME")]
    pub directory: PathBuf,

    /// Class name to look for, bare (Logger) or package qualified (org.slf4j.Logger)
    #[arg(short = 'c', value_name = "CLASS_NAME")]
    pub class_name: String,

    /// Pay attention to the class name case
    #[arg(short = 'p')]
    pub case_sensitive: bool,

    /// Print each archive as it is searched
    #[arg(short = 'v')]
    pub verbose: bool,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
