use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to solve, a .json instance or a .csv table with a Module,Cost,Value header
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the solution and the report to, nothing is written if not specified
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the strategy of the config [dynamic_programming, branch_and_bound, greedy]
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<String>,
    /// Overrides the capacity (study time budget in hours)
    #[arg(long, value_name = "HOURS")]
    pub capacity: Option<f64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
