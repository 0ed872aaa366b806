use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use knapsack_rs::io::{export, import};
use knapsack_rs::solvers::{self, Strategy};
use log::{info, warn};
use studyplan::config::StudyPlanConfig;
use studyplan::io::cli::Cli;
use studyplan::io::output::StudyPlanOutput;
use studyplan::io::report;
use studyplan::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            StudyPlanConfig::default()
        }
        Some(config_file) => StudyPlanConfig::load(&config_file)?,
    };

    if let Some(token) = args.strategy.as_deref() {
        config.strategy = token.parse::<Strategy>()?;
    }

    info!("Successfully parsed StudyPlanConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_string();

    let mut ext_instance = io::read_instance(&args.input_file)?;
    if let Some(capacity) = args.capacity {
        ext_instance.capacity = Some(capacity);
    }
    let instance = import(&ext_instance, config.capacity)?;

    info!(
        "[MAIN] solving '{}': {} topics ({:.2} hours in total), {:.2} hours available, strategy {}",
        ext_instance.name,
        instance.n_items(),
        instance.total_cost(),
        instance.capacity(),
        config.strategy
    );

    let solution = solvers::solve(&instance, config.strategy, &config.solver)?;
    let report = report::render(&instance, &solution);
    println!("{report}");

    if let Some(solution_folder) = args.solution_folder {
        fs::create_dir_all(&solution_folder).with_context(|| {
            format!("could not create solution folder: {solution_folder:?}")
        })?;

        let output = StudyPlanOutput {
            solution: export(&instance, &solution, *EPOCH),
            instance: ext_instance,
            config,
        };
        io::write_json(&output, &solution_folder.join(format!("sol_{input_file_stem}.json")))?;
        io::write_report(&report, &solution_folder.join(format!("sol_{input_file_stem}.txt")))?;
    }

    Ok(())
}
