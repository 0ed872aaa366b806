use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use knapsack_rs::io::ext_repr::{ExtInstance, ExtItem};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};

use crate::EPOCH;

pub mod cli;
pub mod output;
pub mod report;

/// Reads an instance from a `.json` file or from a `.csv` file with a `Module,Cost,Value` header.
pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "json" => serde_json::from_reader(reader)
            .with_context(|| format!("could not parse instance file: {}", path.display())),
        "csv" => read_csv_instance(reader, name)
            .with_context(|| format!("could not parse instance file: {}", path.display())),
        _ => bail!(
            "unsupported instance file format: {}, expected .json or .csv",
            path.display()
        ),
    }
}

/// One row of a topics table
#[derive(Deserialize, Debug)]
struct CsvRecord {
    #[serde(rename = "Module", alias = "id")]
    module: String,
    #[serde(rename = "Cost", alias = "cost")]
    cost: f64,
    #[serde(rename = "Value", alias = "value")]
    value: f64,
}

/// Parses a headered table of `(Module, Cost, Value)` records, keeping the row order.
/// The table carries no capacity, it is supplied on import.
pub fn read_csv_instance(reader: impl Read, name: String) -> Result<ExtInstance> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let items = csv_reader
        .deserialize::<CsvRecord>()
        .map(|record| -> Result<ExtItem> {
            let record = record?;
            Ok(ExtItem {
                id: record.module,
                cost: record.cost,
                value: record.value,
            })
        })
        .collect::<Result<Vec<ExtItem>>>()?;

    Ok(ExtInstance {
        name,
        capacity: None,
        items,
    })
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {:?}", canonical(path));
    Ok(())
}

pub fn write_report(report: &str, path: &Path) -> Result<()> {
    fs::write(path, report)
        .with_context(|| format!("could not write report file: {}", path.display()))?;
    info!("report written to {:?}", canonical(path));
    Ok(())
}

fn canonical(path: &Path) -> std::path::PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("epoch: {:?}", *EPOCH);
    Ok(())
}
