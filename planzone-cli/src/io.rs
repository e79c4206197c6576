use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use planzone::io::ext_repr::ExtPlan;

pub fn read_plan_file(path: &Path) -> Result<ExtPlan> {
    let file = File::open(path)
        .with_context(|| format!("could not open plan file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse plan file: {}", path.display()))
}

pub fn write_plan_file(ext_plan: &ExtPlan, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, ext_plan)
        .with_context(|| format!("could not write output file: {}", path.display()))?;
    info!("plan written to {}", path.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = humantime::format_rfc3339_seconds(std::time::SystemTime::now());
            out.finish(format_args!(
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                message
            ))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    Ok(())
}
