use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use planzone::entities::{BooleanOutcome, Zone, ZoneKey};
use planzone::geometry::boolean::GeoClipper;
use planzone::geometry::ortho::{OrthoConfig, ortho_clean};
use planzone::geometry::simplification::{SimplifyConfig, reduce_vertices};
use planzone::io::{export_plan, import_plan};

use crate::cli::{Cli, Command};

mod cli;
mod io;

/// Cleanup tuning, overridable through `--config-file`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct CliConfig {
    pub simplify: SimplifyConfig,
    pub ortho: OrthoConfig,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: CliConfig = match &args.config_file {
        None => {
            warn!("no config file provided, using defaults");
            CliConfig::default()
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")?
        }
    };

    let ext_plan = io::read_plan_file(&args.input_file)?;
    let mut plan = import_plan(&ext_plan)?;
    info!(
        "loaded plan {} with {} zone(s), floor area {:.2}",
        plan.id,
        plan.n_zones(),
        plan.floor_area
    );

    match args.command {
        Command::Info => {
            for (_, zone) in plan.zones() {
                info!(
                    "{:?} '{}': {} vertices, estimated area {:.2}",
                    zone.kind,
                    zone.name,
                    zone.ring.n_vertices(),
                    zone.estimated_area
                );
            }
            return Ok(());
        }
        Command::Boolean { op, zones } => {
            let keys: Vec<ZoneKey> = plan.zones().keys().collect();
            let selection: Vec<ZoneKey> = zones
                .iter()
                .map(|&i| {
                    keys.get(i)
                        .copied()
                        .with_context(|| format!("zone index {i} out of range"))
                })
                .collect::<Result<_>>()?;

            match plan.apply_boolean(&GeoClipper, op.into(), &selection)? {
                BooleanOutcome::Applied { deleted, created } => info!(
                    "{} zone(s) replaced by {} result zone(s)",
                    deleted.len(),
                    created.len()
                ),
                BooleanOutcome::Advisory(advisory) => {
                    warn!("operation had no effect: {advisory}");
                    return Ok(());
                }
            }
        }
        Command::Cleanup => {
            let keys: Vec<ZoneKey> = plan.zones().keys().collect();
            for key in keys {
                let Some(zone) = plan.zone(key) else { continue };
                let before = zone.ring.n_vertices();
                let cleaned = ortho_clean(
                    &reduce_vertices(&zone.ring, config.simplify),
                    config.ortho,
                );
                //zones are immutable per version: replace, do not mutate
                let mut replacement = Zone::new(cleaned, zone.kind, zone.name.clone());
                replacement.style = zone.style.clone();
                replacement.linked_unit = zone.linked_unit.clone();
                replacement.label_offset = zone.label_offset;
                plan.remove_zone(key);
                let new_key = plan.add_zone(replacement);
                let after = plan.zone(new_key).map(|z| z.ring.n_vertices()).unwrap_or(0);
                info!("cleaned zone: {before} -> {after} vertices");
            }
        }
    }

    match &args.output_file {
        Some(path) => io::write_plan_file(&export_plan(&plan), path)?,
        None => bail!("this command changes the plan, provide --output-file to keep the result"),
    }
    Ok(())
}
