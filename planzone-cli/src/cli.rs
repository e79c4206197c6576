use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use planzone::geometry::boolean::BooleanOp;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Floor plan JSON file (external representation)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Where to write the resulting floor plan JSON
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    /// Optional engine config JSON
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a boolean operation to the zones at the given indices (file order)
    Boolean {
        #[arg(value_enum)]
        op: OpArg,
        /// Zero-based zone indices, first index is the base zone
        #[arg(required = true, num_args = 2..)]
        zones: Vec<usize>,
    },
    /// Run vertex reduction and orthogonal cleanup over every zone
    Cleanup,
    /// Print a summary of the plan
    Info,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OpArg {
    Union,
    Intersection,
    Difference,
    ConvexHull,
    KeepAll,
    Fragment,
}

impl From<OpArg> for BooleanOp {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Union => BooleanOp::Union,
            OpArg::Intersection => BooleanOp::Intersection,
            OpArg::Difference => BooleanOp::Difference,
            OpArg::ConvexHull => BooleanOp::ConvexHullOfAll,
            OpArg::KeepAll => BooleanOp::KeepAllPoints,
            OpArg::Fragment => BooleanOp::Fragment,
        }
    }
}
