use crate::domain::model::{InputFormat, OutputFormat, SkylineStrategy};
use clap::Parser;

pub const USAGE: &str = "Insert the input file";

#[derive(Debug, Clone, Parser)]
#[command(name = "skyline")]
#[command(about = "Compute the 2D skyline (Pareto frontier) of a set of integer points")]
pub struct CliConfig {
    /// Input file: a point count followed by that many `x y` pairs, or an x,y CSV
    #[arg(num_args = 0..)]
    pub inputs: Vec<String>,

    #[arg(long, help = "Input format: text or csv (default: inferred from extension)")]
    pub input_format: Option<InputFormat>,

    #[arg(short = 'f', long, help = "Output format: text, csv or json")]
    pub output_format: Option<OutputFormat>,

    #[arg(short, long, help = "Write the skyline to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "recursive or iterative")]
    pub strategy: Option<SkylineStrategy>,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Smallest y any input point can have; enables an early exit in the merge"
    )]
    pub y_floor: Option<i64>,

    #[arg(long, help = "Check the result against a brute-force skyline")]
    pub verify: bool,

    #[arg(short, long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory between phases")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// The single input path, or `None` when zero or several were given.
    pub fn single_input(&self) -> Option<&str> {
        match self.inputs.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}
