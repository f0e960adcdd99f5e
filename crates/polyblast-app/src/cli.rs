//! Command-line arguments.
//!
//! Usage:
//!   polyblast [CONFIG] [--frames N] [--seed N] [--realtime]

use std::path::PathBuf;

use polyblast_core::constants::DEFAULT_SEED;

/// Config file used when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.txt";

/// Frames simulated before the pilot closes the game.
pub const DEFAULT_FRAMES: u64 = 3600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} needs a value")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub config: PathBuf,
    /// Simulated frames before the close signal.
    pub frames: u64,
    pub seed: u64,
    /// Pace frames to the configured frame limit instead of running flat out.
    pub realtime: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            frames: DEFAULT_FRAMES,
            seed: DEFAULT_SEED,
            realtime: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunArgs),
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut run = RunArgs::default();
    let mut config_given = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "--frames" => run.frames = parse_number("--frames", iter.next())?,
            "--seed" => run.seed = parse_number("--seed", iter.next())?,
            "--realtime" => run.realtime = true,
            other if other.starts_with('-') || config_given => {
                return Err(CliError::UnknownArgument(other.to_string()));
            }
            path => {
                run.config = PathBuf::from(path);
                config_given = true;
            }
        }
    }
    Ok(Command::Run(run))
}

fn parse_number(flag: &'static str, value: Option<&String>) -> Result<u64, CliError> {
    let value = value.ok_or(CliError::MissingValue(flag))?;
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.clone(),
    })
}

pub fn print_usage() {
    eprintln!(
        "polyblast: headless POLYBLAST runner\n\
         \n\
         Usage: polyblast [CONFIG] [options]\n\
         \n\
           CONFIG        Game config file (default: {DEFAULT_CONFIG_PATH})\n\
           --frames <N>  Frames to simulate before closing (default: {DEFAULT_FRAMES})\n\
           --seed <N>    RNG seed (default: {DEFAULT_SEED})\n\
           --realtime    Pace frames to the config's frame limit\n\
         \n\
         Set RUST_LOG=debug for per-entity events.\n"
    );
}
