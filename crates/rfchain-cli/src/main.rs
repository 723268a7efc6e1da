//! rfchain command-line interface.

mod analysis;
mod input;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rfchain::SweepType;

use crate::input::ChainSource;

#[derive(Parser)]
#[command(name = "rfchain")]
#[command(about = "Gain and noise cascade analysis for RF signal chains", long_about = None)]
#[command(version)]
struct Cli {
    /// Chain description (JSON). Defaults to the built-in preset.
    #[arg(short, long, value_name = "FILE", global = true)]
    chain: Option<PathBuf>,

    /// Built-in preset chain to analyse when no file is given
    /// (simple, default, mcgill, slim2024, slim2025, or a full preset name)
    #[arg(long, value_name = "NAME", global = true)]
    preset: Option<String>,

    /// Analysis configuration (JSON)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Fail on frequencies outside characterized ranges instead of clamping
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the components of the chain
    Summary,
    /// Gain between two components (whole chain by default)
    Gain {
        /// Frequency, e.g. 1.5G or 1500MHz
        #[arg(short, long, value_parser = parse_frequency)]
        freq: f64,
        #[arg(long, value_name = "LABEL")]
        from: Option<String>,
        #[arg(long, value_name = "LABEL")]
        to: Option<String>,
    },
    /// Noise budget at a reference point (chain output by default)
    Noise {
        #[arg(short, long, value_parser = parse_frequency)]
        freq: f64,
        /// Reference component
        #[arg(long, value_name = "LABEL")]
        at: Option<String>,
    },
    /// Per-component gain and noise at one frequency
    Annotate {
        #[arg(short, long, value_parser = parse_frequency)]
        freq: f64,
    },
    /// Sweep gain or noise and write CSV
    Sweep {
        #[arg(long, value_parser = parse_frequency)]
        fstart: f64,
        #[arg(long, value_parser = parse_frequency)]
        fstop: f64,
        /// Total points (linear) or points per decade/octave
        #[arg(short = 'n', long, default_value_t = 101)]
        points: usize,
        #[arg(long, value_enum, default_value_t = SweepKind::Lin)]
        sweep: SweepKind,
        /// Tabulate noise contributions instead of gains
        #[arg(long)]
        noise: bool,
        /// Noise reference component (chain output by default)
        #[arg(long, value_name = "LABEL", requires = "noise")]
        at: Option<String>,
        /// Output file; stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List registered component types
    Types {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the chain as JSON
    Save {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepKind {
    Lin,
    Dec,
    Oct,
}

impl From<SweepKind> for SweepType {
    fn from(kind: SweepKind) -> Self {
        match kind {
            SweepKind::Lin => SweepType::Linear,
            SweepKind::Dec => SweepType::Decade,
            SweepKind::Oct => SweepType::Octave,
        }
    }
}

fn parse_frequency(s: &str) -> std::result::Result<f64, String> {
    match rfchain::core::units::parse_value(s) {
        Some(f) if f.is_finite() && f > 0.0 => Ok(f),
        Some(f) => Err(format!("frequency must be positive, got {}", f)),
        None => Err(format!("invalid frequency '{}'", s)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Command::Types { json } = cli.command {
        return analysis::list_types(json);
    }

    let source = ChainSource::from_args(cli.chain.clone(), cli.preset.clone())?;
    let config = input::load_config(cli.config.as_deref(), cli.strict)?;
    let chain = source.load(config)?;

    match &cli.command {
        Command::Summary => print!("{}", chain.summary()),
        Command::Gain { freq, from, to } => {
            analysis::run_gain(&chain, *freq, from.as_deref(), to.as_deref())?
        }
        Command::Noise { freq, at } => analysis::run_noise(&chain, *freq, at.as_deref())?,
        Command::Annotate { freq } => print!("{}", chain.annotation_table(*freq)?),
        Command::Sweep {
            fstart,
            fstop,
            points,
            sweep,
            noise,
            at,
            output,
        } => {
            let sweep = rfchain::SweepConfig {
                fstart: *fstart,
                fstop: *fstop,
                num_points: *points,
                sweep_type: (*sweep).into(),
            };
            analysis::run_sweep(&chain, &sweep, *noise, at.as_deref(), output.as_deref())?
        }
        Command::Save { path } => input::save_chain(&chain, path)?,
        Command::Types { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_frequency() {
        assert_eq!(parse_frequency("1.5G"), Ok(1.5e9));
        assert_eq!(parse_frequency("500MHz"), Ok(500e6));
        assert_eq!(parse_frequency("1e9"), Ok(1e9));
        assert!(parse_frequency("-1G").is_err());
        assert!(parse_frequency("fast").is_err());
    }

    #[test]
    fn test_parse_sweep_args() {
        let cli = Cli::try_parse_from([
            "rfchain", "--strict", "sweep", "--fstart", "100MHz", "--fstop", "3G", "-n", "5",
            "--sweep", "dec", "--noise",
        ])
        .unwrap();
        assert!(cli.strict);
        match cli.command {
            Command::Sweep {
                fstart,
                points,
                sweep,
                noise,
                ..
            } => {
                assert_eq!(fstart, 1e8);
                assert_eq!(points, 5);
                assert_eq!(SweepType::from(sweep), SweepType::Decade);
                assert!(noise);
            }
            _ => panic!("expected sweep"),
        }
    }
}
