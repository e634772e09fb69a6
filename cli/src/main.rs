// src/main.rs
//
// Command-line front end for the cake auction mechanisms. Agent valuations
// (and, for the discrete setting, the fixed piece sequence) are loaded from
// JSON files; the chosen mechanism runs once and the allocation is printed
// as text or JSON.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::info;
use serde::Deserialize;
use thiserror::Error;

use cake_auction_core::{
    continuous_setting, discrete_setting, equally_sized_pieces, AuctionError, Piece,
    PiecewiseConstantAgent, RngManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Tile the cake with pieces of one caller-chosen length
    EqualPieces,
    /// Auction a caller-supplied piece sequence, coarsening as needed
    Discrete,
    /// Derive piece boundaries by probing a random half of the agents
    Continuous,
}

#[derive(Parser)]
#[command(name = "cake-auction")]
#[command(about = "Truthful approximation auctions for a divisible heterogeneous resource")]
struct Args {
    /// Auction mechanism to run
    #[arg(long, value_enum)]
    algorithm: Algorithm,

    /// Path to a JSON file with agent valuations: [{"name": .., "values": [..]}]
    #[arg(long)]
    agents: PathBuf,

    /// Piece length as a fraction of the cake, in (0, 1] (equal-pieces only)
    #[arg(long)]
    piece_size: Option<f64>,

    /// Path to a JSON file with the piece sequence: [[start, end], ..] (discrete only)
    #[arg(long)]
    pieces: Option<PathBuf>,

    /// Seed for probe selection (continuous only)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the allocation as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("--piece-size is required for the equal-pieces algorithm")]
    MissingPieceSize,

    #[error("--pieces is required for the discrete algorithm")]
    MissingPieces,

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("agent {name:?}: {reason}")]
    InvalidAgent { name: String, reason: &'static str },

    #[error("piece {index}: {reason}")]
    InvalidPiece { index: usize, reason: &'static str },

    #[error(transparent)]
    Auction(#[from] AuctionError),

    #[error("cannot encode allocation: {0}")]
    Encode(serde_json::Error),
}

/// On-disk shape of one agent's valuation.
#[derive(Debug, Deserialize)]
struct AgentRecord {
    name: String,
    values: Vec<f64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let agents = load_agents(&args.agents)?;
    info!("loaded {} agents from {}", agents.len(), args.agents.display());

    let allocation = match args.algorithm {
        Algorithm::EqualPieces => {
            let piece_size = args.piece_size.ok_or(CliError::MissingPieceSize)?;
            equally_sized_pieces(&agents, piece_size)?
        }
        Algorithm::Discrete => {
            let path = args.pieces.as_ref().ok_or(CliError::MissingPieces)?;
            let pieces = load_pieces(path)?;
            info!("loaded {} pieces from {}", pieces.len(), path.display());
            discrete_setting(&agents, &pieces)?
        }
        Algorithm::Continuous => {
            let mut rng = RngManager::new(args.seed);
            continuous_setting(&agents, &mut rng)?
        }
    };

    if args.json {
        let encoded = serde_json::to_string_pretty(&allocation).map_err(CliError::Encode)?;
        println!("{encoded}");
    } else {
        print!("{allocation}");
        println!("total welfare: {:.2}", allocation.total_value());
    }
    Ok(())
}

fn load_agents(path: &Path) -> Result<Vec<PiecewiseConstantAgent>, CliError> {
    let text = read_file(path)?;
    let records: Vec<AgentRecord> =
        serde_json::from_str(&text).map_err(|source| CliError::Parse {
            path: path.to_owned(),
            source,
        })?;
    records.into_iter().map(agent_from_record).collect()
}

/// Checks a loaded valuation before handing it to the panicking constructor;
/// malformed input files must surface as errors, not as panics.
fn agent_from_record(record: AgentRecord) -> Result<PiecewiseConstantAgent, CliError> {
    if record.values.is_empty() {
        return Err(CliError::InvalidAgent {
            name: record.name,
            reason: "must value at least one cell",
        });
    }
    if !record.values.iter().all(|v| v.is_finite() && *v >= 0.0) {
        return Err(CliError::InvalidAgent {
            name: record.name,
            reason: "cell values must be finite and nonnegative",
        });
    }
    Ok(PiecewiseConstantAgent::new(record.name, record.values))
}

fn load_pieces(path: &Path) -> Result<Vec<Piece>, CliError> {
    let text = read_file(path)?;
    let bounds: Vec<(f64, f64)> = serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_owned(),
        source,
    })?;
    bounds
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| {
            if !start.is_finite() || !end.is_finite() {
                return Err(CliError::InvalidPiece {
                    index,
                    reason: "bounds must be finite",
                });
            }
            if start >= end {
                return Err(CliError::InvalidPiece {
                    index,
                    reason: "start must be strictly below end",
                });
            }
            Ok(Piece::new(start, end))
        })
        .collect()
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}
