//! hexboard -- generates one randomized board layout and prints it as JSON.
//!
//! Usage:
//!   hexboard [standard|expanded] [--block-68] [--block-same-number]
//!            [--block-same-resource] [--seed <u64>] [--pretty]
//!
//! The tile sequence is written to stdout, one entry per tile with its
//! axial coordinate; errors go to stderr with a non-zero exit status.

use std::process::ExitCode;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use hexboard::{generate, select_board_size, AxialCoord, BoardSize, ConstraintSet, TokenPool};

/// One tile of the JSON output, flattened with its board position.
#[derive(Serialize)]
struct TileOut {
    q: i32,
    r: i32,
    resource: hexboard::Resource,
    #[serde(skip_serializing_if = "Option::is_none")]
    chit: Option<u8>,
}

#[derive(Serialize)]
struct BoardOut {
    size: &'static str,
    constraints: ConstraintSet,
    tiles: Vec<TileOut>,
}

struct Cli {
    size: BoardSize,
    constraints: ConstraintSet,
    seed: Option<u64>,
    pretty: bool,
}

fn usage() -> &'static str {
    "usage: hexboard [standard|expanded] [--block-68] [--block-same-number] \
     [--block-same-resource] [--seed <u64>] [--pretty]"
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut cli = Cli {
        size: BoardSize::Standard,
        constraints: ConstraintSet::none(),
        seed: None,
        pretty: false,
    };
    let mut size_seen = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--block-68" => cli.constraints.block_high_probability = true,
            "--block-same-number" => cli.constraints.block_same_number = true,
            "--block-same-resource" => cli.constraints.block_same_resource = true,
            "--pretty" => cli.pretty = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed: '{}'", value))?;
                cli.seed = Some(seed);
            }
            "--help" | "-h" => return Err(usage().to_string()),
            other => {
                if size_seen {
                    return Err(format!("unexpected argument: '{}'", other));
                }
                cli.size = BoardSize::from_name(other).map_err(|e| e.to_string())?;
                size_seen = true;
            }
        }
    }
    Ok(cli)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    let (topology, adjacency) = select_board_size(cli.size);
    let pool = TokenPool::for_size(cli.size);
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let tiles = match generate(&adjacency, &pool, cli.constraints, &mut rng) {
        Ok(tiles) => tiles,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let out = BoardOut {
        size: cli.size.name(),
        constraints: cli.constraints,
        tiles: topology
            .coords()
            .iter()
            .zip(tiles)
            .map(|(&AxialCoord { q, r }, tile)| TileOut {
                q,
                r,
                resource: tile.resource,
                chit: tile.chit,
            })
            .collect(),
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&out)
    } else {
        serde_json::to_string(&out)
    };
    match json {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize board: {}", e);
            ExitCode::FAILURE
        }
    }
}
