//! Range inspector
//!
//! Loads a scenario (or generates a random board) and prints what a unit can
//! reach, see or attack from a vector.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use gridreach::board::{Board, Unit, UnitKind, Vector};
use gridreach::core::{config, GridError, PlayerId, Result};
use gridreach::reach::{attackable, attackable_with_vision, moveable, visible, Optimize, SearchFields};
use gridreach::scenario::{load_board, random_board};
use gridreach::vision::{vision_for, Vision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Query {
    Moveable,
    Visible,
    Attackable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Grid,
    Json,
}

/// Range inspector - print movement, sight or attack range of a unit
#[derive(Parser, Debug)]
#[command(name = "range_inspect")]
#[command(about = "Print movement, sight or attack range of a unit on a board")]
struct Args {
    /// Scenario TOML file; a random board is generated when omitted
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Column of the unit (1-based)
    #[arg(long)]
    x: i32,

    /// Row of the unit (1-based)
    #[arg(long)]
    y: i32,

    #[arg(long, value_enum, default_value_t = Query::Moveable)]
    query: Query,

    #[arg(long, value_enum, default_value_t = Format::Grid)]
    format: Format,

    /// Rank attack staging by cover instead of movement cost
    #[arg(long, default_value_t = false)]
    cover: bool,

    /// Player whose fog applies to attack queries
    #[arg(long)]
    viewer: Option<u8>,

    /// Random board width
    #[arg(long, default_value_t = 16)]
    width: i32,

    /// Random board height
    #[arg(long, default_value_t = 12)]
    height: i32,

    /// Random board seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Unit kind to place when the vector is empty
    #[arg(long, default_value = "infantry")]
    kind: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    config().validate().map_err(GridError::InvalidConfig)?;

    let mut board = match &args.scenario {
        Some(path) => load_board(path)?,
        None => random_board(args.width, args.height, args.seed),
    };

    let origin = Vector::new(args.x, args.y);
    if !board.contains(origin) {
        return Err(GridError::OutOfBounds {
            vector: origin,
            width: board.width(),
            height: board.height(),
        });
    }

    let unit = match board.unit_at(origin).cloned() {
        Some(unit) => unit,
        None => {
            let kind = parse_kind(&args.kind)?;
            let unit = Unit::new(kind, PlayerId::new(1));
            board.place_unit(origin, unit.clone());
            unit
        }
    };
    tracing::info!("{:?} of {:?} at {}", unit.kind, unit.player, origin);

    let optimize_by = if args.cover {
        Optimize::Cover
    } else {
        Optimize::Cost
    };

    let fields = match args.query {
        Query::Moveable => moveable(&board, &unit, origin, None, None, false),
        Query::Visible => visible(&board, &unit, origin, None),
        Query::Attackable => match args.viewer {
            Some(viewer) => {
                let viewer = PlayerId::new(viewer);
                if !viewer.is_neutral() && board.player(viewer).is_none() {
                    return Err(GridError::UnknownPlayer(viewer));
                }
                let vision: Box<dyn Vision> = vision_for(&board, viewer);
                attackable_with_vision(&board, vision.as_ref(), &unit, origin, optimize_by, None)
            }
            None => attackable(&board, &unit, origin, optimize_by, None),
        },
    };
    tracing::info!("{} fields", fields.len());

    match args.format {
        Format::Grid => print!("{}", render_grid(&board, origin, &fields)),
        Format::Json => {
            let items: Vec<_> = fields.values().collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}

fn parse_kind(name: &str) -> Result<UnitKind> {
    UnitKind::all()
        .into_iter()
        .find(|kind| format!("{:?}", kind).eq_ignore_ascii_case(name))
        .ok_or_else(|| GridError::InvalidScenario(format!("unknown unit kind '{}'", name)))
}

/// Terrain symbols with `@` for the origin and `*` for every result
fn render_grid(board: &Board, origin: Vector, fields: &SearchFields) -> String {
    let mut out = String::new();
    for y in 1..=board.height() {
        for x in 1..=board.width() {
            let vector = Vector::new(x, y);
            let symbol = if vector == origin {
                '@'
            } else if fields.contains_key(&vector) {
                '*'
            } else {
                board.tile(vector).symbol()
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
