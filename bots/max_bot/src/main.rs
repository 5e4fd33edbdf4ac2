use qwirkle::{best_plays, Board, PlayTurnResponse, Tile, TilePlacement};
use qwirkle_bot_utils::Bot;

use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// Plays the turn that scores the most points, picking randomly among equally good ones.
struct MaxBot {
    rng: StdRng,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    MaxBot { rng }.run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

impl Bot for MaxBot {
    fn play_turn(&mut self, mut hand: Vec<Tile>, mut board: Board) -> PlayTurnResponse {
        // Make room to place tiles beyond the current edge of the grid
        let (inserted_rows, inserted_cols) = board.adjust_padding();

        let (score, plays) = best_plays(&mut board, &mut hand);
        debug!(score, num_choices = plays.len(), "Found best plays");

        let placements: Vec<TilePlacement> = plays
            .choose(&mut self.rng)
            .map(|play| {
                play.iter()
                    .map(|&TilePlacement { tile, position }| TilePlacement {
                        tile,
                        position: position.offset(-inserted_rows, -inserted_cols),
                    })
                    .collect()
            })
            .unwrap_or_default();
        PlayTurnResponse(placements)
    }
}
