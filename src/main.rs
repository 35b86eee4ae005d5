//! Self-play driver: pits two roster bots against each other and prints the
//! final board and the game's PGN.

use std::error::Error;

use clap::Parser;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chess_bots::engines::presets::{bot_for_config, default_roster};
use chess_bots::utils::pgn::write_pgn;
use chess_bots::utils::render_game_state::render_board;
use chess_bots::{Ai, Board, ChessError, Color};

#[derive(Debug, Parser)]
#[command(name = "chess_bots", about = "Play a game between two chess bots")]
struct Args {
    /// Roster index of the bot playing light.
    #[arg(long, default_value_t = 0)]
    white: usize,

    /// Roster index of the bot playing dark.
    #[arg(long, default_value_t = 2)]
    black: usize,

    /// Stop after this many plies even if the game is still going.
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Uniformly random moves played before the bots take over.
    #[arg(long, default_value_t = 0)]
    random_opening_plies: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the roster and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let roster = default_roster();

    if args.list {
        for (index, config) in roster.iter().enumerate() {
            println!("{index}: {} (elo {}, depth {})", config.name, config.elo, config.depth);
        }
        return Ok(());
    }

    let pick = |index: usize| -> Result<Box<dyn Ai>, String> {
        roster
            .get(index)
            .cloned()
            .map(bot_for_config)
            .ok_or_else(|| format!("no bot at roster index {index} (roster has {})", roster.len()))
    };
    let white = pick(args.white)?;
    let black = pick(args.black)?;
    info!(white = white.name(), black = black.name(), seed = args.seed, "starting game");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut board = Board::new_game();

    for ply in 0..args.max_plies {
        if board.status().is_terminal() {
            break;
        }

        let mv = if ply < args.random_opening_plies {
            let moves = board.all_legal_moves();
            *moves.choose(&mut rng).ok_or(ChessError::NoLegalMoves)?
        } else {
            let bot = match board.side_to_move() {
                Color::Light => &white,
                Color::Dark => &black,
            };
            bot.find_strategic_move(&board)?
        };

        let played = board.apply_move(&mv)?;
        debug!(ply = ply + 1, mv = %played, "move played");
    }

    let status = board.status();
    let result = status.result_token(board.side_to_move());
    info!(?status, result, plies = board.history().len(), "game finished");

    println!("{}", render_board(&board));
    println!("{}", write_pgn(&board, white.name(), black.name(), result));
    Ok(())
}
