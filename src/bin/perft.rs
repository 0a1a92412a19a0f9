//! Perft counts for any registered variant.
//!
//! usage: perft <variant> <depth> [seed]

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_variants::board::divide;
use chess_variants::variants;
use chess_variants::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: perft <variant> <depth> [seed]");
        return ExitCode::FAILURE;
    }

    let Some(variant) = variants::by_slug(&args[1]) else {
        let known: Vec<_> = variants::all().iter().map(|v| v.slug()).collect();
        eprintln!("unknown variant '{}'; one of: {}", args[1], known.join(", "));
        return ExitCode::FAILURE;
    };
    let Ok(depth) = args[2].parse::<u32>() else {
        eprintln!("depth must be a number, got '{}'", args[2]);
        return ExitCode::FAILURE;
    };
    let seed = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);

    let game = Game::with_seed(variant, seed);
    let dims = game.position().dimensions();
    let mut position = game.position().clone();
    println!("{} {}", game.variant().name(), position.to_fen());

    let start = Instant::now();
    let mut total = 0;
    for (mv, nodes) in divide(&mut position, game.variant(), depth) {
        let from = mv
            .origin()
            .map_or_else(|| "@".to_string(), |cell| cell.to_algebraic(dims));
        println!("{from}{}: {nodes}", mv.target.to_algebraic(dims));
        total += nodes;
    }
    let elapsed = start.elapsed();
    println!();
    println!("Nodes searched: {total}");
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    ExitCode::SUCCESS
}
