use anyhow::{Context, Result, bail};
use tracing::info;

use cellchess_core::{Board, Coord};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("cellchess starting");

    let mut board = Board::filled();
    println!("{}", board.pretty());

    if let Some(arg) = std::env::args().nth(1) {
        let from = Coord::from_algebraic(&arg).with_context(|| format!("invalid square: {arg}"))?;
        let Some(id) = board.piece_at(from) else {
            bail!("no piece on {from}");
        };
        let moves: Vec<String> = board.all_moves(id).iter().map(ToString::to_string).collect();
        info!(square = %from, count = moves.len(), "listing moves");
        println!("{from}: {}", moves.join(" "));
    }

    Ok(())
}
