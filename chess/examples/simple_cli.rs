// Simple command-line application to play a game on the chess board
//
// Enter a move like `e2e4` to make it, or a single square like `g1` to see where the piece on it
// may go. Set `RUST_LOG=geochess=debug` to see what the engine does.

use geochess::{board::PrettyStyle, ClickResult, Coord, Game, Move};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut stdin = io::stdin().lock();
    let mut game = Game::new();

    loop {
        println!("{}", game.pretty(PrettyStyle::Ascii));
        print!("{} move: ", game.current_turn().name());
        io::stdout().flush()?;
        let mut s = String::new();
        if stdin.read_line(&mut s)? == 0 {
            println!();
            break;
        }
        let s = s.trim();
        if s.is_empty() {
            continue;
        }

        if let Ok(coord) = s.parse::<Coord>() {
            match game.click(coord) {
                ClickResult::Selected { src, highlights } => {
                    let dests: Vec<_> = highlights.into_iter().map(|c| c.to_string()).collect();
                    println!("{} can go to: {}", src, dests.join(" "));
                }
                _ => println!("No piece of yours on {}", coord),
            }
            // Selection is only used for hints here.
            if game.selected().is_some() {
                game.click(coord);
            }
            println!();
            continue;
        }

        let mv = match s.parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad move: {}", e);
                println!();
                continue;
            }
        };
        match game.try_move(mv) {
            Ok(captured) if captured.is_occupied() => println!("Captured {}", captured),
            Ok(_) => {}
            Err(e) => println!("Cannot move: {}", e),
        }
        println!();
    }
    Ok(())
}
