// Simple command-line application to play makruk
//
// Type a square (e.g. `a3`) to click it, or a move (e.g. `a3a4`) to make it at once.

use makruk::{board::PrettyStyle, ClickOutcome, Coord, Game, GameConfig};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() {
    let mut stdin = io::stdin().lock();

    let mut game = Game::new(GameConfig::default());

    loop {
        if let Some(winner) = game.winner() {
            println!("{}", game.pretty(PrettyStyle::Ascii));
            println!("Game finished: {} wins", winner.name());
            let captures: String = game.captures().iter().map(|c| c.as_char()).collect();
            println!("Captured: {}", captures);
            break;
        }

        println!("{}", game.pretty(PrettyStyle::Ascii));
        if let Some(selected) = game.selected_square() {
            let moves: Vec<String> = game.legal_moves().iter().map(|c| c.to_string()).collect();
            println!("Selected {}, can go to: {}", selected, moves.join(" "));
        }
        print!("{} to move: ", game.current_turn().name());
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();

        if s.len() == 2 {
            match Coord::from_str(s) {
                Ok(c) => match game.click(c) {
                    ClickOutcome::Ignored => println!("Nothing to do on {}", c),
                    outcome => println!("{}", outcome),
                },
                Err(e) => println!("Bad square: {}", e),
            }
        } else {
            match game.play_str(s) {
                Ok(mv) => println!("Moved {}", mv),
                Err(e) => println!("Bad move: {}", e),
            }
        }

        println!();
    }
}
