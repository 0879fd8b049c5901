//! Trollmaze: a terminal maze game.
//!
//! Usage: `trollmaze [MAZE_FILE]`. Set `TROLLMAZE_LOG` to a file path to
//! record logs there (filtered by `RUST_LOG`, default `info`).

use std::env;
use std::fs::File;

use trollmaze_lib::draw::render;
use trollmaze_lib::term::{Command, Terminal};
use trollmaze_lib::{Game, GameConfig, GameState};

/// Install the logger when `TROLLMAZE_LOG` names a file. Records never go
/// to the terminal, which is busy showing the game.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = env::var_os("TROLLMAZE_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let mut config = GameConfig::default();
    if let Some(path) = env::args_os().nth(1) {
        config.maze = Some(std::fs::read_to_string(path)?);
    }
    let mut game = Game::new(config)?;

    let mut term = Terminal::open()?;
    loop {
        term.draw(render(&game))?;
        if game.state != GameState::Playing {
            term.wait_key()?;
            break;
        }
        match term.next_command()? {
            Command::Move(dir) => {
                game.play(dir);
            }
            Command::Redraw => {}
            Command::Quit => break,
        }
    }
    drop(term);

    match game.state {
        GameState::Won => println!("You escaped in {} turns.", game.turn),
        GameState::Lost => println!("A troll got you on turn {}.", game.turn),
        GameState::Playing => println!("Bye."),
    }
    log::info!("session ended after {} turns: {:?}", game.turn, game.state);
    Ok(())
}
