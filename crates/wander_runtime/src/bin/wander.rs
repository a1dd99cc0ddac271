//! Wander CLI entry point.

use std::env;
use std::process::ExitCode;

use wander_runtime::{Game, campus_player, campus_world, tour_player, tour_world};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    game: GameChoice,
    show_help: bool,
    show_version: bool,
}

/// Which shipped world to play.
#[derive(Clone, Copy, Default)]
enum GameChoice {
    Tour,
    #[default]
    Campus,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--game" => {
                i += 1;
                if i >= args.len() {
                    return Err("--game requires a value".into());
                }
                config.game = match args[i].as_str() {
                    "tour" => GameChoice::Tour,
                    "campus" => GameChoice::Campus,
                    other => return Err(format!("unknown game: {other}").into()),
                };
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            other => {
                return Err(format!("unexpected argument: {other}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("wander {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Build the selected world and its player
    let world = match config.game {
        GameChoice::Tour => tour_world()?,
        GameChoice::Campus => campus_world()?,
    };
    let player = match config.game {
        GameChoice::Tour => tour_player(&world)?,
        GameChoice::Campus => campus_player(&world)?,
    };

    println!("\x1b[1;36mWander\x1b[0m {}", env!("CARGO_PKG_VERSION"));
    println!("You are in: {}", player.current_room());
    println!("Type 'ls' to list commands, 'where' to look around, Ctrl+D to exit.");
    println!();

    // Run the session
    let mut game = Game::new(player)?;
    game.play()?;

    println!("\nGoodbye!");
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWander\x1b[0m - Minimal text adventure

\x1b[1mUSAGE:\x1b[0m
    wander [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --game <NAME>      World to play: tour or campus (default: campus)

\x1b[1mSESSION COMMANDS:\x1b[0m
    move <direction>   Walk through an exit (up, down, left, right,
                       or north, south, east, west)
    where              Describe the current room and its exits
    ls                 List available commands
    quit               End the session
    Ctrl+D             Exit

\x1b[1mEXAMPLES:\x1b[0m
    wander                   Play the campus game
    wander --game tour       Play the three-room tour"
    );
}
