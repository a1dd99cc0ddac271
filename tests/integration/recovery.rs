//! Error recovery: sessions keep going after recoverable mistakes.

use wander_engine::{Player, WinCondition};
use wander_runtime::{Game, ScriptedConsole, WINNING_MESSAGE};
use wander_world::{Direction, World};

fn lighthouse() -> World {
    let mut world = World::new();
    world.add_room("lamp_room", "the lamp room at the top").unwrap();
    world.add_room("gallery", "the wave-swept gallery").unwrap();
    world
        .connect_rooms("lamp_room", "gallery", Direction::South)
        .unwrap();
    world
}

// =============================================================================
// Unsupported Commands
// =============================================================================

#[test]
fn typos_cost_a_line_of_output_and_nothing_else() {
    let world = lighthouse();
    let player = Player::new(&world, "lamp_room").unwrap();
    let console = ScriptedConsole::new(["fly", "move down"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(
        game.console().outputs(),
        [
            "Error: unsupported command: fly",
            "You are now in: gallery"
        ]
    );
}

#[test]
fn only_the_first_token_names_the_command() {
    let world = lighthouse();
    let player = Player::new(&world, "lamp_room").unwrap();
    let console = ScriptedConsole::new(["fly down quickly", "move down"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(
        game.console().outputs()[0],
        "Error: unsupported command: fly"
    );
}

// =============================================================================
// Failed Actions
// =============================================================================

#[test]
fn walls_are_survivable() {
    let world = lighthouse();
    let player = Player::new(&world, "lamp_room").unwrap();
    let console = ScriptedConsole::new(["move up", "move down"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(
        game.console().outputs(),
        [
            "Error: failed to execute 'move up': no exit up from lamp_room",
            "You are now in: gallery"
        ]
    );
    assert_eq!(game.player().current_room(), "gallery");
}

#[test]
fn missing_and_unknown_arguments_are_survivable() {
    let world = lighthouse();
    let player = Player::new(&world, "lamp_room").unwrap();
    let console = ScriptedConsole::new(["move", "move sideways", "move south"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(
        game.console().outputs(),
        [
            "Error: failed to execute 'move': 'move' takes 1 argument(s), got 0",
            "Error: failed to execute 'move sideways': unknown direction 'sideways'",
            "You are now in: gallery"
        ]
    );
}

#[test]
fn a_rough_start_can_still_be_won() {
    let world = lighthouse();
    let player = Player::new(&world, "lamp_room")
        .unwrap()
        .with_goal(WinCondition::new(|state| {
            state.has_already_visited(["gallery"])
        }));
    let console = ScriptedConsole::new(["dance", "move north", "move down", "where"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    let outputs = game.console().outputs();
    assert_eq!(outputs.last().map(String::as_str), Some(WINNING_MESSAGE));
    assert_eq!(game.console().remaining_inputs(), 1);
    assert!(game.player().have_won());
}
