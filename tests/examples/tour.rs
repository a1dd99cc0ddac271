//! Tour walkthrough tests.
//!
//! The tour is three rooms: a theater with the pub to the north and a
//! classroom to the east. Reaching the classroom wins.

use wander_runtime::{Game, ScriptedConsole, WINNING_MESSAGE, tour_player, tour_world};

// =============================================================================
// Winning Walkthrough
// =============================================================================

#[test]
fn the_three_move_walkthrough_wins() {
    let world = tour_world().unwrap();
    let player = tour_player(&world).unwrap();
    let console = ScriptedConsole::new(["move up", "move down", "move right"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(
        game.console().outputs(),
        [
            "You are now in: pub",
            "You are now in: theater",
            WINNING_MESSAGE
        ]
    );
    assert!(game.player().have_won());
    assert_eq!(game.player().current_room(), "classroom1");
}

#[test]
fn the_direct_route_wins_in_one_move() {
    let world = tour_world().unwrap();
    let player = tour_player(&world).unwrap();
    let console = ScriptedConsole::new(["move right"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(game.console().outputs(), [WINNING_MESSAGE]);
}

// =============================================================================
// Stumbling Walkthrough
// =============================================================================

#[test]
fn mistakes_along_the_way_do_not_end_the_tour() {
    let world = tour_world().unwrap();
    let player = tour_player(&world).unwrap();
    let console = ScriptedConsole::new(["move down", "fly", "move right"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(
        game.console().outputs(),
        [
            "Error: failed to execute 'move down': no exit down from theater",
            "Error: unsupported command: fly",
            WINNING_MESSAGE
        ]
    );
    assert!(game.player().have_won());
}

#[test]
fn quitting_early_leaves_the_tour_unwon() {
    let world = tour_world().unwrap();
    let player = tour_player(&world).unwrap();
    let console = ScriptedConsole::new(["move up", "quit", "move down", "move right"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(game.console().outputs(), ["You are now in: pub"]);
    assert_eq!(game.console().remaining_inputs(), 2);
    assert!(!game.player().have_won());
}
