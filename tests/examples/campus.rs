//! Campus walkthrough tests.
//!
//! The campus is eight rooms around an entrance hall. Winning takes a
//! mentoring visit, a textbook from the restaurant, and the exam room.

use wander_runtime::{Game, ScriptedConsole, WINNING_MESSAGE, campus_player, campus_world};

/// The canonical winning walkthrough, wrong turn included. The final
/// `where` never runs: the session ends on the winning move.
const WALKTHROUGH: [&str; 13] = [
    "move right", // restaurant, first textbook
    "move left",  // back to the entrance hall
    "move right", // restaurant again, second textbook
    "move left",  // entrance hall
    "move up",    // library
    "move right", // mentoring room
    "move down",  // wrong turn, the mentoring room is a dead end
    "move left",  // library
    "move up",    // lecture hall
    "move left",  // quiet room
    "move right", // lecture hall
    "move right", // exam room, the goal is met
    "where",
];

// =============================================================================
// Winning Walkthrough
// =============================================================================

#[test]
fn the_walkthrough_wins_on_the_last_move() {
    let world = campus_world().unwrap();
    let player = campus_player(&world).unwrap();
    let mut game = Game::with_console(player, ScriptedConsole::new(WALKTHROUGH));

    game.play().unwrap();
    assert_eq!(
        game.console().outputs(),
        [
            "You are now in: restaurant",
            "You are now in: entrance_hall",
            "You are now in: restaurant",
            "You are now in: entrance_hall",
            "You are now in: library",
            "You are now in: mentoring_room",
            "Error: failed to execute 'move down': no exit down from mentoring_room",
            "You are now in: library",
            "You are now in: lecture_hall",
            "You are now in: quiet_room",
            "You are now in: lecture_hall",
            WINNING_MESSAGE
        ]
    );
    assert!(game.player().have_won());
    assert_eq!(game.player().current_room(), "exam_room");
    // The trailing `where` was never read
    assert_eq!(game.console().remaining_inputs(), 1);
}

#[test]
fn the_walkthrough_collects_two_textbooks() {
    let world = campus_world().unwrap();
    let player = campus_player(&world).unwrap();
    let mut game = Game::with_console(player, ScriptedConsole::new(WALKTHROUGH));

    game.play().unwrap();
    assert_eq!(
        game.player().state().bag(),
        ["textbook", "textbook"]
    );
}

#[test]
fn the_walkthrough_visits_seven_of_eight_rooms() {
    let world = campus_world().unwrap();
    let player = campus_player(&world).unwrap();
    let mut game = Game::with_console(player, ScriptedConsole::new(WALKTHROUGH));

    game.play().unwrap();
    let visited: Vec<&str> = game.player().state().visited().collect();
    assert_eq!(
        visited,
        vec![
            "entrance_hall",
            "exam_room",
            "lecture_hall",
            "library",
            "mentoring_room",
            "quiet_room",
            "restaurant"
        ]
    );
    assert!(!game.player().has_already_visited(["dormitory"]));
}

// =============================================================================
// Leaving Early
// =============================================================================

#[test]
fn quitting_mid_campus_keeps_the_bag() {
    let world = campus_world().unwrap();
    let player = campus_player(&world).unwrap();
    let console = ScriptedConsole::new(["move right", "quit", "move left"]);
    let mut game = Game::with_console(player, console);

    game.play().unwrap();
    assert_eq!(game.console().outputs(), ["You are now in: restaurant"]);
    assert_eq!(game.console().remaining_inputs(), 1);
    assert!(!game.player().have_won());
    assert_eq!(game.player().state().bag(), ["textbook"]);
}
