//! Ready-made worlds for the shipped games.
//!
//! Two maps: a three-room tour for a first contact with the commands, and
//! a small campus whose goal takes a dozen moves to reach.

use wander_engine::{Player, WinCondition};
use wander_world::{Direction, Result, Visitor, World};

/// Builds the tour: a lecture theater with the campus pub to the north
/// and a classroom to the east.
///
/// # Errors
///
/// Returns an error if the room wiring fails.
pub fn tour_world() -> Result<World> {
    let mut world = World::new();
    world.add_room("theater", "a lecture theater")?;
    world.add_room("pub", "the campus pub")?;
    world.add_room("classroom1", "a small classroom")?;

    world.connect_rooms("theater", "pub", Direction::North)?;
    world.connect_rooms("theater", "classroom1", Direction::East)?;
    Ok(world)
}

/// Creates the tour player: start in the theater, win by reaching the
/// classroom.
///
/// # Errors
///
/// Returns an error if the start room is missing from `world`.
pub fn tour_player(world: &World) -> Result<Player<'_>> {
    Ok(Player::new(world, "theater")?.with_goal(WinCondition::new(|state| {
        state.has_already_visited(["classroom1"])
    })))
}

/// Builds the campus: eight rooms around an entrance hall. The restaurant
/// hands a textbook to everyone who walks in.
///
/// # Errors
///
/// Returns an error if the room wiring fails.
pub fn campus_world() -> Result<World> {
    let mut world = World::new();
    world.add_room("entrance_hall", "the entrance hall of the campus")?;
    world.add_room("library", "the library, shelves from floor to ceiling")?;
    world.add_room_with(
        "restaurant",
        "the campus restaurant, a forgotten textbook on every table",
        Box::new(|visitor: &mut dyn Visitor| visitor.add_to_bag("textbook")),
    )?;
    world.add_room("lecture_hall", "a vast lecture hall")?;
    world.add_room("mentoring_room", "the mentoring room, one door in and out")?;
    world.add_room("quiet_room", "the quiet room, not a sound")?;
    world.add_room("exam_room", "the exam room, rows of empty desks")?;
    world.add_room("dormitory", "the dormitory, beds all in a row")?;

    world.connect_rooms("entrance_hall", "restaurant", Direction::East)?;
    world.connect_rooms("entrance_hall", "library", Direction::North)?;
    world.connect_rooms("entrance_hall", "dormitory", Direction::South)?;
    world.connect_rooms("library", "mentoring_room", Direction::East)?;
    world.connect_rooms("library", "lecture_hall", Direction::North)?;
    world.connect_rooms("lecture_hall", "quiet_room", Direction::West)?;
    world.connect_rooms("lecture_hall", "exam_room", Direction::East)?;
    Ok(world)
}

/// Creates the campus player: start in the entrance hall, win by sitting
/// the exam after a mentoring visit, textbook in hand.
///
/// # Errors
///
/// Returns an error if the start room is missing from `world`.
pub fn campus_player(world: &World) -> Result<Player<'_>> {
    Ok(Player::new(world, "entrance_hall")?.with_goal(WinCondition::new(|state| {
        state.has_already_visited(["exam_room", "mentoring_room"]) && state.is_in_bag("textbook")
    })))
}
