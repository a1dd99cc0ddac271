//! Rooms: descriptions, exits, and entry behavior.

use std::collections::BTreeMap;
use std::fmt;

use crate::direction::Direction;
use crate::error::{Error, Result};

/// The mutation surface a room may touch when somebody enters it.
///
/// Implemented by the engine's player state. Keeping it a trait lets room
/// behavior live below the player representation in the crate graph.
pub trait Visitor {
    /// Adds an item to the visitor's bag. Duplicates are kept.
    fn add_to_bag(&mut self, item: &str);

    /// Returns true if the bag holds at least one such item.
    fn is_in_bag(&self, item: &str) -> bool;
}

/// Side effect fired each time a visitor enters a room.
pub type EnterHook = Box<dyn Fn(&mut dyn Visitor)>;

/// A location in the world.
///
/// Exits are keyed by direction and map to the neighbor's room name; at
/// most one neighbor per direction. A room does not guarantee that its
/// neighbors point back - reciprocity is [`World::connect_rooms`]'s job.
///
/// [`World::connect_rooms`]: crate::world::World::connect_rooms
pub struct Room {
    description: String,
    neighbors: BTreeMap<Direction, String>,
    on_enter: Option<EnterHook>,
}

impl Room {
    /// Creates a room with the given description and no exits.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            neighbors: BTreeMap::new(),
            on_enter: None,
        }
    }

    /// Attaches a hook fired on every entry, including re-entries.
    #[must_use]
    pub fn with_enter_hook(mut self, hook: EnterHook) -> Self {
        self.on_enter = Some(hook);
        self
    }

    /// The room's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Registers `room` as the neighbor in `direction`, replacing any
    /// existing exit in that direction.
    pub fn add_neighbor(&mut self, direction: Direction, room: impl Into<String>) {
        self.neighbors.insert(direction, room.into());
    }

    /// Removes the exit in `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if no exit is registered in that direction.
    pub fn remove_neighbor(&mut self, direction: Direction) -> Result<()> {
        match self.neighbors.remove(&direction) {
            Some(_) => Ok(()),
            None => Err(Error::exit_does_not_exist(direction)),
        }
    }

    /// Looks up the neighbor name in `direction`, if any.
    #[must_use]
    pub fn get_neighbor(&self, direction: Direction) -> Option<&str> {
        self.neighbors.get(&direction).map(String::as_str)
    }

    /// The directions with a registered exit, in deterministic order.
    pub fn neighboring_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.neighbors.keys().copied()
    }

    /// Returns true if this room fires a hook on entry.
    #[must_use]
    pub const fn has_enter_hook(&self) -> bool {
        self.on_enter.is_some()
    }

    /// Runs the on-enter hook against the visitor, if one is attached.
    ///
    /// Safe to call on every entry; a hookless room is a no-op.
    pub fn enter(&self, visitor: &mut dyn Visitor) {
        if let Some(hook) = &self.on_enter {
            hook(visitor);
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Room")
            .field("description", &self.description)
            .field("neighbors", &self.neighbors)
            .field("on_enter", &self.on_enter.as_ref().map(|_| "<hook>"))
            .finish()
    }
}
