//! The world: a named registry of rooms and the connections between them.

use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::room::{EnterHook, Room};

/// A registry of rooms keyed by unique name.
///
/// The world owns every room; rooms refer to each other by name. Lookup of
/// an unknown name is always an error, never a silent default.
#[derive(Debug, Default)]
pub struct World {
    rooms: BTreeMap<String, Room>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room under a unique name.
    ///
    /// # Errors
    ///
    /// Returns an error if a room with this name already exists.
    pub fn add_room(&mut self, name: impl Into<String>, description: impl Into<String>) -> Result<()> {
        self.insert_room(name.into(), Room::new(description))
    }

    /// Adds a room that fires `on_enter` each time it is entered.
    ///
    /// # Errors
    ///
    /// Returns an error if a room with this name already exists.
    pub fn add_room_with(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        on_enter: EnterHook,
    ) -> Result<()> {
        self.insert_room(name.into(), Room::new(description).with_enter_hook(on_enter))
    }

    fn insert_room(&mut self, name: String, room: Room) -> Result<()> {
        if self.rooms.contains_key(&name) {
            return Err(Error::room_already_exists(name));
        }
        self.rooms.insert(name, room);
        Ok(())
    }

    /// Looks up a room by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no room with this name exists.
    pub fn get_room(&self, name: &str) -> Result<&Room> {
        self.rooms
            .get(name)
            .ok_or_else(|| Error::room_does_not_exist(name))
    }

    /// Looks up a room by name for mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if no room with this name exists.
    pub fn get_room_mut(&mut self, name: &str) -> Result<&mut Room> {
        self.rooms
            .get_mut(name)
            .ok_or_else(|| Error::room_does_not_exist(name))
    }

    /// Connects two rooms both ways: `to` lies in `direction` from `from`,
    /// and `from` lies in the opposite direction from `to`.
    ///
    /// Existing exits in the affected directions are replaced. Both rooms
    /// are validated before either side is wired, so a failed connection
    /// leaves the graph untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if either room does not exist.
    pub fn connect_rooms(&mut self, from: &str, to: &str, direction: Direction) -> Result<()> {
        if !self.rooms.contains_key(to) {
            return Err(Error::room_does_not_exist(to));
        }
        self.get_room_mut(from)?.add_neighbor(direction, to);
        self.get_room_mut(to)?.add_neighbor(direction.opposite(), from);
        Ok(())
    }

    /// Returns true if a room with this name exists.
    #[must_use]
    pub fn contains_room(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All room names, in sorted order.
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }
}
