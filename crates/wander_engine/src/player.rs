//! Player state and the command dispatch pipeline.

use std::collections::BTreeSet;

use wander_world::{Direction, Error, Result, Visitor, World};

use crate::command::{Command, CommandContext, CommandTable, Outcome};
use crate::goal::WinCondition;

/// Everything a session mutates about the player: position, travel
/// history, and the bag.
///
/// The visited set only grows and always contains the current room. The
/// bag is an ordered multiset; picking up two of a thing keeps two.
#[derive(Clone, Debug)]
pub struct PlayerState {
    room: String,
    visited: BTreeSet<String>,
    bag: Vec<String>,
}

impl PlayerState {
    /// Creates a state positioned in (and having visited) the start room.
    #[must_use]
    pub fn new(start: impl Into<String>) -> Self {
        let room = start.into();
        let mut visited = BTreeSet::new();
        visited.insert(room.clone());
        Self {
            room,
            visited,
            bag: Vec::new(),
        }
    }

    /// The name of the room the player is currently in.
    #[must_use]
    pub fn current_room(&self) -> &str {
        &self.room
    }

    /// Moves the player to `room` and records the visit.
    pub fn enter_room(&mut self, room: &str) {
        self.room = room.to_string();
        self.visited.insert(self.room.clone());
    }

    /// Returns true if every named room has been visited.
    #[must_use]
    pub fn has_already_visited<'a, I>(&self, rooms: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        rooms.into_iter().all(|room| self.visited.contains(room))
    }

    /// All visited room names, in sorted order.
    pub fn visited(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }

    /// The items currently carried, in pickup order.
    #[must_use]
    pub fn bag(&self) -> &[String] {
        &self.bag
    }
}

impl Visitor for PlayerState {
    fn add_to_bag(&mut self, item: &str) {
        self.bag.push(item.to_string());
    }

    fn is_in_bag(&self, item: &str) -> bool {
        self.bag.iter().any(|held| held == item)
    }
}

/// A player bound to a world: the state, the command table, and the goal.
///
/// The world is borrowed immutably for the whole session; commands mutate
/// only the player's own state.
#[derive(Debug)]
pub struct Player<'w> {
    world: &'w World,
    state: PlayerState,
    commands: CommandTable,
    goal: WinCondition,
}

impl<'w> Player<'w> {
    /// Creates a player in `start` with the built-in commands and no goal.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not a room in `world`.
    pub fn new(world: &'w World, start: &str) -> Result<Self> {
        world.get_room(start)?;
        Ok(Self {
            world,
            state: PlayerState::new(start),
            commands: CommandTable::builtin(),
            goal: WinCondition::never(),
        })
    }

    /// Sets the win condition.
    #[must_use]
    pub fn with_goal(mut self, goal: WinCondition) -> Self {
        self.goal = goal;
        self
    }

    /// Registers an extra command, overriding any existing one by name.
    #[must_use]
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.register(command);
        self
    }

    /// Replaces the whole command table.
    #[must_use]
    pub fn with_commands(mut self, commands: CommandTable) -> Self {
        self.commands = commands;
        self
    }

    /// Executes one line of user input.
    ///
    /// The first whitespace-separated token names the command; the rest
    /// are its arguments. Command names are matched exactly; direction
    /// arguments are matched case-insensitively by their own parser.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedCommand`] if the first token names no
    ///   registered command (empty input degenerates to this too).
    /// - [`Error::FailedToExecuteAction`] if the argument count is wrong
    ///   or the command's preconditions fail.
    pub fn execute_user_command(&mut self, input: &str) -> Result<Outcome> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Err(Error::unsupported_command(input.trim()));
        };
        let Some(command) = self.commands.get(name) else {
            return Err(Error::unsupported_command(name));
        };
        if args.len() != command.arity() {
            return Err(Error::failed_to_execute_action(
                input.trim(),
                format!(
                    "'{name}' takes {} argument(s), got {}",
                    command.arity(),
                    args.len()
                ),
            ));
        }

        let mut ctx = CommandContext {
            world: self.world,
            state: &mut self.state,
            goal: &self.goal,
            commands: &self.commands,
        };
        match command.execute(&mut ctx, args) {
            Err(Error::CommandCannotBeExecuted(reason)) => {
                Err(Error::failed_to_execute_action(input.trim(), reason))
            }
            other => other,
        }
    }

    /// Returns true if the session's win condition is currently met.
    #[must_use]
    pub fn have_won(&self) -> bool {
        self.goal.is_met(&self.state)
    }

    /// The world this player walks.
    #[must_use]
    pub const fn world(&self) -> &'w World {
        self.world
    }

    /// The player's current state.
    #[must_use]
    pub const fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The name of the room the player is currently in.
    #[must_use]
    pub fn current_room(&self) -> &str {
        self.state.current_room()
    }

    /// Adds an item to the player's bag.
    pub fn add_to_bag(&mut self, item: &str) {
        self.state.add_to_bag(item);
    }

    /// Returns true if the bag holds at least one such item.
    #[must_use]
    pub fn is_in_bag(&self, item: &str) -> bool {
        self.state.is_in_bag(item)
    }

    /// Returns true if every named room has been visited.
    #[must_use]
    pub fn has_already_visited<'a, I>(&self, rooms: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.state.has_already_visited(rooms)
    }

    /// All registered command names, in sorted order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.names()
    }

    /// Words worth offering at a prompt: command names, then both
    /// spellings of every direction.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        let mut words: Vec<String> = self.commands.names().map(String::from).collect();
        for direction in Direction::ALL {
            words.push(direction.compass_name().to_string());
            words.push(direction.alias().to_string());
        }
        words
    }
}
