//! Commands: the verbs a player can execute and the table that holds them.
//!
//! A [`Command`] pairs a name with declared parameters and a boxed handler.
//! The [`CommandTable`] maps names to commands deterministically; merging a
//! table of overrides over the built-ins is explicit and last-write-wins.

use std::collections::BTreeMap;
use std::fmt;

use wander_world::{Direction, Error, Result, World};

use crate::goal::WinCondition;
use crate::player::PlayerState;

/// What a successfully executed command asks the session to do next.
///
/// Winning and quitting are ordinary return values here. Ending the
/// session is the game loop's job, never the command's.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep playing.
    Message(String),
    /// The win condition is met; the session is over.
    Won,
    /// The player asked to stop; the session is over.
    Quit,
}

/// The state a command handler may read and mutate.
pub struct CommandContext<'a> {
    /// The immutable world graph.
    pub world: &'a World,
    /// The player's mutable state.
    pub state: &'a mut PlayerState,
    /// The session's win condition, checked after movement.
    pub goal: &'a WinCondition,
    /// The full command table, for commands that enumerate commands.
    pub commands: &'a CommandTable,
}

/// Handler invoked once a command's name and arity match the input.
pub type CommandFn = Box<dyn Fn(&mut CommandContext<'_>, &[&str]) -> Result<Outcome>>;

/// A named command with declared parameters and a handler.
pub struct Command {
    name: String,
    params: Vec<String>,
    action: CommandFn,
}

impl Command {
    /// Creates a command with the given name and handler.
    #[must_use]
    pub fn new(name: impl Into<String>, action: CommandFn) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            action,
        }
    }

    /// Declares the positional parameters this command expects.
    #[must_use]
    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }

    /// The command's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameter names.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The number of arguments this command expects.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Runs the handler against the given context and arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler produces.
    pub fn execute(&self, ctx: &mut CommandContext<'_>, args: &[&str]) -> Result<Outcome> {
        (self.action)(ctx, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Registry of all commands available in a session.
#[derive(Debug, Default)]
pub struct CommandTable {
    entries: BTreeMap<String, Command>,
}

impl CommandTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a table holding the built-in commands:
    /// `move`, `quit`, `ls`, and `where`.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.register(
            Command::new("move", Box::new(execute_move))
                .with_params(vec!["direction".to_string()]),
        );
        table.register(Command::new("quit", Box::new(execute_quit)));
        table.register(Command::new("ls", Box::new(execute_ls)));
        table.register(Command::new("where", Box::new(execute_where)));
        table
    }

    /// Registers a command, replacing any existing command with the same name.
    pub fn register(&mut self, command: Command) {
        self.entries.insert(command.name().to_string(), command);
    }

    /// Folds `overrides` into this table; same-named entries are replaced.
    pub fn merge(&mut self, overrides: Self) {
        for (name, command) in overrides.entries {
            self.entries.insert(name, command);
        }
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.entries.get(name)
    }

    /// Returns true if a command with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All command names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Moves the player one room in the given direction.
///
/// On landing: the visit is recorded, the destination's on-enter hook
/// fires, and the win condition is checked, in that order.
fn execute_move(ctx: &mut CommandContext<'_>, args: &[&str]) -> Result<Outcome> {
    let world = ctx.world;
    let Some(&token) = args.first() else {
        return Err(Error::command_cannot_be_executed("move requires a direction"));
    };
    let Some(direction) = Direction::from_token(token) else {
        return Err(Error::command_cannot_be_executed(format!(
            "unknown direction '{token}'"
        )));
    };

    let here = world.get_room(ctx.state.current_room())?;
    let Some(destination) = here.get_neighbor(direction) else {
        return Err(Error::command_cannot_be_executed(format!(
            "no exit {direction} from {}",
            ctx.state.current_room()
        )));
    };

    let destination_room = world.get_room(destination)?;
    ctx.state.enter_room(destination);
    destination_room.enter(ctx.state);

    if ctx.goal.is_met(ctx.state) {
        return Ok(Outcome::Won);
    }
    Ok(Outcome::Message(format!("You are now in: {destination}")))
}

/// Ends the session at the player's request.
fn execute_quit(_ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Outcome> {
    Ok(Outcome::Quit)
}

/// Lists every registered command name.
fn execute_ls(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Outcome> {
    let names: Vec<&str> = ctx.commands.names().collect();
    Ok(Outcome::Message(format!(
        "Available commands: {}",
        names.join(", ")
    )))
}

/// Describes the current room, its exits, and the travel history.
fn execute_where(ctx: &mut CommandContext<'_>, _args: &[&str]) -> Result<Outcome> {
    let world = ctx.world;
    let name = ctx.state.current_room();
    let room = world.get_room(name)?;

    let exits: Vec<&str> = room.neighboring_directions().map(Direction::alias).collect();
    let exits = if exits.is_empty() {
        "none".to_string()
    } else {
        exits.join(", ")
    };
    let visited: Vec<&str> = ctx.state.visited().collect();

    Ok(Outcome::Message(format!(
        "You are in: {name}\n{}\nExits: {exits}\nVisited: {}",
        room.description(),
        visited.join(", ")
    )))
}
