//! Console abstraction for the game loop.
//!
//! This module provides a trait-based abstraction over terminal I/O,
//! allowing the game loop to use rustyline interactively while tests and
//! benchmarks drive it from a script.

use std::borrow::Cow;
use std::collections::VecDeque;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer as RLCompleter, Config, Context, Editor, Helper, Hinter};

use wander_world::{Error, Result};

/// Result of reading a line from the console.
#[derive(Debug)]
pub enum ReadEvent {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over the session's input and output.
///
/// This trait allows swapping out the terminal implementation without
/// changing the game loop.
pub trait GameConsole {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent>;

    /// Writes one line of output.
    fn write_line(&mut self, text: &str);

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);

    /// Sets the words offered by tab completion.
    fn set_vocabulary(&mut self, words: Vec<String>);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, RLCompleter, Hinter)]
struct ConsoleHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Validator for ConsoleHelper {}

impl Highlighter for ConsoleHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer over the session's vocabulary.
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    const fn new() -> Self {
        Self { words: Vec::new() }
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        let word = &line[start..pos];

        let candidates: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Start of the word being typed at `pos`.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1)
}

/// Interactive console backed by rustyline.
pub struct RustylineConsole {
    editor: Editor<ConsoleHelper, DefaultHistory>,
}

impl RustylineConsole {
    /// Creates a new rustyline-backed console.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not
    /// happen with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = ConsoleHelper {
            completer: WordCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl GameConsole for RustylineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadEvent::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_vocabulary(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = words;
        }
    }
}

/// Scripted console for tests and benchmarks.
///
/// Replays a fixed list of input lines and records everything written.
/// Reading past the end of the script behaves like Ctrl+D.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will replay `inputs` in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: Vec::new(),
        }
    }

    /// Everything written so far, in order.
    #[must_use]
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// The number of scripted inputs not yet consumed.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl GameConsole for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadEvent> {
        match self.inputs.pop_front() {
            Some(line) => Ok(ReadEvent::Line(line)),
            None => Ok(ReadEvent::Eof),
        }
    }

    fn write_line(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_vocabulary(&mut self, _words: Vec<String>) {}
}
