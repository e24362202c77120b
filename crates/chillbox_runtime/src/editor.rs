//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`], so tests can script input and the
//! terminal backend (rustyline) stays swappable.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter};

use chillbox_foundation::{Error, ErrorKind, Result};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);

    /// Replaces the words offered for tab completion.
    fn set_completions(&mut self, words: Vec<String>);
}

#[derive(Helper, Completer, Hinter)]
struct ChillboxHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ChillboxHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

impl Validator for ChillboxHelper {}

/// Completes the word under the cursor from a fixed vocabulary.
#[derive(Debug, Default)]
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let word_len: usize = head
            .chars()
            .rev()
            .take_while(|c| !c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        let start = head.len() - word_len;
        let word = head[start..].to_lowercase();
        let matches = self
            .words
            .iter()
            .filter(|candidate| candidate.starts_with(&word))
            .cloned()
            .collect();
        (start, matches)
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
        let (start, words) = self.candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<ChillboxHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a terminal editor.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(500)
            .map_err(io_error)?
            .build();

        let mut editor = Editor::with_config(config).map_err(io_error)?;
        editor.set_helper(Some(ChillboxHelper {
            completer: WordCompleter::default(),
            hinter: HistoryHinter::new(),
        }));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(io_error(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, mut words: Vec<String>) {
        words.sort_unstable();
        words.dedup();
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = words;
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn io_error(err: ReadlineError) -> Error {
    Error::new(ErrorKind::Io(err.to_string()))
}
