//! The interactive console.
//!
//! Each line is treated as a transcript, exactly as the speech collaborator
//! would deliver it. Lines starting with `:` are console commands.

use std::io::{self, Write};

use chillbox_engine::InventoryController;
use chillbox_foundation::{Error, Result};
use chillbox_parser::CommandInterpreter;
use chillbox_storage::InventoryStore;

use crate::console::{render_grid, render_history};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Console commands, typed with a leading `:`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MetaCommand {
    Inventory,
    History,
    Help,
    Quit,
}

impl MetaCommand {
    const ALL: [&'static str; 4] = [":inventory", ":history", ":help", ":quit"];

    fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "inventory" | "inv" | "i" => Some(Self::Inventory),
            "history" | "h" => Some(Self::History),
            "help" | "?" => Some(Self::Help),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The interactive REPL.
pub struct Repl<S, E: LineEditor = RustylineEditor> {
    /// Applies transcripts
    controller: InventoryController<S>,

    /// Line input
    editor: E,

    /// Threshold for the `low` marker in `:inventory`
    low_stock_threshold: u32,

    /// Whether to show the welcome banner
    show_banner: bool,

    /// Primary prompt
    prompt: String,
}

impl<S: InventoryStore> Repl<S, RustylineEditor> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal editor fails to initialise.
    pub fn new(controller: InventoryController<S>) -> Result<Self> {
        Ok(Self::with_editor(controller, RustylineEditor::new()?))
    }
}

impl<S: InventoryStore, E: LineEditor> Repl<S, E> {
    /// Creates a REPL reading from `editor`.
    pub fn with_editor(controller: InventoryController<S>, mut editor: E) -> Self {
        editor.set_completions(completion_words(controller.interpreter()));
        Self {
            controller,
            editor,
            low_stock_threshold: 2,
            show_banner: true,
            prompt: "chillbox> ".to_string(),
        }
    }

    /// Sets the threshold used by `:inventory`.
    #[must_use]
    pub const fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the controller.
    #[must_use]
    pub const fn controller(&self) -> &InventoryController<S> {
        &self.controller
    }

    /// Runs until `:quit` or EOF.
    ///
    /// Storage faults are printed and the loop continues; the failed command
    /// had no effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if !line.trim().is_empty() {
                self.editor.add_history(&line);
            }

            match self.handle(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Handles one line. Returns `Ok(false)` when the user asked to quit.
    ///
    /// # Errors
    ///
    /// Returns a storage fault from the controller.
    pub fn handle(&mut self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        if let Some(name) = line.strip_prefix(':') {
            let Some(command) = MetaCommand::parse(name) else {
                eprintln!("Unknown command :{name}. Try :help");
                return Ok(true);
            };
            return self.run_meta(command);
        }

        self.controller.process(line)?;
        Ok(true)
    }

    /// Runs a console command. Returns `Ok(false)` for `:quit`.
    fn run_meta(&self, command: MetaCommand) -> Result<bool> {
        let text = match command {
            MetaCommand::Quit => return Ok(false),
            MetaCommand::Inventory => {
                render_grid(&self.controller.snapshot()?, self.low_stock_threshold)
            }
            MetaCommand::History => render_history(&self.controller.history()?),
            MetaCommand::Help => help_text(),
        };
        print!("{text}");
        let _ = io::stdout().flush();
        Ok(true)
    }
}

/// Words offered for tab completion: verbs, item words and console commands.
fn completion_words(interpreter: &CommandInterpreter) -> Vec<String> {
    let mut words: Vec<String> = interpreter
        .vocabulary()
        .verb_words()
        .into_iter()
        .map(str::to_string)
        .collect();
    words.push("undo".to_string());
    for item in interpreter.normalizer().catalog().items() {
        for variant in &item.variants {
            words.extend(variant.split(' ').map(str::to_string));
        }
    }
    words.extend(MetaCommand::ALL.iter().map(|c| (*c).to_string()));
    words
}

fn help_text() -> String {
    "Say what changed, for example:
  add 2 of chicken breast
  remove a steak
  set ice cream to 3
  undo

Commands:
  :inventory   Show what is in stock
  :history     Show changes that can be undone
  :help        Show this help
  :quit        Exit (Ctrl+D also works)
"
    .to_string()
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
    if let Some(context) = &error.context {
        eprintln!("\x1b[2m  {context}\x1b[0m");
    }
}

fn print_banner() {
    println!("\x1b[1;36mChillbox\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Type what you would say to the freezer. :help for commands, Ctrl+D to exit.\n");
}
