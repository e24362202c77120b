//! Settings, batch processing and the console

use std::io::Cursor;

use chillbox_foundation::{ItemId, Result};
use chillbox_runtime::{LineEditor, ReadResult, Repl, Settings, open_controller, run_batch};

/// Editor replaying fixed lines.
struct Script(std::vec::IntoIter<&'static str>);

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .0
            .next()
            .map_or(ReadResult::Eof, |line| ReadResult::Line(line.to_string())))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _words: Vec<String>) {}
}

fn settings(extra: &str) -> Settings {
    Settings::from_toml(&format!("[database]\npath = \":memory:\"\n{extra}")).unwrap()
}

#[test]
fn batch_file_with_configured_items() {
    let settings = settings("[catalog.items]\nfish_sticks = [\"fish fingers\"]\n");
    let mut c = open_controller(&settings).unwrap();

    let input = "\
# Saturday shop
add 10 fish fingers
add a tub of ice cream
remove 3 fish sticks
remove 2 ice cream
";
    let summary = run_batch(&mut c, Cursor::new(input)).unwrap();
    assert_eq!(summary.applied, 3);
    assert_eq!(summary.rejected, 1);

    let snapshot = c.snapshot().unwrap();
    assert_eq!(snapshot.quantity(&ItemId::new("fish_sticks").unwrap()), 7);
    assert_eq!(snapshot.quantity(&ItemId::new("ice_cream").unwrap()), 1);
}

#[test]
fn console_session() {
    let c = open_controller(&settings("")).unwrap();
    let script = Script(
        vec![
            "add 2 of chicken breast",
            ":inventory",
            "remove chicken breast",
            "undo",
            ":history",
            ":quit",
            "add 50 chicken breast",
        ]
        .into_iter(),
    );

    let mut repl = Repl::with_editor(c, script).without_banner();
    repl.run().unwrap();

    let breast = ItemId::new("chicken_breast").unwrap();
    assert_eq!(repl.controller().quantity(&breast).unwrap(), 2);
    assert_eq!(repl.controller().history().unwrap().len(), 1);
}
