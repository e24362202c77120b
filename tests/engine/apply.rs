//! Applying operations

use chillbox_engine::{ApplyResult, RejectionReason};
use chillbox_parser::ParseFailureKind;
use proptest::prelude::*;

use crate::{id, memory_controller, sqlite_controller};

// =============================================================================
// Results
// =============================================================================

#[test]
fn applied_result_carries_item_quantity_and_message() {
    let mut c = sqlite_controller();
    c.process("add 3 ground beef").unwrap();
    let result = c.process("add 2 beef").unwrap();

    assert_eq!(
        result,
        ApplyResult::Applied {
            item: id("ground_beef"),
            new_quantity: 5,
            message: "Added 2 ground beef, now have 5".to_string(),
        }
    );
}

#[test]
fn parse_failures_become_rejections() {
    let mut c = sqlite_controller();
    for (transcript, kind) in [
        ("", ParseFailureKind::Empty),
        ("sing a song", ParseFailureKind::UnknownVerb),
        ("add 2 frozen peas", ParseFailureKind::UnknownItem),
        ("set steak to", ParseFailureKind::MissingQuantity),
        ("add 0 steak", ParseFailureKind::InvalidQuantity),
    ] {
        let result = c.process(transcript).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::Parse(kind)), "{transcript}");
        assert!(!result.message().is_empty());
    }
    assert!(c.history().unwrap().is_empty());
    assert!(c.snapshot().unwrap().is_empty());
}

#[test]
fn set_then_read_yields_the_set_value() {
    let mut c = sqlite_controller();
    c.process("add 9 salmon").unwrap();
    c.process("set salmon to 2").unwrap();
    assert_eq!(c.snapshot().unwrap().quantity(&id("salmon")), 2);

    c.process("set steak to 0").unwrap();
    let snapshot = c.snapshot().unwrap();
    assert_eq!(snapshot.quantity(&id("steak")), 0);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.in_stock().count(), 1);
}

#[test]
fn over_removal_leaves_state_unchanged() {
    let mut c = sqlite_controller();
    c.process("add 2 wings").unwrap();
    let before = c.snapshot().unwrap();
    let history_before = c.history().unwrap();

    let result = c.process("remove 5 wings").unwrap();
    assert_eq!(result.rejection(), Some(RejectionReason::InsufficientQuantity));
    assert_eq!(c.snapshot().unwrap(), before);
    assert_eq!(c.history().unwrap(), history_before);
}

#[test]
fn removing_everything_reports_none_left() {
    let mut c = memory_controller();
    c.process("add 2 nuggets").unwrap();
    let result = c.process("remove two nuggets").unwrap();
    assert_eq!(result.new_quantity(), Some(0));
    assert_eq!(result.message(), "Removed 2 chicken nuggets, none left");
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn quantities_follow_each_command(commands in prop::collection::vec((0u8..4, 0u32..6), 0..30)) {
        let mut c = memory_controller();
        let steak = id("steak");
        for (verb, n) in commands {
            let before = c.quantity(&steak).unwrap();
            let transcript = match verb {
                0 => format!("add {} steak", n + 1),
                1 => format!("remove {} steak", n + 1),
                2 => format!("set steak to {n}"),
                _ => "undo".to_string(),
            };
            let result = c.process(&transcript).unwrap();
            let after = c.quantity(&steak).unwrap();
            match verb {
                0 => prop_assert_eq!(after, before + n + 1),
                1 if before > n => prop_assert_eq!(after, before - n - 1),
                1 => {
                    prop_assert_eq!(result.rejection(), Some(RejectionReason::InsufficientQuantity));
                    prop_assert_eq!(after, before);
                }
                2 => prop_assert_eq!(after, n),
                _ => {}
            }
        }
    }
}
