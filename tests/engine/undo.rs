//! Multi-step undo

use chillbox_engine::RejectionReason;
use chillbox_foundation::OperationKind;

use crate::{id, memory_controller, sqlite_controller};

#[test]
fn undo_sequence_from_empty() {
    let mut c = sqlite_controller();
    let x = id("chicken_breast");

    c.process("add 2 chicken breast").unwrap();
    c.process("add 3 chicken breast").unwrap();

    c.process("undo").unwrap();
    assert_eq!(c.quantity(&x).unwrap(), 2);

    c.process("undo").unwrap();
    assert_eq!(c.quantity(&x).unwrap(), 0);

    let result = c.process("undo").unwrap();
    assert_eq!(result.rejection(), Some(RejectionReason::NothingToUndo));
    assert_eq!(c.quantity(&x).unwrap(), 0);
}

#[test]
fn undo_restores_a_set_even_when_unchanged() {
    let mut c = memory_controller();
    c.process("add 4 salmon").unwrap();
    c.process("set salmon to 4").unwrap();

    let history = c.history().unwrap();
    assert_eq!(history.last().unwrap().kind, OperationKind::Set);

    c.process("undo").unwrap();
    assert_eq!(c.quantity(&id("salmon")).unwrap(), 4);
    c.process("undo").unwrap();
    assert_eq!(c.quantity(&id("salmon")).unwrap(), 0);
}

#[test]
fn rejected_operations_are_not_undone() {
    let mut c = sqlite_controller();
    c.process("add steak").unwrap();
    c.process("remove 3 steak").unwrap();
    c.process("add peas").unwrap();

    c.process("undo").unwrap();
    assert_eq!(c.quantity(&id("steak")).unwrap(), 0);
    assert!(c.history().unwrap().is_empty());
}

#[test]
fn undo_crosses_items_in_creation_order() {
    let mut c = sqlite_controller();
    c.process("add 2 salmon").unwrap();
    c.process("add 1 steak").unwrap();
    c.process("remove salmon").unwrap();

    let result = c.process("revert").unwrap();
    assert_eq!(result.item(), Some(&id("salmon")));
    assert_eq!(result.new_quantity(), Some(2));

    let result = c.process("undo that").unwrap();
    assert_eq!(result.item(), Some(&id("steak")));
    assert_eq!(result.new_quantity(), Some(0));

    assert_eq!(c.quantity(&id("salmon")).unwrap(), 2);
    assert_eq!(c.history().unwrap().len(), 1);
}
