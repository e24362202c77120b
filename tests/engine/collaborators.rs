//! Collaborator notification

use std::cell::RefCell;
use std::rc::Rc;

use chillbox_engine::{ApplyResult, InventoryController};
use chillbox_storage::{MemoryStore, Snapshot};

use crate::interpreter;

#[test]
fn every_processed_transcript_is_announced_and_rendered() {
    let messages = Rc::new(RefCell::new(Vec::<String>::new()));
    let grids = Rc::new(RefCell::new(Vec::<Vec<(String, u32)>>::new()));

    let m = Rc::clone(&messages);
    let g = Rc::clone(&grids);
    let mut c = InventoryController::new(interpreter(), MemoryStore::new())
        .with_feedback(move |result: &ApplyResult| m.borrow_mut().push(result.message().into()))
        .with_display(move |snapshot: &Snapshot| {
            g.borrow_mut().push(
                snapshot
                    .in_stock()
                    .map(|r| (r.item.to_string(), r.quantity))
                    .collect(),
            );
        });

    c.process("add 2 salmon").unwrap();
    c.process("remove 5 salmon").unwrap();
    c.process("undo").unwrap();

    assert_eq!(
        *messages.borrow(),
        vec![
            "Added 2 salmon, now have 2".to_string(),
            "Cannot remove 5 salmon, only have 2".to_string(),
            "Undid last change, salmon back to 0".to_string(),
        ]
    );
    assert_eq!(
        *grids.borrow(),
        vec![
            vec![("salmon".to_string(), 2)],
            vec![("salmon".to_string(), 2)],
            vec![],
        ]
    );
}

#[test]
fn apply_alone_does_not_notify() {
    let count = Rc::new(RefCell::new(0));
    let n = Rc::clone(&count);
    let mut c = InventoryController::new(interpreter(), MemoryStore::new())
        .with_feedback(move |_: &ApplyResult| *n.borrow_mut() += 1);

    let operation = c.interpreter().interpret("add steak");
    c.apply(&operation).unwrap();
    assert_eq!(*count.borrow(), 0);

    c.process("add steak").unwrap();
    assert_eq!(*count.borrow(), 1);
}
