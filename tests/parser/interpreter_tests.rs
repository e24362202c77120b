//! Full interpreter pipeline tests

use std::num::NonZeroU32;
use std::sync::Arc;

use chillbox_foundation::ItemId;
use chillbox_parser::{
    CommandInterpreter, ItemCatalog, Operation, ParseFailureKind, Verb, VocabularyRegistry,
};

fn interpreter() -> CommandInterpreter {
    CommandInterpreter::new(Arc::new(ItemCatalog::standard().unwrap()))
}

fn add(item: &str, quantity: u32) -> Operation {
    Operation::Add {
        item: ItemId::new(item).unwrap(),
        quantity: NonZeroU32::new(quantity).unwrap(),
    }
}

fn remove(item: &str, quantity: u32) -> Operation {
    Operation::Remove {
        item: ItemId::new(item).unwrap(),
        quantity: NonZeroU32::new(quantity).unwrap(),
    }
}

fn set(item: &str, quantity: u32) -> Operation {
    Operation::Set {
        item: ItemId::new(item).unwrap(),
        quantity,
    }
}

fn failed(kind: ParseFailureKind) -> Operation {
    Operation::Unrecognized(kind)
}

// =============================================================================
// Documented Cases
// =============================================================================

#[test]
fn documented_transcripts() {
    let i = interpreter();
    let cases = [
        ("add chicken breast", add("chicken_breast", 1)),
        ("add 3 of chicken breast", add("chicken_breast", 3)),
        ("remove wings", remove("chicken_tenders", 1)),
        ("set steak to 4", set("steak", 4)),
        ("set steak to", failed(ParseFailureKind::MissingQuantity)),
        ("undo", Operation::Undo),
        ("what's the weather", failed(ParseFailureKind::UnknownVerb)),
    ];
    for (transcript, expected) in cases {
        assert_eq!(i.interpret(transcript), expected, "{transcript}");
    }
}

// =============================================================================
// Noisy Transcripts
// =============================================================================

#[test]
fn punctuation_and_case_are_ignored() {
    let i = interpreter();
    assert_eq!(
        i.interpret("Add two of the chicken breasts."),
        add("chicken_breast", 2)
    );
    assert_eq!(i.interpret("  SET   Ice Cream to 3!"), set("ice_cream", 3));
    assert_eq!(i.interpret("Undo that."), Operation::Undo);
}

#[test]
fn spoken_quantities() {
    let i = interpreter();
    assert_eq!(i.interpret("add a dozen nuggets"), add("chicken_nuggets", 12));
    assert_eq!(i.interpret("add twenty-five nuggets"), add("chicken_nuggets", 25));
    assert_eq!(i.interpret("add a few steaks"), add("steak", 3));
    assert_eq!(i.interpret("stock a couple of tilapia"), add("white_fish", 2));
    assert_eq!(i.interpret("take an ice cream tub"), remove("ice_cream", 1));
}

#[test]
fn longest_variant_decides_the_item() {
    let i = interpreter();
    assert_eq!(i.interpret("add 2 salmon steaks"), add("salmon", 2));
    assert_eq!(i.interpret("add beef short ribs"), add("beef_short_rib", 1));
}

#[test]
fn quantity_bounds() {
    let i = interpreter();
    assert_eq!(i.interpret("add 10000 steak"), add("steak", 10_000));
    assert_eq!(
        i.interpret("add 10001 steak"),
        failed(ParseFailureKind::InvalidQuantity)
    );
    assert_eq!(
        i.interpret("remove 0 salmon"),
        failed(ParseFailureKind::InvalidQuantity)
    );
    assert_eq!(i.interpret("set salmon to 0"), set("salmon", 0));
}

#[test]
fn quantity_may_follow_the_item() {
    let i = interpreter();
    assert_eq!(i.interpret("add steak 3"), add("steak", 3));
    assert_eq!(i.interpret("take the salmon two"), remove("salmon", 2));
    assert_eq!(i.interpret("add ice cream twenty-five"), add("ice_cream", 25));
}

#[test]
fn leftover_numbers_are_not_dropped() {
    let i = interpreter();
    assert_eq!(
        i.interpret("add 1 2 steak"),
        failed(ParseFailureKind::InvalidQuantity)
    );
    assert_eq!(
        i.interpret("add 2 of steak 3"),
        failed(ParseFailureKind::InvalidQuantity)
    );
    assert_eq!(
        i.interpret("add 5 peas 2"),
        failed(ParseFailureKind::InvalidQuantity)
    );
}

#[test]
fn unknown_items_are_not_salvaged() {
    let i = interpreter();
    assert_eq!(
        i.interpret("add 4 frozen peas"),
        failed(ParseFailureKind::UnknownItem)
    );
    assert_eq!(
        i.interpret("set frozen peas to 2"),
        failed(ParseFailureKind::UnknownItem)
    );
    assert_eq!(i.interpret(""), failed(ParseFailureKind::Empty));
}

// =============================================================================
// Custom Vocabulary
// =============================================================================

#[test]
fn custom_vocabulary() {
    let mut vocabulary = VocabularyRegistry::new();
    vocabulary.register_verb("chuck", Verb::Remove);
    vocabulary.register_undo_phrase("Oops!");

    let i = CommandInterpreter::with_vocabulary(
        Arc::new(ItemCatalog::standard().unwrap()),
        vocabulary,
    );
    assert_eq!(i.interpret("chuck the salmon"), remove("salmon", 1));
    assert_eq!(i.interpret("oops"), Operation::Undo);
    assert_eq!(
        i.interpret("add salmon"),
        failed(ParseFailureKind::UnknownVerb)
    );
    assert_eq!(i.interpret("undo"), failed(ParseFailureKind::UnknownVerb));
}
