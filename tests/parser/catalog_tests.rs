//! Catalog construction tests

use chillbox_foundation::{ErrorKind, ItemId};
use chillbox_parser::{CatalogBuilder, ItemCatalog};

fn id(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

// =============================================================================
// Standard Catalog
// =============================================================================

#[test]
fn standard_catalog_items() {
    let catalog = ItemCatalog::standard().unwrap();
    let ids: Vec<&str> = catalog.items().map(|item| item.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "ground_beef",
            "beef_short_rib",
            "steak",
            "chicken_breast",
            "chicken_tenders",
            "chicken_nuggets",
            "white_fish",
            "salmon",
            "ground_turkey",
            "ice_cream",
        ]
    );
}

#[test]
fn display_names_are_variants() {
    let catalog = ItemCatalog::standard().unwrap();
    for item in catalog.items() {
        assert_eq!(item.variants[0], item.id.display_name());
        assert_eq!(catalog.lookup_exact(&item.id.display_name()), Some(&item.id));
    }
}

#[test]
fn wings_belong_to_tenders() {
    let catalog = ItemCatalog::standard().unwrap();
    assert_eq!(catalog.lookup_exact("wings"), Some(&id("chicken_tenders")));
}

// =============================================================================
// Builder
// =============================================================================

#[test]
fn conflicting_variant_is_rejected() {
    let mut builder = CatalogBuilder::new();
    builder.add_item(id("steak"), ["ribeye"]).unwrap();
    let err = builder.add_item(id("pork_chop"), ["Ribeye"]).unwrap_err();
    match err.kind {
        ErrorKind::DuplicateVariant {
            variant,
            first,
            second,
        } => {
            assert_eq!(variant, "ribeye");
            assert_eq!(first, "steak");
            assert_eq!(second, "pork_chop");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_registration_leaves_builder_unchanged() {
    let mut builder = CatalogBuilder::new();
    builder.add_item(id("steak"), ["ribeye"]).unwrap();
    assert!(builder.add_item(id("pork_chop"), ["chops", "ribeye"]).is_err());

    let catalog = builder.build();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.lookup_exact("chops"), None);
}

#[test]
fn extending_the_standard_catalog() {
    let mut builder = CatalogBuilder::standard().unwrap();
    builder.add_item(id("pork_chop"), ["pork chops"]).unwrap();
    builder.add_item(id("salmon"), ["lox"]).unwrap();
    let catalog = builder.build();

    assert_eq!(catalog.len(), 11);
    assert_eq!(catalog.lookup_exact("lox"), Some(&id("salmon")));
    assert!(catalog.contains(&id("pork_chop")));
}
