//! Standard vocabulary for a household freezer.
//!
//! Contains the default item catalog and verb words. Extra items can be
//! layered on top through configuration; these tables are never mutated.

/// Standard canonical items and their variant phrases.
///
/// The display name of each identifier (`ground beef` for `ground_beef`) is
/// always recognized, so it is not repeated here.
pub const ITEMS: &[(&str, &[&str])] = &[
    // Beef
    ("ground_beef", &["beef", "ground meat"]),
    (
        "beef_short_rib",
        &[
            "short rib",
            "short ribs",
            "beef ribs",
            "beef short ribs",
            "short rib beef",
            "ribs",
        ],
    ),
    (
        "steak",
        &[
            "steaks",
            "sirloin",
            "ribeye",
            "new york strip",
            "strip steak",
            "t-bone",
            "porterhouse",
        ],
    ),
    // Chicken
    (
        "chicken_breast",
        &[
            "breast",
            "chicken breasts",
            "breasts",
            "chicken breast meat",
            "chicken breast fillet",
            "chicken breast fillets",
            "chicken filet",
            "chicken filets",
        ],
    ),
    (
        "chicken_tenders",
        &[
            "tenders",
            "chicken tender",
            "chicken tenderloin",
            "chicken tenderloins",
            "chicken strips",
            "chicken strip",
            "chicken fingers",
            "chicken finger",
            "wings",
            "wing",
            "chicken wings",
            "chicken wing",
        ],
    ),
    ("chicken_nuggets", &["nuggets", "chicken nugget", "nugget"]),
    // Fish
    (
        "white_fish",
        &[
            "whitefish",
            "white fish fillet",
            "white fish fillets",
            "tilapia",
            "tilapia fillet",
            "tilapia fillets",
        ],
    ),
    (
        "salmon",
        &[
            "salmon fillet",
            "salmon fillets",
            "salmon steak",
            "salmon steaks",
            "salmon portion",
            "salmon portions",
            "salmon piece",
            "salmon pieces",
        ],
    ),
    // Turkey
    (
        "ground_turkey",
        &[
            "turkey",
            "turkey meat",
            "ground turkey meat",
            "ground turkey breast",
        ],
    ),
    // Other
    (
        "ice_cream",
        &[
            "icecream",
            "ice-cream",
            "vanilla ice cream",
            "chocolate ice cream",
            "strawberry ice cream",
            "ice cream tub",
            "ice cream container",
            "ice cream carton",
            "ice cream pint",
            "ice cream quart",
        ],
    ),
];

/// Words that start an add command.
pub const ADD_VERBS: &[&str] = &["add", "put", "place", "store", "stock", "insert"];

/// Words that start a remove command.
pub const REMOVE_VERBS: &[&str] = &["remove", "take", "delete", "use", "consume", "subtract"];

/// Words that start a set command.
pub const SET_VERBS: &[&str] = &["set", "change", "update", "adjust"];

/// Whole transcripts that mean undo.
pub const UNDO_PHRASES: &[&str] = &[
    "undo",
    "undo that",
    "undo last",
    "revert",
    "take that back",
    "cancel that",
];
