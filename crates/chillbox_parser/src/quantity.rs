//! Quantity parsing.
//!
//! Extracts integer counts from digits ("3") and spoken number words
//! ("three", "twenty five", "a dozen").

use crate::tokenizer::InputTokenizer;

/// A quantity found (or not) in a phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    /// An explicitly stated count; "a"/"an" count as an explicit one
    Explicit(u64),
    /// No quantity token present
    Missing,
}

impl Quantity {
    /// Returns the explicit value, if any.
    #[must_use]
    pub const fn value(self) -> Option<u64> {
        match self {
            Self::Explicit(n) => Some(n),
            Self::Missing => None,
        }
    }
}

const UNITS: &[&str] = &[
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

/// Collective words that stand alone or follow "a"/"an".
const COLLECTIVES: &[(&str, u64)] = &[
    ("dozen", 12),
    ("couple", 2),
    ("few", 3),
    ("several", 3),
    ("hundred", 100),
];

/// Parses quantities from words.
pub struct QuantityParser;

impl QuantityParser {
    /// Parses a whole phrase as a quantity.
    ///
    /// Returns [`Quantity::Missing`] unless the entire phrase is one quantity
    /// expression ("3", "three", "twenty-five", "a dozen").
    #[must_use]
    pub fn parse(phrase: &str) -> Quantity {
        let words = InputTokenizer::tokenize(phrase);
        match Self::leading(&words) {
            Some((value, consumed)) if consumed == words.len() => Quantity::Explicit(value),
            _ => Quantity::Missing,
        }
    }

    /// Parses the longest quantity expression at the start of `words`.
    ///
    /// Returns the value and how many words it consumed. Digit strings too
    /// long for `u64` saturate, so the caller's bound check rejects them.
    #[must_use]
    pub fn leading(words: &[String]) -> Option<(u64, usize)> {
        let first = words.first()?.as_str();

        if !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit()) {
            let value = first.parse::<u64>().unwrap_or(u64::MAX);
            return Some((value, 1));
        }

        if first == "a" || first == "an" {
            if let Some(value) = words.get(1).and_then(|w| collective(w)) {
                return Some((value, 2));
            }
            return Some((1, 1));
        }

        if let Some(value) = collective(first) {
            return Some((value, 1));
        }

        let (mut value, mut consumed) = below_hundred(words)?;
        if words.get(consumed).map(String::as_str) == Some("hundred") && value > 0 {
            value *= 100;
            consumed += 1;
            let rest = &words[consumed..];
            let skip_and = usize::from(rest.first().map(String::as_str) == Some("and"));
            if let Some((tail, used)) = below_hundred(&rest[skip_and..]) {
                value += tail;
                consumed += skip_and + used;
            }
        }
        Some((value, consumed))
    }

    /// Returns true for a single number word or digit string ("3", "seven",
    /// "forty", "twenty-five").
    ///
    /// Articles and collectives ("a", "dozen") are not numerals.
    #[must_use]
    pub fn is_numeral(word: &str) -> bool {
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
            return true;
        }
        if let Some((left, right)) = word.split_once('-') {
            return tens(left).is_some() && unit(right).is_some_and(|u| (1..10).contains(&u));
        }
        unit(word).is_some() || tens(word).is_some()
    }
}

fn collective(word: &str) -> Option<u64> {
    COLLECTIVES
        .iter()
        .find(|(name, _)| *name == word)
        .map(|&(_, value)| value)
}

fn unit(word: &str) -> Option<u64> {
    UNITS
        .iter()
        .position(|&name| name == word)
        .and_then(|idx| u64::try_from(idx).ok())
}

fn tens(word: &str) -> Option<u64> {
    TENS.iter()
        .find(|(name, _)| *name == word)
        .map(|&(_, value)| value)
}

/// Parses 0..=99 from one or two words ("seven", "forty", "forty two", "forty-two").
fn below_hundred(words: &[String]) -> Option<(u64, usize)> {
    let first = words.first()?.as_str();

    if let Some((left, right)) = first.split_once('-') {
        let value = tens(left)? + unit(right).filter(|&u| (1..10).contains(&u))?;
        return Some((value, 1));
    }

    if let Some(value) = unit(first) {
        return Some((value, 1));
    }

    let ten = tens(first)?;
    match words.get(1).and_then(|w| unit(w)) {
        Some(u) if (1..10).contains(&u) => Some((ten + u, 2)),
        _ => Some((ten, 1)),
    }
}
