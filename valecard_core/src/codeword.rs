//! Codeword resolution for bracket words.
//!
//! A bracket word (`{fire}`, `(2wp)`, `{Молния}`) may name a family icon,
//! a valued willpower badge, or a keyword icon. Matching is
//! case-insensitive and ignores trailing sentence punctuation. Anything
//! else stays literal text.
//!
//! Precedence is family, then valued, then keyword.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::card::{AbilityKind, Family};

/// Fixed icon named by a keyword codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Immediate,
    Continuous,
    Periodic,
    OneGem,
    ThreeGem,
    SixGem,
}

impl Keyword {
    /// Gem denominations render slightly smaller than other icons.
    pub fn is_denomination(self) -> bool {
        matches!(self, Self::OneGem | Self::ThreeGem | Self::SixGem)
    }

    /// Asset stem (`icon_<stem>.png`).
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Continuous => "continuous",
            Self::Periodic => "periodic",
            Self::OneGem => "1gem",
            Self::ThreeGem => "3gem",
            Self::SixGem => "6gem",
        }
    }
}

impl From<AbilityKind> for Keyword {
    fn from(kind: AbilityKind) -> Self {
        match kind {
            AbilityKind::Immediate => Self::Immediate,
            AbilityKind::Continuous => Self::Continuous,
            AbilityKind::Periodic => Self::Periodic,
        }
    }
}

/// Classification of one bracket word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Codeword {
    Family(Family),
    /// Willpower badge with its display value (digits and/or `?`).
    Valued(String),
    Keyword(Keyword),
}

/// Sentence punctuation ignored at the end of a bracket word.
const TRAILING_PUNCT: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Suffixes marking a valued codeword (English and Russian).
const VALUE_SUFFIXES: [&str; 2] = ["wp", "по"];

/// Wildcard accepted in place of (or among) value digits.
const VALUE_WILDCARD: char = '?';

const FAMILY_ALIASES: [(&str, Family); 10] = [
    ("fire", Family::Fire),
    ("огонь", Family::Fire),
    ("water", Family::Water),
    ("вода", Family::Water),
    ("air", Family::Air),
    ("воздух", Family::Air),
    ("earth", Family::Earth),
    ("земля", Family::Earth),
    ("dragon", Family::Dragon),
    ("дракон", Family::Dragon),
];

const KEYWORD_ALIASES: [(&str, Keyword); 12] = [
    ("immediate", Keyword::Immediate),
    ("молния", Keyword::Immediate),
    ("continuous", Keyword::Continuous),
    ("бесконечность", Keyword::Continuous),
    ("periodic", Keyword::Periodic),
    ("часы", Keyword::Periodic),
    ("1gem", Keyword::OneGem),
    ("1камень", Keyword::OneGem),
    ("3gem", Keyword::ThreeGem),
    ("3камень", Keyword::ThreeGem),
    ("6gem", Keyword::SixGem),
    ("6камень", Keyword::SixGem),
];

static FAMILIES: LazyLock<HashMap<&'static str, Family>> =
    LazyLock::new(|| FAMILY_ALIASES.into_iter().collect());

static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> =
    LazyLock::new(|| KEYWORD_ALIASES.into_iter().collect());

/// Drop trailing sentence punctuation (`{fire}.` -> `{fire}`).
pub fn strip_trailing_punct(word: &str) -> &str {
    word.trim_end_matches(TRAILING_PUNCT)
}

/// Inner text of a `{...}` or `(...)` word at least three chars long.
fn bracket_interior(word: &str) -> Option<&str> {
    word.chars().nth(2)?;
    word.strip_prefix('{')
        .and_then(|w| w.strip_suffix('}'))
        .or_else(|| word.strip_prefix('(').and_then(|w| w.strip_suffix(')')))
}

/// Lowercased bracket interior after punctuation stripping.
fn normalized_interior(word: &str) -> Option<String> {
    bracket_interior(strip_trailing_punct(word)).map(str::to_lowercase)
}

fn parse_family(inner: &str) -> Option<Family> {
    FAMILIES.get(inner).copied()
}

fn parse_value(inner: &str) -> Option<String> {
    let prefix = VALUE_SUFFIXES
        .iter()
        .find_map(|suffix| inner.strip_suffix(suffix))?;
    let valid = !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_digit() || c == VALUE_WILDCARD);
    valid.then(|| prefix.to_owned())
}

fn parse_keyword(inner: &str) -> Option<Keyword> {
    KEYWORDS.get(inner).copied()
}

/// Classify one word, or `None` if it is literal text.
pub fn resolve(word: &str) -> Option<Codeword> {
    let inner = normalized_interior(word)?;
    if let Some(family) = parse_family(&inner) {
        return Some(Codeword::Family(family));
    }
    if let Some(value) = parse_value(&inner) {
        return Some(Codeword::Valued(value));
    }
    parse_keyword(&inner).map(Codeword::Keyword)
}
