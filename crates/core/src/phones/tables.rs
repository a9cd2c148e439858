//! Phone classification tables for the Sinhala transliteration alphabet.
//!
//! Codes are short Latin runs; `^` and `:` are modifiers (dental / long).
//! Some two- and three-letter codes are ambiguous: "ng" is either the
//! prenasalised ඟ or a plain න් + ග. The Sinhala spelling decides which.

use std::collections::HashSet;

/// Characters that extend the preceding phone into a 2-char code.
pub const MODIFIERS: [char; 2] = ['^', ':'];

/// Ambiguous 3-char runs and the glyphs that resolve them (true = split).
pub const AMBIGUOUS_THREE_CHAR: &[(&str, &[(&str, bool)])] = &[
    ("ri:", &[("ඎ", false), ("රී", true)]),
    ("ru:", &[("ෲ", false), ("රූ", true)]),
    (
        "nd^",
        &[
            ("ඳ", false),
            ("න්ද", true),
            ("ණ්ද", true),
            ("න්ධ", true),
            ("ණ්ධ", true),
        ],
    ),
];

/// Ambiguous 2-char runs and the glyphs that resolve them (true = split).
///
/// "ah" (ඃ vs අහ) is deliberately absent; it is a safe phone instead.
pub const AMBIGUOUS_TWO_CHAR: &[(&str, &[(&str, bool)])] = &[
    ("ri", &[("ඍ", false), ("රි", true)]),
    ("ru", &[("ෘ", false), ("රු", true)]),
    (
        "ng",
        &[
            ("ඟ", false),
            ("න්ග", true),
            ("ණ්ග", true),
            ("න්ඝ", true),
            ("ණ්ඝ", true),
        ],
    ),
    (
        "jn",
        &[
            ("ඥ", false),
            ("ජ්න", true),
            ("ජ්ණ", true),
            ("ඣ්න", true),
            ("ඣ්ණ", true),
        ],
    ),
    (
        "nj",
        &[
            ("ඦ", false),
            ("න්ජ", true),
            ("ණ්ජ", true),
            ("න්ඣ", true),
            ("ණ්ඣ", true),
        ],
    ),
    (
        "nd",
        &[
            ("ඬ", false),
            ("න්ඩ", true),
            ("ණ්ඩ", true),
            ("න්ඪ", true),
            ("ණ්ඪ", true),
        ],
    ),
    ("mb", &[("ඹ", false), ("ම්බ", true), ("ම්භ", true)]),
];

/// Any of these as a substring sends a transliteration down the ambiguous path.
pub const AMBIGUOUS_MARKERS: &[&str] = &[
    "ae", "ae:", "ri", "ri:", "ai", "au", "ah",
    "ng", "cn", "jn", "nj", "nd", "nd^", "mb",
];

lazy_static::lazy_static! {
    /// 3-char codes that are always a single phone.
    pub static ref SAFE_THREE_CHAR: HashSet<&'static str> = {
        ["ae:"].into_iter().collect()
    };

    /// 2-char codes that are always a single phone.
    pub static ref SAFE_TWO_CHAR: HashSet<&'static str> = {
        [
            "a:", "ae", "i:", "u:", "e:", "ai", "o:", "au",
            "c^", "cn", "t^", "d^", "s^", "ah",
        ].into_iter().collect()
    };

    static ref AMBIGUOUS_THREE_CODES: HashSet<&'static str> = {
        AMBIGUOUS_THREE_CHAR.iter().map(|(code, _)| *code).collect()
    };

    static ref AMBIGUOUS_TWO_CODES: HashSet<&'static str> = {
        AMBIGUOUS_TWO_CHAR.iter().map(|(code, _)| *code).collect()
    };
}

pub fn is_modifier(c: char) -> bool {
    MODIFIERS.contains(&c)
}

/// True if `transliteration` contains any ambiguous marker.
pub fn has_ambiguous_marker(transliteration: &str) -> bool {
    AMBIGUOUS_MARKERS
        .iter()
        .any(|marker| transliteration.contains(marker))
}

pub fn is_ambiguous_three(code: &str) -> bool {
    AMBIGUOUS_THREE_CODES.contains(code)
}

pub fn is_ambiguous_two(code: &str) -> bool {
    AMBIGUOUS_TWO_CODES.contains(code)
}

pub fn is_safe_three(code: &str) -> bool {
    SAFE_THREE_CHAR.contains(code)
}

pub fn is_safe_two(code: &str) -> bool {
    SAFE_TWO_CHAR.contains(code)
}
