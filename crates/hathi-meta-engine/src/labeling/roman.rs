//! Lowercase roman numerals for front-matter order labels.

/// Subtractive-notation table, largest first.
const NUMERALS: [(&str, u32); 13] = [
    ("m", 1000),
    ("cm", 900),
    ("d", 500),
    ("cd", 400),
    ("c", 100),
    ("xc", 90),
    ("l", 50),
    ("xl", 40),
    ("x", 10),
    ("ix", 9),
    ("v", 5),
    ("iv", 4),
    ("i", 1),
];

/// Encodes `n` greedily against [`NUMERALS`]. Zero encodes to an empty string.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for (numeral, value) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

/// Decodes a lowercase numeral by greedy prefix matching.
///
/// Decoding is permissive: it stops at the first position no table entry
/// matches and ignores whatever follows.
pub fn from_roman(s: &str) -> u32 {
    let mut rest = s;
    let mut total = 0;
    for (numeral, value) in NUMERALS {
        while let Some(tail) = rest.strip_prefix(numeral) {
            total += value;
            rest = tail;
        }
    }
    total
}
