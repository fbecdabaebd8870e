//! Case- and accent-insensitive ordering for skill lists.
//!
//! Output lists are sorted with a base-strength comparator: letters compare by
//! their base form, so `"algebra"`, `"Algebra"` and `"Álgebra"` tie. Ties are
//! resolved by the stable sort, which keeps them in input order. Characters
//! are grouped the way the root collation table groups them (whitespace, then
//! punctuation, symbols, digits, letters) instead of by code point, so
//! `"Geometry: Angles"` and `"Geometry 2"` land where a reader expects.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::normalize::is_skill_space;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
enum CharClass {
    Space,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

fn classify(c: char) -> CharClass {
    if is_skill_space(c) {
        CharClass::Space
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else if is_symbol(c) {
        CharClass::Symbol
    } else {
        CharClass::Punctuation
    }
}

// ASCII symbols sort after punctuation in the root table; non-ASCII
// non-alphanumerics are treated as punctuation.
fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '`' | '^' | '+' | '<' | '=' | '>' | '|' | '~' | '$' | '¢' | '£' | '¥' | '€' | '©' | '®'
            | '°' | '±' | '×' | '÷'
    )
}

/// Base letters for Latin letters that canonical decomposition leaves whole.
///
/// Stroked letters fold to their base letter; ligatures and `ß`/`þ` expand
/// to two letters, as the root collation table weighs them.
fn fold_letter(c: char) -> ([char; 2], usize) {
    match c {
        'ø' => (['o', '\0'], 1),
        'ł' | 'ŀ' => (['l', '\0'], 1),
        'đ' | 'ð' => (['d', '\0'], 1),
        'ħ' => (['h', '\0'], 1),
        'ŧ' => (['t', '\0'], 1),
        'ı' => (['i', '\0'], 1),
        'æ' => (['a', 'e'], 2),
        'œ' => (['o', 'e'], 2),
        'ß' => (['s', 's'], 2),
        'þ' => (['t', 'h'], 2),
        other => ([other, '\0'], 1),
    }
}

/// Base-strength collation elements for `value`.
///
/// Canonical decomposition splits accented letters into base plus combining
/// marks; the marks are dropped, the rest lowercased, and the remaining
/// precomposed Latin letters folded with [`fold_letter`].
fn collation_elements(value: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .flat_map(|c| {
            let (letters, len) = fold_letter(c);
            letters.into_iter().take(len)
        })
        .map(|c| (classify(c), c))
}

/// Compare two skill strings at base strength.
pub fn compare_skills(left: &str, right: &str) -> Ordering {
    collation_elements(left).cmp(collation_elements(right))
}

/// Sort skills in place with [`compare_skills`]; the sort is stable.
pub fn sort_skills(skills: &mut [String]) {
    skills.sort_by(|a, b| compare_skills(a, b));
}
