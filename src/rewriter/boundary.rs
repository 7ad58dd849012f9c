//! Word boundary predicates for programming-style identifiers.
//!
//! All predicates look at an identifier as a slice of `char`s and decide
//! whether a separator belongs immediately before position `i`.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Letters are the `L*` general categories; letter-like numerals such as `Ⅻ`
/// and symbols such as `Ⓐ` are not letters.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

#[inline]
pub(crate) fn is_upper(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

#[inline]
pub(crate) fn is_lower(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
}

/// Decimal digits in any script (`7`, `٣`), but not `²` or `①`.
#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// `fooBar`: a lower-case letter followed by an upper-case letter.
pub fn is_lower_to_upper(prev: char, cur: char) -> bool {
    is_upper(cur) && is_lower(prev)
}

/// Whether `chars[i]` is an upper-case letter that starts a capitalized word,
/// i.e. the next character is a lower-case letter.
fn starts_capitalized_word(chars: &[char], i: usize) -> bool {
    is_upper(chars[i]) && chars.get(i + 1).copied().is_some_and(is_lower)
}

/// `XMLParser`: the `P` ends an acronym of at least two characters.
///
/// A single upper-case letter before `chars[i]` belongs to the current word
/// (`ABc` has no boundary).
///
/// ```
/// use dbcase::rewriter::boundary::is_acronym_to_word;
///
/// let chars: Vec<char> = "XMLParser".chars().collect();
/// assert!(is_acronym_to_word(&chars, 3));
///
/// let chars: Vec<char> = "ABc".chars().collect();
/// assert!(!is_acronym_to_word(&chars, 1));
/// ```
pub fn is_acronym_to_word(chars: &[char], i: usize) -> bool {
    i > 0
        && starts_capitalized_word(chars, i)
        && is_upper(chars[i - 1])
        && acronym_run_len(chars, i - 1) >= 2
}

/// `2Abc`: a digit followed by an upper-case letter that starts a word.
pub fn is_digit_to_letter(chars: &[char], i: usize) -> bool {
    i > 0 && starts_capitalized_word(chars, i) && is_digit(chars[i - 1])
}

/// Length of the run of upper-case letters or digits ending at `end`
/// (inclusive), scanning backwards.
///
/// ```
/// use dbcase::rewriter::boundary::acronym_run_len;
///
/// let chars: Vec<char> = "fooHTML5Parser".chars().collect();
/// assert_eq!(acronym_run_len(&chars, 7), 5);
/// assert_eq!(acronym_run_len(&chars, 1), 0);
/// ```
pub fn acronym_run_len(chars: &[char], end: usize) -> usize {
    chars[..=end]
        .iter()
        .rev()
        .take_while(|&&c| is_upper(c) || is_digit(c))
        .count()
}

/// Number of trailing digits to split off, if the identifier ends in a digit
/// run directly preceded by a lower-case letter (`item2`).
///
/// Only the final digit run is considered; runs in the middle of the
/// identifier are left to [`is_digit_to_letter`].
pub fn trailing_digit_run(chars: &[char]) -> Option<usize> {
    let digits = chars.iter().rev().take_while(|&&c| is_digit(c)).count();
    if digits == 0 || digits == chars.len() {
        return None;
    }
    let letter = chars[chars.len() - digits - 1];
    is_lower(letter).then_some(digits)
}
