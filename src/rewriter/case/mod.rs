use super::boundary::{
    is_acronym_to_word, is_digit_to_letter, is_letter, is_lower_to_upper, trailing_digit_run,
};

/// Provides conversion to and detection of upper snake case identifiers.
///
/// Example string `UPPER_SNAKE_CASE`
pub mod upper_snake;
pub use upper_snake::is_upper_snake_case;
pub use upper_snake::to_upper_snake_case;

/// Provides conversion to and detection of snake case identifiers.
///
/// Example string `snake_case`
pub mod snake;
pub use snake::is_snake_case;
pub use snake::to_snake_case;

/// The separator inserted between words.
pub const SEPARATOR: char = '_';

/// Maps a single character to a case, appending the result to `out`.
///
/// Only letters are handed to a fold; everything else is copied verbatim by
/// the caller.
pub trait CaseFold {
    fn fold(&self, c: char, out: &mut String);
}

/// Folds letters to upper case.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct UpperFold;

impl CaseFold for UpperFold {
    fn fold(&self, c: char, out: &mut String) {
        out.extend(c.to_uppercase())
    }
}

/// Folds letters to lower case.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LowerFold;

impl CaseFold for LowerFold {
    fn fold(&self, c: char, out: &mut String) {
        out.extend(c.to_lowercase())
    }
}

#[inline]
fn push_folded(out: &mut String, c: char, fold: &impl CaseFold) {
    if is_letter(c) {
        fold.fold(c, out);
    } else {
        out.push(c);
    }
}

/// Splits `name` into words and joins them with `separator`, folding every
/// letter with `fold`.
#[doc(hidden)]
pub fn to_case_segmented(name: &str, separator: char, fold: &impl CaseFold) -> String {
    let chars: Vec<char> = name.chars().collect();
    let Some((&first, _)) = chars.split_first() else {
        return String::new();
    };

    let mut result = String::with_capacity(name.len() * 2);
    push_folded(&mut result, first, fold);

    for i in 1..chars.len() {
        let (prev, cur) = (chars[i - 1], chars[i]);
        if is_acronym_to_word(&chars, i) || is_digit_to_letter(&chars, i) {
            result.push(separator);
        }
        if is_lower_to_upper(prev, cur) {
            result.push(separator);
        }
        push_folded(&mut result, cur, fold);
    }

    if let Some(digits) = trailing_digit_run(&chars) {
        // Digits are copied verbatim, so their byte length is the same in
        // `result` as in `name`.
        let digits_len: usize = chars[chars.len() - digits..]
            .iter()
            .map(|c| c.len_utf8())
            .sum();
        result.insert(result.len() - digits_len, separator);
    }

    result
}

/// Folds every letter of `name` to upper case without splitting words.
///
/// ```
/// use dbcase::rewriter::case::to_uppercase;
///
/// assert_eq!(to_uppercase("fooBar2"), "FOOBAR2");
/// ```
pub fn to_uppercase(name: &str) -> String {
    to_case_folded(name, &UpperFold)
}

/// Folds every letter of `name` to lower case without splitting words.
///
/// ```
/// use dbcase::rewriter::case::to_lowercase;
///
/// assert_eq!(to_lowercase("FooBar_2"), "foobar_2");
/// ```
pub fn to_lowercase(name: &str) -> String {
    to_case_folded(name, &LowerFold)
}

#[doc(hidden)]
pub fn to_case_folded(name: &str, fold: &impl CaseFold) -> String {
    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        push_folded(&mut result, c, fold);
    }
    result
}
