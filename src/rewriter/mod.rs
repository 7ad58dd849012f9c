//! Rewrites programming-style identifiers into database-style ones.
//!
//! An identifier is split into words using capitalization, digit and acronym
//! heuristics ([`boundary`]), then re-joined with `_` in a normalized case
//! ([`case`]). The [`NameRewriter`] trait is what a host holds on to; which
//! implementation it holds decides the naming convention.
//!
//! ```
//! use dbcase::rewriter::{NameRewriter, SnakeCaseRewriter, UpperSnakeCaseRewriter};
//!
//! assert_eq!(UpperSnakeCaseRewriter::new().rewrite("UserId1"), "USER_ID_1");
//! assert_eq!(SnakeCaseRewriter::new().rewrite("UserId1"), "user_id_1");
//! ```

pub mod boundary;

/// Provides case conversions
/// - Upper snake case
/// - Snake case
/// - Upper case
/// - Lower case
pub mod case;

use case::{to_case_folded, to_case_segmented, CaseFold, LowerFold, UpperFold, SEPARATOR};

pub use case::is_snake_case;
pub use case::to_snake_case;

pub use case::is_upper_snake_case;
pub use case::to_upper_snake_case;

pub use case::to_lowercase;
pub use case::to_uppercase;

/// Rewrites a single identifier.
///
/// Implementations are total: every string, including the empty one, has a
/// rewrite.
pub trait NameRewriter {
    fn rewrite(&self, name: &str) -> String;
}

/// Splits identifiers into words, joins them with `_` and folds every letter.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SegmentingRewriter<F> {
    fold: F,
}

impl<F: CaseFold> SegmentingRewriter<F> {
    pub fn with_fold(fold: F) -> Self {
        Self { fold }
    }
}

impl<F: CaseFold + Default> SegmentingRewriter<F> {
    pub fn new() -> Self {
        Self::with_fold(F::default())
    }
}

impl<F: CaseFold> NameRewriter for SegmentingRewriter<F> {
    fn rewrite(&self, name: &str) -> String {
        to_case_segmented(name, SEPARATOR, &self.fold)
    }
}

/// Folds every letter without splitting words.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FoldingRewriter<F> {
    fold: F,
}

impl<F: CaseFold> FoldingRewriter<F> {
    pub fn with_fold(fold: F) -> Self {
        Self { fold }
    }
}

impl<F: CaseFold + Default> FoldingRewriter<F> {
    pub fn new() -> Self {
        Self::with_fold(F::default())
    }
}

impl<F: CaseFold> NameRewriter for FoldingRewriter<F> {
    fn rewrite(&self, name: &str) -> String {
        to_case_folded(name, &self.fold)
    }
}

/// `USER_ID_1`
pub type UpperSnakeCaseRewriter = SegmentingRewriter<UpperFold>;
/// `user_id_1`
pub type SnakeCaseRewriter = SegmentingRewriter<LowerFold>;
/// `USERID1`
pub type UpperCaseRewriter = FoldingRewriter<UpperFold>;
/// `userid1`
pub type LowerCaseRewriter = FoldingRewriter<LowerFold>;

/// Leaves identifiers untouched.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Passthrough;

impl NameRewriter for Passthrough {
    fn rewrite(&self, name: &str) -> String {
        name.to_string()
    }
}

impl<R: NameRewriter + ?Sized> NameRewriter for &R {
    fn rewrite(&self, name: &str) -> String {
        (**self).rewrite(name)
    }
}

impl<R: NameRewriter + ?Sized> NameRewriter for Box<R> {
    fn rewrite(&self, name: &str) -> String {
        (**self).rewrite(name)
    }
}
