//! Selector part categories and their ordering.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The kinds of simple selector a compound selector is assembled from.
///
/// Variants are declared in the order they must appear in a compound
/// selector, so the derived `Ord` is the append order: a part may only be
/// appended when no greater part has been appended before it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `div`
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.btn`
    Class,
    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors), e.g. `[href]`
    Attribute,
    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes), e.g. `:hover`
    PseudoClass,
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements), e.g. `::before`
    PseudoElement,
}

impl Part {
    /// Position of this part in the append order, starting at 1 for `Element`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Whether this part may occur at most once in a compound selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}
