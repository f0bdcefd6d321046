//! Errors raised while building a selector.

use thiserror::Error;

use crate::part::Part;

/// Failure to append a part to a [`Selector`](crate::Selector).
///
/// The builder is consumed by the failing call, so nothing half-built
/// survives an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A part that may occur only once (element, id, pseudo-element) was set twice.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    Duplicate {
        /// The part that was already present.
        part: Part,
    },

    /// A part was appended after a part that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The part that was being appended.
        part: Part,
        /// The highest part already appended.
        after: Part,
    },
}

impl SelectorError {
    /// The part whose append was rejected.
    #[must_use]
    pub const fn part(self) -> Part {
        match self {
            Self::Duplicate { part } | Self::OrderViolation { part, .. } => part,
        }
    }
}
