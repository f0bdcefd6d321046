//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! Joining selectors into complex selectors.

use std::fmt;
use std::str::FromStr;

use kata_common::warning::warn_once;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::selector::Stringify;

/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `combine` accepts any token; these are the four it recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators), whitespace
    #[strum(serialize = " ")]
    Descendant,
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators), `>`
    #[strum(serialize = ">")]
    Child,
    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators), `+`
    #[strum(serialize = "+")]
    NextSibling,
    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators), `~`
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// Whether `token` is one of the recognized combinators.
    #[must_use]
    pub fn is_known(token: &str) -> bool {
        Self::from_str(token).is_ok()
    }
}

/// Two selectors joined by a combinator, rendered once at construction.
///
/// Accepted by [`combine`] on either side, so combinations nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CombinedSelector {
    text: String,
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        self.text.clone()
    }
}

/// Join `left` and `right` with `combinator`, surrounded by single spaces.
///
/// The two sides are rendered independently; no ordering or duplicate
/// rules apply across them. Unrecognized combinators are kept verbatim
/// and reported once through [`warn_once`].
///
/// ```
/// # fn main() -> Result<(), kata_selector::SelectorError> {
/// use kata_selector::{Combinator, Stringify, combine, element};
///
/// let rows = combine(
///     &element("tr")?.pseudo_class("nth-of-type(even)")?,
///     Combinator::Descendant.as_ref(),
///     &element("td")?.pseudo_class("nth-of-type(even)")?,
/// );
/// assert_eq!(rows.stringify(), "tr:nth-of-type(even)   td:nth-of-type(even)");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn combine<L, R>(left: &L, combinator: &str, right: &R) -> CombinedSelector
where
    L: Stringify + ?Sized,
    R: Stringify + ?Sized,
{
    if !Combinator::is_known(combinator) {
        let known: Vec<String> = Combinator::iter().map(|c| format!("'{c}'")).collect();
        warn_once(
            "Selector",
            &format!(
                "non-standard combinator '{combinator}' (expected one of {})",
                known.join(", ")
            ),
        );
    }
    CombinedSelector {
        text: format!("{} {combinator} {}", left.stringify(), right.stringify()),
    }
}
