//! Fluent builder for CSS selector strings.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! Each compound selector consists of type, id, class, attribute,
//! pseudo-class and pseudo-element parts, in that order:
//!
//! ```text
//! element#id.class[attr]:pseudoClass::pseudoElement
//!           \----/\----/\----------/
//!           can occur several times
//! ```
//!
//! Compound selectors are joined into complex selectors with [`combine`].
//!
//! ```
//! # fn main() -> Result<(), kata_selector::SelectorError> {
//! use kata_selector::{Stringify, combine, element, id};
//!
//! let selector = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//!
//! let pair = combine(&element("div")?.id("main")?, "+", &element("table")?.id("data")?);
//! assert_eq!(pair.stringify(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```

pub mod combinator;
pub mod error;
pub mod part;
pub mod selector;

pub use combinator::{Combinator, CombinedSelector, combine};
pub use error::SelectorError;
pub use part::Part;
pub use selector::{Selector, Stringify};

/// Start a new selector with a type selector, e.g. `div`.
///
/// # Errors
///
/// Never fails on a fresh selector; the `Result` keeps chaining uniform.
pub fn element(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().element(name)
}

/// Start a new selector with an ID selector, e.g. `#main`.
///
/// # Errors
///
/// Never fails on a fresh selector; the `Result` keeps chaining uniform.
pub fn id(value: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().id(value)
}

/// Start a new selector with a class selector, e.g. `.container`.
///
/// # Errors
///
/// Never fails on a fresh selector; the `Result` keeps chaining uniform.
pub fn class(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().class(name)
}

/// Start a new selector with an attribute selector, e.g. `[href$=".png"]`.
///
/// # Errors
///
/// Never fails on a fresh selector; the `Result` keeps chaining uniform.
pub fn attr(expr: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().attr(expr)
}

/// Start a new selector with a pseudo-class, e.g. `:focus`.
///
/// # Errors
///
/// Never fails on a fresh selector; the `Result` keeps chaining uniform.
pub fn pseudo_class(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().pseudo_class(name)
}

/// Start a new selector with a pseudo-element, e.g. `::after`.
///
/// # Errors
///
/// Never fails on a fresh selector; the `Result` keeps chaining uniform.
pub fn pseudo_element(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().pseudo_element(name)
}
