//! The compound selector builder.

use std::fmt;

use serde::Serialize;

use crate::error::SelectorError;
use crate::part::Part;

/// Anything that renders to CSS selector text.
///
/// Rendering is a pure read: calling [`Stringify::stringify`] repeatedly
/// returns the same text and leaves the value untouched.
pub trait Stringify {
    /// Render this value as CSS selector text.
    #[must_use]
    fn stringify(&self) -> String;
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

/// Already-rendered selector text is passed through unchanged.
impl Stringify for str {
    fn stringify(&self) -> String {
        self.to_owned()
    }
}

impl Stringify for String {
    fn stringify(&self) -> String {
        self.clone()
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// Accumulates the parts of a single compound selector such as
/// `a#logo.nav[href$=".png"]:focus::after`.
///
/// Each append method takes the builder by value and hands it back on
/// success, so calls chain with `?`:
///
/// ```
/// # fn main() -> Result<(), kata_selector::SelectorError> {
/// use kata_selector::{Selector, Stringify};
///
/// let selector = Selector::new()
///     .element("a")?
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selector {
    element_name: Option<String>,
    id_value: Option<String>,
    class_names: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element_name: Option<String>,
    #[serde(skip)]
    last_part: Option<Part>,
}

impl Selector {
    /// Create an empty selector. It renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element_name: None,
            id_value: None,
            class_names: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element_name: None,
            last_part: None,
        }
    }

    /// Set the type selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an element is already set,
    /// [`SelectorError::OrderViolation`] if any later part was appended.
    pub fn element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        Self::check_unset(self.element_name.as_ref(), Part::Element)?;
        self.advance(Part::Element)?;
        self.element_name = Some(name.into());
        Ok(self)
    }

    /// Set the ID selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an id is already set,
    /// [`SelectorError::OrderViolation`] if a class or later part was appended.
    pub fn id(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        Self::check_unset(self.id_value.as_ref(), Part::Id)?;
        self.advance(Part::Id)?;
        self.id_value = Some(value.into());
        Ok(self)
    }

    /// Append a class selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if an attribute or later part was appended.
    pub fn class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.advance(Part::Class)?;
        self.class_names.push(name.into());
        Ok(self)
    }

    /// Append an attribute selector. `expr` is the text between the brackets.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element was appended.
    pub fn attr(mut self, expr: impl Into<String>) -> Result<Self, SelectorError> {
        self.advance(Part::Attribute)?;
        self.attributes.push(expr.into());
        Ok(self)
    }

    /// Append a pseudo-class, given without the leading `:`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-element was appended.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.advance(Part::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        Ok(self)
    }

    /// Set the pseudo-element, given without the leading `::`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already set.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        Self::check_unset(self.pseudo_element_name.as_ref(), Part::PseudoElement)?;
        self.advance(Part::PseudoElement)?;
        self.pseudo_element_name = Some(name.into());
        Ok(self)
    }

    /// The type selector, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element_name.as_deref()
    }

    /// The ID, if set.
    #[must_use]
    pub fn id_value(&self) -> Option<&str> {
        self.id_value.as_deref()
    }

    /// Class names in insertion order.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Attribute expressions in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in insertion order.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element_name.as_deref()
    }

    /// The greatest part appended so far, `None` for an empty selector.
    #[must_use]
    pub const fn last_part(&self) -> Option<Part> {
        self.last_part
    }

    /// Whether no part has been appended yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last_part.is_none()
    }

    const fn check_unset(slot: Option<&String>, part: Part) -> Result<(), SelectorError> {
        match slot {
            Some(_) => Err(SelectorError::Duplicate { part }),
            None => Ok(()),
        }
    }

    /// Move the ordering cursor to `part`. It never moves backwards.
    fn advance(&mut self, part: Part) -> Result<(), SelectorError> {
        match self.last_part {
            Some(after) if after > part => Err(SelectorError::OrderViolation { part, after }),
            _ => {
                self.last_part = Some(part);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.element_name {
            f.write_str(name)?;
        }
        if let Some(id) = &self.id_value {
            write!(f, "#{id}")?;
        }
        for class in &self.class_names {
            write!(f, ".{class}")?;
        }
        for attr in &self.attributes {
            write!(f, "[{attr}]")?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{pseudo}")?;
        }
        if let Some(pseudo) = &self.pseudo_element_name {
            write!(f, "::{pseudo}")?;
        }
        Ok(())
    }
}

impl Stringify for Selector {
    fn stringify(&self) -> String {
        self.to_string()
    }
}
