//! Opaque identifiers for recommendation categories.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a recommendation category, such as a crop name.
///
/// Labels compare by value and act as catalogue keys.
///
/// # Examples
/// ```
/// use agridash_core::Label;
///
/// let label = Label::from("kidneybeans");
/// assert_eq!(label.as_str(), "kidneybeans");
/// assert_eq!(label.capitalized(), "Kidneybeans");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Label(String);

impl Label {
    /// Wrap a category name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the name with an upper-case first character and the rest in
    /// lower case, as shown in activity summaries.
    ///
    /// # Examples
    /// ```
    /// use agridash_core::Label;
    ///
    /// assert_eq!(Label::from("RICE").capitalized(), "Rice");
    /// assert_eq!(Label::from("").capitalized(), "");
    /// ```
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect()
        })
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
