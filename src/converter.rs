use crate::case::{self, Style};

/// Holds a string and converts it to the supported case styles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Converter {
    value: String,
}

impl Converter {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Example: `foo bar` -> `fooBar`
    pub fn to_camel(&self) -> String {
        case::to_camel(&self.value)
    }

    /// Example: `foo bar` -> `foo_bar`
    pub fn to_snake(&self) -> String {
        case::to_snake(&self.value)
    }

    /// Example: `foo bar` -> `FooBar`
    pub fn to_pascal(&self) -> String {
        case::to_pascal(&self.value)
    }

    /// Example: `foo bar` -> `foo-bar`
    pub fn to_kebab(&self) -> String {
        case::to_kebab(&self.value)
    }

    pub fn convert(&self, style: Style) -> String {
        style.apply(&self.value)
    }
}

impl From<&str> for Converter {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Converter {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
