use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{camel, separated};
use crate::Error;

/// Target identifier case style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `fooBar`
    Camel,
    /// `foo_bar`
    Snake,
    /// `FooBar`
    Pascal,
    /// `foo-bar`
    Kebab,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Camel, Style::Snake, Style::Pascal, Style::Kebab];

    /// Convert `input` to this style.
    pub fn apply(self, input: &str) -> String {
        match self {
            Style::Camel => camel::to_camel(input),
            Style::Pascal => camel::to_pascal(input),
            Style::Snake => separated::to_snake(input),
            Style::Kebab => separated::to_kebab(input),
        }
    }

    /// The character joining words, if this style has one.
    pub fn separator(self) -> Option<char> {
        match self {
            Style::Snake => Some('_'),
            Style::Kebab => Some('-'),
            Style::Camel | Style::Pascal => None,
        }
    }

    /// Canonical name, written in the style itself.
    pub fn name(self) -> &'static str {
        match self {
            Style::Camel => "camelCase",
            Style::Snake => "snake_case",
            Style::Pascal => "PascalCase",
            Style::Kebab => "kebab-case",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Style::Camel),
            "pascal" | "pascalcase" => Ok(Style::Pascal),
            "snake" | "snake_case" => Ok(Style::Snake),
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert `input` to `style`.
pub fn convert(input: &str, style: Style) -> String {
    style.apply(input)
}

/// Convert `input` to the style called `case`, e.g. `"snake"` or `"PascalCase"`.
///
/// Unknown style names leave the input untouched.
pub fn convert_to_case(input: &str, case: &str) -> String {
    match case.parse::<Style>() {
        Ok(style) => style.apply(input),
        Err(err) => {
            log::warn!("{err}, leaving {input:?} as is");
            input.to_string()
        }
    }
}
