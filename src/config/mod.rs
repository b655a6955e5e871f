//! Naming configuration, deserialised from the generator config file.

pub mod naming;
use serde::Deserialize;

use crate::case::Style;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct NamingConfig {
    /// Case for type and variant names (default: "PascalCase")
    pub type_case: Option<Style>,
    /// Case for field and function names (default: "snake_case")
    pub field_case: Option<Style>,
    /// Custom prefix for type names
    pub type_prefix: Option<String>,
    /// Custom suffix for type names
    pub type_suffix: Option<String>,
}
