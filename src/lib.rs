//! Identifier case conversion for code generators.
//!
//! Free-form text is split into words at delimiter runs (whitespace, symbols,
//! `_` and `-`) and reassembled as camelCase, PascalCase, snake_case or
//! kebab-case. The snake and kebab styles also split before an upper-case
//! letter.
//!
//! ```
//! assert_eq!(identcase::to_camel("one  two"), "oneTwo");
//! assert_eq!(identcase::to_snake("abcXyz"), "abc_xyz");
//! assert_eq!(identcase::to_pascal("abc"), "Abc");
//! assert_eq!(identcase::to_kebab("one_-two"), "one-two");
//! ```

pub mod case;
mod config;
mod converter;
mod error;
mod utils;

pub use case::{Style, convert, convert_to_case, to_camel, to_kebab, to_pascal, to_snake};
pub use config::{Config, NamingConfig};
pub use converter::Converter;
pub use error::{Error, Result};
pub use utils::ident::{field_ident, sanitize_identifier, to_ident, type_ident};
