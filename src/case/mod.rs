//! Word-boundary detection and reassembly shared by every case style.

mod boundary;
mod camel;
mod separated;
mod style;

pub use boundary::is_delimiter;
pub use camel::{to_camel, to_pascal};
pub use separated::{lower_with_separator, to_kebab, to_snake};
pub use style::{Style, convert, convert_to_case};
