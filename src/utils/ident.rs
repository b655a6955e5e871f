use proc_macro2::{Ident, Span};
use unicode_ident::{is_xid_continue, is_xid_start};

use crate::case::Style;
use crate::config::NamingConfig;
use crate::{Error, Result};

/// Keywords that are not allowed as raw identifiers.
const PATH_KEYWORDS: [&str; 4] = ["self", "Self", "super", "crate"];

pub fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 1);
    let mut chars = name.chars().peekable();

    // Ensure the identifier starts with a letter or underscore
    if let Some(&first) = chars.peek()
        && !is_xid_start(first)
        && first != '_'
    {
        result.push('_');
    }

    for c in chars {
        if is_xid_continue(c) {
            result.push(c);
        } else {
            result.push('_');
        }
    }

    result
}

/// Convert `input` to `style` and turn the result into a Rust identifier.
///
/// Keywords come back as raw identifiers (`r#type`), except the path keywords
/// which get a trailing underscore (`self_`).
pub fn to_ident(input: &str, style: Style) -> Result<Ident> {
    ident_from_name(input, style.apply(input))
}

pub fn type_ident(name: &str, config: &NamingConfig) -> Result<Ident> {
    ident_from_name(name, config.type_name(name))
}

pub fn field_ident(name: &str, config: &NamingConfig) -> Result<Ident> {
    ident_from_name(name, config.field_name(name))
}

fn ident_from_name(input: &str, name: String) -> Result<Ident> {
    let name = sanitize_identifier(&name);
    if name.is_empty() || name == "_" {
        return Err(Error::EmptyIdentifier(input.to_string()));
    }

    if syn::parse_str::<syn::Ident>(&name).is_ok() {
        return Ok(Ident::new(&name, Span::call_site()));
    }

    if PATH_KEYWORDS.contains(&name.as_str()) {
        log::debug!("identifier `{name}` is a path keyword, appending `_`");
        return Ok(Ident::new(&format!("{name}_"), Span::call_site()));
    }

    log::debug!("identifier `{name}` is a keyword, using `r#{name}`");
    Ok(Ident::new_raw(&name, Span::call_site()))
}
