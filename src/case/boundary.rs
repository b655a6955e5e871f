use unicode_general_category::{GeneralCategory, get_general_category};

/// Returns `true` if `c` separates words: whitespace, any character in a
/// Unicode symbol category (`Sm`, `Sc`, `Sk`, `So`), underscore or hyphen.
///
/// Digits, letters and punctuation such as `.` or `,` are not delimiters.
pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-' || is_symbol(c)
}

fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Returns `true` for letters in the Unicode `Lu` category.
pub(super) fn is_upper(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

/// Upper-case `c` without changing the number of characters. Characters whose
/// upper-case form needs several code points (`ß` -> `SS`) are kept as is.
pub(super) fn to_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Lower-case `c` without changing the number of characters.
pub(super) fn to_lower(c: char) -> char {
    // `İ` is the only multi-character lower-case mapping and its single
    // character form is the leading `i`
    c.to_lowercase().next().unwrap_or(c)
}
