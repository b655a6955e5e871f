use super::boundary::{is_delimiter, is_upper, to_lower};

/// Convert `input` to snake_case.
///
/// Example: `foo bar` -> `foo_bar`
pub fn to_snake(input: &str) -> String {
    lower_with_separator(input, '_')
}

/// Convert `input` to kebab-case.
///
/// Example: `foo bar` -> `foo-bar`
pub fn to_kebab(input: &str) -> String {
    lower_with_separator(input, '-')
}

/// Lower-case `input` and join its words with `separator`.
///
/// A word boundary is either a run of delimiters or an upper-case letter
/// following a non-delimiter. Each boundary yields exactly one `separator`,
/// and the result never starts or ends with one.
pub fn lower_with_separator(input: &str, separator: char) -> String {
    let mut result = String::with_capacity(input.len() + input.len() / 4);

    // Cleared after every emitted separator and at the start, so delimiter
    // runs collapse and nothing leads the output.
    let mut can_separate = false;

    for (i, c) in input.char_indices() {
        if is_delimiter(c) {
            if can_separate {
                result.push(separator);
                can_separate = false;
            }
            continue;
        }

        if is_upper(c) {
            if can_separate && i > 0 {
                result.push(separator);
            }
            result.push(to_lower(c));
        } else {
            result.push(c);
        }
        can_separate = true;
    }

    result.trim_matches(separator).to_string()
}
