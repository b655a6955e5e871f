use super::boundary::{is_delimiter, to_upper};

/// Convert `input` to camelCase.
///
/// Delimiters are dropped and the first character after each delimiter run is
/// upper-cased. Every other character keeps its original case, so `abcXyz`
/// stays `abcXyz`.
///
/// Example: `foo bar` -> `fooBar`
pub fn to_camel(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut passed_delimiter = false;

    for c in input.chars() {
        if is_delimiter(c) {
            passed_delimiter = true;
        } else if passed_delimiter {
            result.push(to_upper(c));
            passed_delimiter = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert `input` to PascalCase.
///
/// This is [`to_camel`] with the first character of the result upper-cased.
///
/// Example: `foo bar` -> `FooBar`
pub fn to_pascal(input: &str) -> String {
    let camel = to_camel(input);
    let mut chars = camel.chars();

    match chars.next() {
        Some(first) => std::iter::once(to_upper(first)).chain(chars).collect(),
        None => camel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel() {
        let cases = [
            ("", ""),
            ("1", "1"),
            ("12", "12"),
            ("one two", "oneTwo"),
            ("one  two", "oneTwo"),
            ("one_-two", "oneTwo"),
            ("abc", "abc"),
            ("abc-xyz", "abcXyz"),
            ("abc_xyz", "abcXyz"),
            ("abcXyz", "abcXyz"),
            ("abc\nxyz", "abcXyz"),
            ("abc\n\nxyz", "abcXyz"),
        ];

        for (input, expected) in cases {
            assert_eq!(to_camel(input), expected, "with {input:?}");
        }
    }

    #[test]
    fn camel_keeps_existing_case() {
        assert_eq!(to_camel("Foo Bar"), "FooBar");
        assert_eq!(to_camel("HTTP server"), "HTTPServer");
    }

    #[test]
    fn camel_drops_leading_and_trailing_delimiters() {
        assert_eq!(to_camel("__foo_bar__"), "FooBar");
        assert_eq!(to_camel("foo bar "), "fooBar");
        assert_eq!(to_camel(" - _ "), "");
    }

    #[test]
    fn camel_boundary_before_digit() {
        assert_eq!(to_camel("v 2 beta"), "v2Beta");
    }

    #[test]
    fn pascal() {
        let cases = [
            ("", ""),
            ("1", "1"),
            ("12", "12"),
            ("one two", "OneTwo"),
            ("one  two", "OneTwo"),
            ("one_-two", "OneTwo"),
            ("abc", "Abc"),
            ("abc-xyz", "AbcXyz"),
            ("abc_xyz", "AbcXyz"),
            ("abcXyz", "AbcXyz"),
            ("abc\nxyz", "AbcXyz"),
            ("abc\n\nxyz", "AbcXyz"),
        ];

        for (input, expected) in cases {
            assert_eq!(to_pascal(input), expected, "with {input:?}");
        }
    }

    #[test]
    fn pascal_only_touches_first_character() {
        assert_eq!(to_pascal("foo.bar baz"), "Foo.barBaz");
        assert_eq!(to_pascal("élan vital"), "ÉlanVital");
    }

    #[test]
    fn multi_character_upper_case_is_not_expanded() {
        assert_eq!(to_camel("a ßx"), "aßx");
        assert_eq!(to_pascal("ßx"), "ßx");
        assert_eq!(to_camel("foo ŉ"), "fooŉ");
    }

    #[test]
    fn pascal_capitalises_after_leading_delimiters() {
        assert_eq!(to_pascal("  foo"), "Foo");
        assert_eq!(to_pascal("-1st"), "1st");
    }
}
