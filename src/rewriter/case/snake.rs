use super::*;

/// Converts an identifier to `snake_case`
///
/// Word boundaries are the same as for
/// [`to_upper_snake_case`](super::to_upper_snake_case), only the folding
/// differs.
///
/// ```
/// use dbcase::rewriter::case::to_snake_case;
///
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// assert_eq!(to_snake_case("FooBar"), "foo_bar");
/// assert_eq!(to_snake_case("UserId1"), "user_id_1");
/// assert_eq!(to_snake_case("XMLParser"), "xml_parser");
/// assert_eq!(to_snake_case("FOO_BAR"), "foo_bar");
/// ```
pub fn to_snake_case(name: &str) -> String {
    to_case_segmented(name, SEPARATOR, &LowerFold)
}

/// Determines if an identifier is already `snake_case`
///
/// ```
/// use dbcase::rewriter::case::is_snake_case;
///
/// assert!(is_snake_case("foo_bar"));
/// assert!(is_snake_case("item_2"));
///
/// assert!(!is_snake_case("fooBar"));
/// assert!(!is_snake_case("item2"));
/// assert!(!is_snake_case("FOO_BAR"));
/// ```
pub fn is_snake_case(name: &str) -> bool {
    name == to_snake_case(name)
}

#[cfg(test)]
mod tests {
    use super::super::to_upper_snake_case;
    use super::is_snake_case;
    use super::to_snake_case;

    #[test]
    fn from_camel_case() {
        assert_eq!(to_snake_case("fooBar"), "foo_bar")
    }

    #[test]
    fn from_pascal_case() {
        assert_eq!(to_snake_case("FooBar"), "foo_bar")
    }

    #[test]
    fn from_upper_snake_case() {
        assert_eq!(to_snake_case("FOO_BAR"), "foo_bar")
    }

    #[test]
    fn acronyms_and_digits() {
        assert_eq!(to_snake_case("XMLParserV2"), "xml_parser_v2");
        assert_eq!(to_snake_case("HTML5Parser"), "html5_parser");
        assert_eq!(to_snake_case("item2"), "item_2");
        assert_eq!(to_snake_case("item2x3"), "item2x_3");
    }

    #[test]
    fn shares_boundaries_with_upper_snake_case() {
        for name in [
            "UserId1",
            "XMLParser",
            "getHTTPResponse",
            "v2Something",
            "item2Foo",
            "A2BCd",
            "foo_Bar",
        ] {
            assert_eq!(
                to_snake_case(name).to_uppercase(),
                to_upper_snake_case(name),
                "{name}"
            );
        }
    }

    #[test]
    fn is_correct_from_snake_case() {
        assert!(is_snake_case("foo_bar"))
    }

    #[test]
    fn is_correct_from_camel_case() {
        assert!(!is_snake_case("fooBar"))
    }

    #[test]
    fn is_correct_from_upper_snake_case() {
        assert!(!is_snake_case("FOO_BAR"))
    }
}
