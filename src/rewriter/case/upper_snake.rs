use super::*;
/// Converts an identifier to `UPPER_SNAKE_CASE`
///
/// ```
/// use dbcase::rewriter::case::to_upper_snake_case;
///
/// assert_eq!(to_upper_snake_case("Name"), "NAME");
/// assert_eq!(to_upper_snake_case("fooBar"), "FOO_BAR");
/// assert_eq!(to_upper_snake_case("UserId1"), "USER_ID_1");
/// assert_eq!(to_upper_snake_case("XMLParser"), "XML_PARSER");
/// assert_eq!(to_upper_snake_case("XMLParserV2"), "XML_PARSER_V2");
/// assert_eq!(to_upper_snake_case("item2Foo"), "ITEM2_FOO");
/// ```
pub fn to_upper_snake_case(name: &str) -> String {
    to_case_segmented(name, SEPARATOR, &UpperFold)
}

/// Determines if an identifier is already `UPPER_SNAKE_CASE`
///
/// ```
/// use dbcase::rewriter::case::is_upper_snake_case;
///
/// assert!(is_upper_snake_case("FOO_BAR_STRING_THAT_IS_REALLY_REALLY_LONG"));
/// assert!(is_upper_snake_case("FOO_BAR1_STRING"));
/// assert!(is_upper_snake_case("ITEM_2"));
///
/// assert!(!is_upper_snake_case("fooBarString"));
/// assert!(!is_upper_snake_case("FooBarString"));
/// assert!(!is_upper_snake_case("foo_bar_string"));
/// ```
pub fn is_upper_snake_case(name: &str) -> bool {
    name == to_upper_snake_case(name)
}
