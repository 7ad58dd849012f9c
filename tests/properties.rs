use dbcase::{
    rewriter::{to_snake_case, to_upper_snake_case},
    NamingConvention,
};
use proptest::prelude::*;

/// Identifiers assembled from words, acronyms and digit groups, without
/// separators of their own.
fn identifier() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,6}",
            "[A-Z][a-z]{0,6}",
            "[A-Z]{2,4}",
            "[0-9]{1,3}",
        ],
        1..6,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rewriting_is_deterministic(name in "\\PC{0,40}") {
        for convention in NamingConvention::ALL {
            prop_assert_eq!(convention.rewrite(&name), convention.rewrite(&name));
        }
    }

    #[test]
    fn never_panics_on_arbitrary_input(name in "\\PC{0,40}") {
        let _ = to_upper_snake_case(&name);
        let _ = to_snake_case(&name);
    }

    #[test]
    fn no_doubled_or_dangling_separators(name in identifier()) {
        let rewritten = to_upper_snake_case(&name);
        prop_assert!(!rewritten.contains("__"), "{} -> {}", name, rewritten);
        prop_assert!(!rewritten.starts_with('_'), "{} -> {}", name, rewritten);
        prop_assert!(!rewritten.ends_with('_'), "{} -> {}", name, rewritten);
    }

    #[test]
    fn only_separators_are_added(name in identifier()) {
        let rewritten = to_upper_snake_case(&name);
        let stripped: String = rewritten.chars().filter(|&c| c != '_').collect();
        prop_assert_eq!(stripped, name.to_uppercase());
    }

    #[test]
    fn upper_and_lower_share_boundaries(name in identifier()) {
        prop_assert_eq!(to_snake_case(&name).to_uppercase(), to_upper_snake_case(&name));
    }

    #[test]
    fn rewrite_is_a_fixed_point(name in identifier()) {
        let once = to_upper_snake_case(&name);
        prop_assert_eq!(to_upper_snake_case(&once), once);
    }

    #[test]
    fn non_alphanumerics_keep_their_place(
        left in "[a-z]{1,5}",
        punct in "[-_.$ ]",
        right in "[a-z]{1,5}",
    ) {
        let name = format!("{left}{punct}{right}");
        let expected = format!("{}{punct}{}", left.to_uppercase(), right.to_uppercase());
        prop_assert_eq!(to_upper_snake_case(&name), expected);
    }
}

#[test]
fn documented_examples() {
    let cases = [
        ("", ""),
        ("Name", "NAME"),
        ("fooBar", "FOO_BAR"),
        ("UserId1", "USER_ID_1"),
        ("XMLParser", "XML_PARSER"),
        ("XMLParserV2", "XML_PARSER_V2"),
        ("v2Something", "V2_SOMETHING"),
        ("item2", "ITEM_2"),
        ("item2Foo", "ITEM2_FOO"),
    ];
    for (name, expected) in cases {
        assert_eq!(to_upper_snake_case(name), expected, "{name}");
    }
}
