//! Rewrites identifiers such as `UserId1` or `XMLParser` into database-style
//! names such as `USER_ID_1` or `xml_parser`.
//!
//! ```
//! use dbcase::NamingConvention;
//!
//! assert_eq!(NamingConvention::UpperSnakeCase.rewrite("XMLParserV2"), "XML_PARSER_V2");
//! assert_eq!(NamingConvention::SnakeCase.rewrite("UserId1"), "user_id_1");
//! ```

use std::{fmt, str::FromStr};

pub mod check;
pub mod mapping;
pub mod rewriter;

pub use check::ArgumentError;
pub use rewriter::NameRewriter;

use rewriter::{
    LowerCaseRewriter, Passthrough, SnakeCaseRewriter, UpperCaseRewriter, UpperSnakeCaseRewriter,
};

/// The naming conventions a host can pick from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    /// Identifiers are kept as they are
    None,
    /// `USER_ID_1`
    #[default]
    UpperSnakeCase,
    /// `user_id_1`
    SnakeCase,
    /// `USERID1`
    UpperCase,
    /// `userid1`
    LowerCase,
}

impl NamingConvention {
    pub const ALL: [NamingConvention; 5] = [
        NamingConvention::None,
        NamingConvention::UpperSnakeCase,
        NamingConvention::SnakeCase,
        NamingConvention::UpperCase,
        NamingConvention::LowerCase,
    ];

    pub fn rewriter(self) -> Box<dyn NameRewriter + Send + Sync> {
        match self {
            NamingConvention::None => Box::new(Passthrough),
            NamingConvention::UpperSnakeCase => Box::new(UpperSnakeCaseRewriter::new()),
            NamingConvention::SnakeCase => Box::new(SnakeCaseRewriter::new()),
            NamingConvention::UpperCase => Box::new(UpperCaseRewriter::new()),
            NamingConvention::LowerCase => Box::new(LowerCaseRewriter::new()),
        }
    }

    pub fn rewrite(self, name: &str) -> String {
        match self {
            NamingConvention::None => name.to_string(),
            NamingConvention::UpperSnakeCase => rewriter::to_upper_snake_case(name),
            NamingConvention::SnakeCase => rewriter::to_snake_case(name),
            NamingConvention::UpperCase => rewriter::to_uppercase(name),
            NamingConvention::LowerCase => rewriter::to_lowercase(name),
        }
    }

    /// Rewrites a batch of names, rejecting an empty batch or blank names.
    pub fn rewrite_all<S: AsRef<str>>(self, names: &[S]) -> Result<Vec<String>, ArgumentError> {
        check::not_empty_slice(names, "names")?;
        names
            .iter()
            .map(|name| check::not_empty(name.as_ref(), "name").map(|name| self.rewrite(name)))
            .collect()
    }

    /// Rewrites a property name of `entity`; a missing name is an error.
    pub fn rewrite_property(
        self,
        entity: &str,
        property: Option<&str>,
    ) -> Result<String, ArgumentError> {
        let property = check::not_null_property(property, entity, "name")?;
        Ok(self.rewrite(check::not_empty(property, "name")?))
    }

    /// Rewrites `schema.name`. A missing schema leaves the name unqualified,
    /// an empty one is an error.
    pub fn rewrite_qualified(
        self,
        schema: Option<&str>,
        name: &str,
    ) -> Result<String, ArgumentError> {
        let name = self.rewrite(check::not_empty(name, "name")?);
        Ok(match check::null_but_not_empty(schema, "schema")? {
            Some(schema) => format!("{}.{name}", self.rewrite(schema)),
            None => name,
        })
    }

    fn name(self) -> &'static str {
        match self {
            NamingConvention::None => "none",
            NamingConvention::UpperSnakeCase => "upper-snake",
            NamingConvention::SnakeCase => "snake",
            NamingConvention::UpperCase => "upper",
            NamingConvention::LowerCase => "lower",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown naming convention `{0}`")]
pub struct UnknownConvention(String);

impl FromStr for NamingConvention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(NamingConvention::None),
            "upper-snake" | "upper_snake" | "UPPER_SNAKE_CASE" => {
                Ok(NamingConvention::UpperSnakeCase)
            }
            "snake" | "snake_case" => Ok(NamingConvention::SnakeCase),
            "upper" | "UPPERCASE" => Ok(NamingConvention::UpperCase),
            "lower" | "lowercase" => Ok(NamingConvention::LowerCase),
            _ => Err(UnknownConvention(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewriter_agrees_with_rewrite() {
        for convention in NamingConvention::ALL {
            let rewriter = convention.rewriter();
            for name in ["", "Name", "fooBar", "XMLParser", "item2", "item2Foo", "a_b"] {
                assert_eq!(rewriter.rewrite(name), convention.rewrite(name), "{convention}");
            }
        }
    }

    #[test]
    fn default_is_upper_snake_case() {
        assert_eq!(NamingConvention::default().rewrite("UserId1"), "USER_ID_1");
    }

    #[test]
    fn rewrite_all() {
        assert_eq!(
            NamingConvention::SnakeCase.rewrite_all(&["UserId", "OrderLine2"]),
            Ok(vec!["user_id".to_string(), "order_line_2".to_string()])
        );
    }

    #[test]
    fn rewrite_all_rejects_empty_batch() {
        let names: [&str; 0] = [];
        assert_eq!(
            NamingConvention::SnakeCase.rewrite_all(&names),
            Err(ArgumentError::EmptyCollection("names".into()))
        );
    }

    #[test]
    fn rewrite_all_rejects_blank_name() {
        assert_eq!(
            NamingConvention::SnakeCase.rewrite_all(&["UserId", " "]),
            Err(ArgumentError::Empty("name".into()))
        );
    }

    #[test]
    fn rewrite_property() {
        let convention = NamingConvention::UpperSnakeCase;
        assert_eq!(
            convention.rewrite_property("Order", Some("LineItem2")),
            Ok("LINE_ITEM_2".into())
        );
        assert_eq!(
            convention.rewrite_property("Order", None),
            Err(ArgumentError::NullProperty {
                param: "Order".into(),
                property: "name".into()
            })
        );
    }

    #[test]
    fn rewrite_qualified() {
        let convention = NamingConvention::SnakeCase;
        assert_eq!(convention.rewrite_qualified(None, "UserId"), Ok("user_id".into()));
        assert_eq!(
            convention.rewrite_qualified(Some("SalesLT"), "UserId"),
            Ok("sales_lt.user_id".into())
        );
        assert_eq!(
            convention.rewrite_qualified(Some(""), "UserId"),
            Err(ArgumentError::Empty("schema".into()))
        );
    }

    #[test]
    fn parses_names_and_aliases() {
        for convention in NamingConvention::ALL {
            assert_eq!(convention.to_string().parse(), Ok(convention));
        }
        assert_eq!("UPPER_SNAKE_CASE".parse(), Ok(NamingConvention::UpperSnakeCase));
        assert_eq!("snake_case".parse(), Ok(NamingConvention::SnakeCase));
        assert_eq!(
            "kebab".parse::<NamingConvention>(),
            Err(UnknownConvention("kebab".into()))
        );
    }

    #[test]
    fn rewriter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&NamingConvention::SnakeCase.rewriter());
    }
}
