//! Argument checks for the host-facing API.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("argument `{0}` cannot be null")]
    Null(String),
    #[error("property `{property}` on `{param}` cannot be null")]
    NullProperty { param: String, property: String },
    #[error("argument `{0}` is empty")]
    Empty(String),
    #[error("collection argument `{0}` is empty")]
    EmptyCollection(String),
    #[error("collection `{0}` contains null elements")]
    ContainsNulls(String),
}

fn param_name(param: &str) -> String {
    debug_assert!(!param.trim().is_empty(), "parameter name is empty");
    param.to_string()
}

pub fn not_null<T>(value: Option<T>, param: &str) -> Result<T, ArgumentError> {
    value.ok_or_else(|| ArgumentError::Null(param_name(param)))
}

/// Like [`not_null`], for a property read off `param`.
pub fn not_null_property<T>(
    value: Option<T>,
    param: &str,
    property: &str,
) -> Result<T, ArgumentError> {
    value.ok_or_else(|| ArgumentError::NullProperty {
        param: param_name(param),
        property: param_name(property),
    })
}

/// Rejects strings that are empty or only whitespace.
pub fn not_empty<'a>(value: &'a str, param: &str) -> Result<&'a str, ArgumentError> {
    if value.trim().is_empty() {
        return Err(ArgumentError::Empty(param_name(param)));
    }
    Ok(value)
}

pub fn not_empty_slice<'a, T>(value: &'a [T], param: &str) -> Result<&'a [T], ArgumentError> {
    if value.is_empty() {
        return Err(ArgumentError::EmptyCollection(param_name(param)));
    }
    Ok(value)
}

/// Accepts a missing value, but rejects a present zero-length one.
/// Whitespace is allowed.
pub fn null_but_not_empty<'a>(
    value: Option<&'a str>,
    param: &str,
) -> Result<Option<&'a str>, ArgumentError> {
    match value {
        Some("") => Err(ArgumentError::Empty(param_name(param))),
        _ => Ok(value),
    }
}

pub fn has_no_nulls<'a, T>(
    value: &'a [Option<T>],
    param: &str,
) -> Result<&'a [Option<T>], ArgumentError> {
    if value.iter().any(Option::is_none) {
        return Err(ArgumentError::ContainsNulls(param_name(param)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_unwraps() {
        assert_eq!(not_null(Some(3), "count"), Ok(3));
        assert_eq!(
            not_null::<u32>(None, "count"),
            Err(ArgumentError::Null("count".into()))
        );
    }

    #[test]
    fn not_null_property_names_both() {
        assert_eq!(not_null_property(Some("id"), "entity", "name"), Ok("id"));
        let err = not_null_property::<&str>(None, "entity", "name").unwrap_err();
        assert_eq!(
            err,
            ArgumentError::NullProperty {
                param: "entity".into(),
                property: "name".into()
            }
        );
        assert_eq!(err.to_string(), "property `name` on `entity` cannot be null");
    }

    #[test]
    fn not_empty_rejects_blank() {
        assert_eq!(not_empty("name", "name"), Ok("name"));
        assert_eq!(not_empty("", "name"), Err(ArgumentError::Empty("name".into())));
        assert_eq!(not_empty(" \t", "name"), Err(ArgumentError::Empty("name".into())));
    }

    #[test]
    fn not_empty_slice_rejects_empty() {
        assert!(not_empty_slice(&[1], "names").is_ok());
        assert_eq!(
            not_empty_slice::<u8>(&[], "names"),
            Err(ArgumentError::EmptyCollection("names".into()))
        );
    }

    #[test]
    fn null_but_not_empty_allows_none_and_whitespace() {
        assert_eq!(null_but_not_empty(None, "schema"), Ok(None));
        assert_eq!(null_but_not_empty(Some(" "), "schema"), Ok(Some(" ")));
        assert_eq!(
            null_but_not_empty(Some(""), "schema"),
            Err(ArgumentError::Empty("schema".into()))
        );
    }

    #[test]
    fn has_no_nulls_rejects_none() {
        assert!(has_no_nulls(&[Some(1), Some(2)], "ids").is_ok());
        assert_eq!(
            has_no_nulls(&[Some(1), None], "ids"),
            Err(ArgumentError::ContainsNulls("ids".into()))
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            ArgumentError::Empty("name".into()).to_string(),
            "argument `name` is empty"
        );
        assert_eq!(
            ArgumentError::ContainsNulls("ids".into()).to_string(),
            "collection `ids` contains null elements"
        );
    }
}
