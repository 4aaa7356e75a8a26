//! Builds positional argument definitions from token bodies.
//!
//! Classification runs through [`ARGUMENT_RULES`] in order and the first
//! matching rule wins. Order matters because `?*` ends with `*` and a
//! `name=*a,b` default also satisfies the plain `name=value` pattern.

use tracing::trace;

use super::description::split_description;
use super::{PATTERNS, split_default_list};
use crate::{ArgumentDefinition, DefaultValue};

type ArgumentRule = fn(&str) -> Option<ArgumentDefinition>;

/// Ordered classification rules for argument bodies.
const ARGUMENT_RULES: &[(&str, ArgumentRule)] = &[
    ("optional array", optional_array),
    ("required array", required_array),
    ("optional scalar", optional_scalar),
    ("array with default", array_with_default),
    ("scalar with default", scalar_with_default),
];

/// Builds an [`ArgumentDefinition`] from a raw argument token.
///
/// The description (if any) is split off first. A body matching no rule is
/// a required scalar argument named by the body verbatim.
pub fn build_argument(token: &str) -> ArgumentDefinition {
    let (body, description) = split_description(token);

    let argument = ARGUMENT_RULES
        .iter()
        .find_map(|(rule, apply)| {
            apply(body).inspect(|_| trace!(token = body, rule, "Matched argument rule"))
        })
        .unwrap_or_else(|| ArgumentDefinition::required(body));

    argument.with_description(description)
}

fn optional_array(body: &str) -> Option<ArgumentDefinition> {
    body.strip_suffix("?*")
        .map(|name| ArgumentDefinition::array(name, false))
}

fn required_array(body: &str) -> Option<ArgumentDefinition> {
    body.strip_suffix('*')
        .map(|name| ArgumentDefinition::array(name, true))
}

fn optional_scalar(body: &str) -> Option<ArgumentDefinition> {
    body.strip_suffix('?').map(ArgumentDefinition::optional)
}

fn array_with_default(body: &str) -> Option<ArgumentDefinition> {
    let caps = PATTERNS.array_default.captures(body)?;
    Some(
        ArgumentDefinition::array(&caps[1], false)
            .with_default(DefaultValue::List(split_default_list(&caps[2]))),
    )
}

fn scalar_with_default(body: &str) -> Option<ArgumentDefinition> {
    let caps = PATTERNS.scalar_default.captures(body)?;
    Some(
        ArgumentDefinition::optional(&caps[1])
            .with_default(DefaultValue::Scalar(caps[2].to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_scalar() {
        let arg = build_argument("user");
        assert_eq!(arg, ArgumentDefinition::required("user"));
    }

    #[test]
    fn test_optional_scalar() {
        let arg = build_argument("user?");
        assert_eq!(arg.name, "user");
        assert!(!arg.required);
        assert!(!arg.is_array);
        assert!(arg.default.is_none());
    }

    #[test]
    fn test_optional_array_wins_over_required_array() {
        let arg = build_argument("files?*");
        assert_eq!(arg.name, "files");
        assert!(arg.is_array);
        assert!(!arg.required);
    }

    #[test]
    fn test_required_array() {
        let arg = build_argument("files*");
        assert_eq!(arg.name, "files");
        assert!(arg.is_array);
        assert!(arg.required);
    }

    #[test]
    fn test_only_one_modifier_is_stripped() {
        let arg = build_argument("files**");
        assert_eq!(arg.name, "files*");
        assert!(arg.is_array);
        assert!(arg.required);

        let arg = build_argument("user??");
        assert_eq!(arg.name, "user?");
        assert!(!arg.required);
        assert!(!arg.is_array);
    }

    #[test]
    fn test_scalar_default_kept_verbatim() {
        let arg = build_argument("greeting=hello world ");
        assert_eq!(arg.name, "greeting");
        assert!(!arg.required);
        assert_eq!(
            arg.default,
            Some(DefaultValue::Scalar("hello world".to_string()))
        );
    }

    #[test]
    fn test_array_default_splits_on_comma() {
        let arg = build_argument("names=*alice, bob,carol");
        assert_eq!(arg.name, "names");
        assert!(arg.is_array);
        assert!(!arg.required);
        assert_eq!(
            arg.default,
            Some(DefaultValue::List(vec![
                "alice".to_string(),
                "bob".to_string(),
                "carol".to_string(),
            ]))
        );
    }

    #[test]
    fn test_array_default_trims_one_space_after_comma_only() {
        let arg = build_argument("names=*a,  b");
        assert_eq!(
            arg.default,
            Some(DefaultValue::List(vec!["a".to_string(), " b".to_string()]))
        );
    }

    #[test]
    fn test_default_with_equals_is_split_on_last_equals() {
        let arg = build_argument("query=a=b");
        assert_eq!(arg.name, "query=a");
        assert_eq!(arg.default, Some(DefaultValue::Scalar("b".to_string())));
    }

    #[test]
    fn test_description_is_split_off() {
        let arg = build_argument("user? : The user id");
        assert_eq!(arg.name, "user");
        assert_eq!(arg.description, "The user id");
    }
}
