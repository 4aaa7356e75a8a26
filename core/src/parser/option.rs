//! Builds option definitions from token bodies.
//!
//! The leading dashes have already been stripped by the classifier. A
//! shortcut may precede the name, separated by `|`. The remaining body is
//! classified through [`OPTION_RULES`]; `=*` has to be tested before `=`
//! because every `=*` body also ends in a character sequence the scalar
//! patterns would accept.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::description::split_description;
use super::{PATTERNS, split_default_list};
use crate::{DefaultValue, OptionDefinition};

static SHORTCUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("static regex must compile"));

type OptionRule = fn(&str) -> Option<OptionDefinition>;

/// Ordered classification rules for option bodies.
const OPTION_RULES: &[(&str, OptionRule)] = &[
    ("array without default", array_without_default),
    ("scalar without default", scalar_without_default),
    ("array with default", array_with_default),
    ("scalar with default", scalar_with_default),
];

/// Builds an [`OptionDefinition`] from a dash-stripped option token.
///
/// A body matching no rule is a boolean flag.
pub fn build_option(token: &str) -> OptionDefinition {
    let (body, description) = split_description(token);
    let (shortcut, body) = split_shortcut(body);

    let option = OPTION_RULES
        .iter()
        .find_map(|(rule, apply)| {
            apply(body).inspect(|_| trace!(token = body, rule, "Matched option rule"))
        })
        .unwrap_or_else(|| OptionDefinition::flag(body));

    let option = option.with_description(description);
    match shortcut {
        Some(shortcut) => option.with_shortcut(shortcut),
        None => option,
    }
}

/// Splits `S|name` into the shortcut and the remaining body (at most once).
fn split_shortcut(body: &str) -> (Option<&str>, &str) {
    let mut parts = SHORTCUT_RE.splitn(body, 2);
    let first = parts.next().unwrap_or_default();
    match parts.next() {
        Some(rest) => (Some(first), rest),
        None => (None, body),
    }
}

fn array_without_default(body: &str) -> Option<OptionDefinition> {
    body.strip_suffix("=*").map(OptionDefinition::array)
}

fn scalar_without_default(body: &str) -> Option<OptionDefinition> {
    body.strip_suffix('=').map(OptionDefinition::scalar)
}

fn array_with_default(body: &str) -> Option<OptionDefinition> {
    let caps = PATTERNS.array_default.captures(body)?;
    Some(
        OptionDefinition::array(&caps[1])
            .with_default(DefaultValue::List(split_default_list(&caps[2]))),
    )
}

fn scalar_with_default(body: &str) -> Option<OptionDefinition> {
    let caps = PATTERNS.scalar_default.captures(body)?;
    Some(OptionDefinition::scalar(&caps[1]).with_default(DefaultValue::Scalar(caps[2].to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMode;

    #[test]
    fn test_boolean_flag() {
        let option = build_option("force");
        assert_eq!(option, OptionDefinition::flag("force"));
    }

    #[test]
    fn test_scalar_without_default() {
        let option = build_option("queue=");
        assert_eq!(option.name, "queue");
        assert_eq!(option.value_mode, ValueMode::OptionalScalar);
        assert!(option.default.is_none());
    }

    #[test]
    fn test_array_without_default_is_not_read_as_scalar() {
        let option = build_option("tag=*");
        assert_eq!(option.name, "tag");
        assert_eq!(option.value_mode, ValueMode::OptionalArray);
        assert!(option.default.is_none());
    }

    #[test]
    fn test_scalar_with_default() {
        let option = build_option("queue=default");
        assert_eq!(option.value_mode, ValueMode::OptionalScalar);
        assert_eq!(
            option.default,
            Some(DefaultValue::Scalar("default".to_string()))
        );
    }

    #[test]
    fn test_array_with_default() {
        let option = build_option("tag=*red, green");
        assert_eq!(option.name, "tag");
        assert_eq!(option.value_mode, ValueMode::OptionalArray);
        assert_eq!(
            option.default,
            Some(DefaultValue::List(vec![
                "red".to_string(),
                "green".to_string()
            ]))
        );
    }

    #[test]
    fn test_shortcut_is_split_once() {
        let option = build_option("O|option=default");
        assert_eq!(option.shortcut.as_deref(), Some("O"));
        assert_eq!(option.name, "option");

        let option = build_option("a|b|name");
        assert_eq!(option.shortcut.as_deref(), Some("a"));
        assert_eq!(option.name, "b|name");
    }

    #[test]
    fn test_shortcut_separator_tolerates_whitespace() {
        let option = build_option("Q | queue=");
        assert_eq!(option.shortcut.as_deref(), Some("Q"));
        assert_eq!(option.name, "queue");
    }

    #[test]
    fn test_description_with_shortcut() {
        let option = build_option("O|option : Option description");
        assert_eq!(option.shortcut.as_deref(), Some("O"));
        assert_eq!(option.name, "option");
        assert_eq!(option.description, "Option description");
        assert_eq!(option.value_mode, ValueMode::None);
    }
}
