use signature_core::{
    ArgumentDefinition, CommandDefinition, DefaultValue, OptionDefinition, SignatureError,
    ValueMode, parse,
};

fn names<'a, T>(items: &'a [T], name: impl Fn(&'a T) -> &'a str) -> Vec<&'a str> {
    items.iter().map(name).collect()
}

// ---------------------------------------------------------------------------
// Command name
// ---------------------------------------------------------------------------

#[test]
fn parses_command_name_for_every_signature_shape() {
    let cases = [
        ("acme:command", "acme:command"),
        ("  acme:command  ", "acme:command"),
        ("acme:command {argument}", "acme:command"),
        ("acme:command {argument?}", "acme:command"),
        ("acme:command {argument=default}", "acme:command"),
        ("acme:command {--option}", "acme:command"),
        ("acme:command {--option=}", "acme:command"),
        ("acme:command {--option=default}", "acme:command"),
        ("acme:command {argument} {--option}", "acme:command"),
        ("acme:command {argument*}", "acme:command"),
        ("acme:command {--option=*}", "acme:command"),
        ("acme:command {argument : Description}", "acme:command"),
        ("acme:command {--option= : Description}", "acme:command"),
        ("acme:command {argument?*}", "acme:command"),
    ];

    for (signature, expected) in cases {
        let definition = parse(signature).unwrap();
        assert_eq!(definition.name, expected, "signature: {signature}");
    }
}

#[test]
fn name_without_tokens_has_no_arguments_or_options() {
    for signature in ["deploy", "cache:clear", "  x  ", "a{"] {
        let definition = parse(signature).unwrap();
        assert!(definition.is_empty(), "signature: {signature}");
    }
}

#[test]
fn requires_valid_name() {
    let err = parse("").unwrap_err();
    assert_eq!(err, SignatureError::MalformedSignature);
    assert_eq!(
        err.to_string(),
        "unable to determine command name from signature"
    );
    assert_eq!(parse("   ").unwrap_err(), SignatureError::MalformedSignature);
    assert_eq!(parse("\n\t").unwrap_err(), SignatureError::MalformedSignature);
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[test]
fn parses_arguments() {
    let definition =
        parse("acme:command {argument} {optional_argument?} {argument_with_value=default}")
            .unwrap();

    assert_eq!(definition.arguments.len(), 3);
    assert_eq!(definition.arguments[0], ArgumentDefinition::required("argument"));
    assert_eq!(
        definition.arguments[1],
        ArgumentDefinition::optional("optional_argument")
    );
    assert_eq!(
        definition.arguments[2],
        ArgumentDefinition::optional("argument_with_value")
            .with_default(DefaultValue::Scalar("default".to_string()))
    );
}

#[test]
fn parses_argument_arrays() {
    let definition = parse("acme:command {argument*}").unwrap();

    let argument = &definition.arguments[0];
    assert_eq!(argument.name, "argument");
    assert!(argument.is_array);
    assert!(argument.required);
    assert!(argument.default.is_none());
}

#[test]
fn parses_argument_array_with_zero_or_more_items() {
    let definition = parse("acme:command {argument?*}").unwrap();

    let argument = &definition.arguments[0];
    assert_eq!(argument.name, "argument");
    assert!(argument.is_array);
    assert!(!argument.required);
}

#[test]
fn parses_argument_array_with_default_list() {
    let definition = parse("acme:command {names=*alice, bob}").unwrap();

    assert_eq!(
        definition.arguments[0],
        ArgumentDefinition::array("names", false).with_default(DefaultValue::List(vec![
            "alice".to_string(),
            "bob".to_string()
        ]))
    );
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn parses_options() {
    let definition =
        parse("acme:command {--option} {--option_with_value=} {--option_with_default=default}")
            .unwrap();

    assert!(definition.arguments.is_empty());
    assert_eq!(
        definition.options,
        vec![
            OptionDefinition::flag("option"),
            OptionDefinition::scalar("option_with_value"),
            OptionDefinition::scalar("option_with_default")
                .with_default(DefaultValue::Scalar("default".to_string())),
        ]
    );
}

#[test]
fn parses_option_arrays() {
    let definition = parse("acme:command {--option=*}").unwrap();

    assert!(definition.arguments.is_empty());
    assert_eq!(definition.options[0].name, "option");
    assert_eq!(definition.options[0].value_mode, ValueMode::OptionalArray);
    assert!(definition.options[0].default.is_none());
}

#[test]
fn parses_option_array_with_default_list() {
    let definition = parse("acme:command {--tag=*red,green, blue}").unwrap();

    assert_eq!(
        definition.options[0].default,
        Some(DefaultValue::List(vec![
            "red".to_string(),
            "green".to_string(),
            "blue".to_string()
        ]))
    );
}

#[test]
fn parses_option_shortcut() {
    let definition = parse(
        "acme:command {--O|option} {--OWV|option_with_value=} {--OWDV|option_with_default=default}",
    )
    .unwrap();

    let shortcuts: Vec<_> = definition
        .options
        .iter()
        .map(|o| o.shortcut.as_deref())
        .collect();
    assert_eq!(shortcuts, vec![Some("O"), Some("OWV"), Some("OWDV")]);
    assert_eq!(
        names(&definition.options, |o| o.name.as_str()),
        vec!["option", "option_with_value", "option_with_default"]
    );
    assert_eq!(
        definition.options[2].default,
        Some(DefaultValue::Scalar("default".to_string()))
    );
}

#[test]
fn extra_leading_dashes_are_stripped() {
    let definition = parse("cmd {----force}").unwrap();
    assert_eq!(definition.options, vec![OptionDefinition::flag("force")]);
}

#[test]
fn single_dash_token_is_an_argument() {
    let definition = parse("cmd {-x}").unwrap();
    assert!(definition.options.is_empty());
    assert_eq!(definition.arguments[0].name, "-x");
}

// ---------------------------------------------------------------------------
// Descriptions, ordering, determinism
// ---------------------------------------------------------------------------

#[test]
fn parses_descriptions() {
    let definition =
        parse("acme:command {argument : Argument description} {--option= : Option description}")
            .unwrap();

    assert_eq!(definition.arguments[0].description, "Argument description");
    assert_eq!(definition.options[0].description, "Option description");
    assert_eq!(definition.options[0].value_mode, ValueMode::OptionalScalar);
}

#[test]
fn description_may_contain_colons() {
    let definition = parse("cmd {when : Format is HH : MM}").unwrap();
    assert_eq!(definition.arguments[0].description, "Format is HH : MM");
}

#[test]
fn preserves_declaration_order() {
    let definition = parse("cmd {third} {--b} {first?} {--a=} {second?*}").unwrap();

    assert_eq!(
        names(&definition.arguments, |a| a.name.as_str()),
        vec!["third", "first", "second"]
    );
    assert_eq!(names(&definition.options, |o| o.name.as_str()), vec!["b", "a"]);
}

#[test]
fn parsing_is_deterministic() {
    let signature = "mail:send {user} {cc?*} {--Q|queue=default} {--tag=*a,b} {--dry-run}";
    let first: CommandDefinition = parse(signature).unwrap();
    let second: CommandDefinition = parse(signature).unwrap();
    assert_eq!(first, second);
}

#[test]
fn stray_braces_are_ignored() {
    let definition = parse("cmd {user} } {--force").unwrap();
    assert_eq!(definition.arguments.len(), 1);
    assert!(definition.options.is_empty());
}

#[test]
fn definition_serializes_to_json() {
    let definition = parse("cmd {files?*} {--Q|queue=default}").unwrap();
    let json = serde_json::to_value(&definition).unwrap();

    assert_eq!(json["name"], "cmd");
    assert_eq!(json["arguments"][0]["is_array"], true);
    assert_eq!(json["options"][0]["shortcut"], "Q");
    assert_eq!(json["options"][0]["value_mode"], "optional_scalar");
    assert_eq!(json["options"][0]["default"], "default");
}
