//! Output formatting for parsed definitions.

use comfy_table::{Table, presets};
use signature_core::{ArgumentDefinition, CommandDefinition, DefaultValue, OptionDefinition, ValueMode};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats definitions in the requested output format.
///
/// JSON and YAML emit a single object for one definition and a list
/// otherwise.
pub fn format_definitions(
    definitions: &[CommandDefinition],
    format: OutputFormat,
) -> Result<String, String> {
    match (format, definitions) {
        (OutputFormat::Json, [definition]) => serde_json::to_string_pretty(definition)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        (OutputFormat::Json, _) => serde_json::to_string_pretty(definitions)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        (OutputFormat::Yaml, [definition]) => {
            serde_yaml::to_string(definition).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        (OutputFormat::Yaml, _) => serde_yaml::to_string(definitions)
            .map_err(|e| format!("YAML serialization failed: {e}")),
        (OutputFormat::Markdown, _) => Ok(definitions
            .iter()
            .map(definition_to_markdown)
            .collect::<Vec<_>>()
            .join("\n")),
        (OutputFormat::Table, _) => Ok(definitions
            .iter()
            .map(definition_to_table)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn definition_to_markdown(definition: &CommandDefinition) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", definition.name));

    if !definition.arguments.is_empty() {
        out.push_str("## Arguments\n\n");
        out.push_str("| Argument | Required | Default | Description |\n");
        out.push_str("|----------|----------|---------|-------------|\n");
        for argument in &definition.arguments {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                argument_label(argument),
                if argument.required { "yes" } else { "no" },
                default_label(argument.default.as_ref()),
                argument.description
            ));
        }
        out.push('\n');
    }

    if !definition.options.is_empty() {
        out.push_str("## Options\n\n");
        out.push_str("| Option | Value | Default | Description |\n");
        out.push_str("|--------|-------|---------|-------------|\n");
        for option in &definition.options {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                option_label(option),
                mode_label(option.value_mode),
                default_label(option.default.as_ref()),
                option.description
            ));
        }
        out.push('\n');
    }

    out
}

fn definition_to_table(definition: &CommandDefinition) -> String {
    let mut out = format!("Command: {}\n", definition.name);
    if definition.is_empty() {
        return out;
    }

    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(vec!["Kind", "Name", "Value", "Default", "Description"]);
    for argument in &definition.arguments {
        table.add_row(vec![
            "argument".to_string(),
            argument_label(argument),
            if argument.required { "required" } else { "optional" }.to_string(),
            default_label(argument.default.as_ref()),
            argument.description.clone(),
        ]);
    }
    for option in &definition.options {
        table.add_row(vec![
            "option".to_string(),
            option_label(option),
            mode_label(option.value_mode).to_string(),
            default_label(option.default.as_ref()),
            option.description.clone(),
        ]);
    }

    out.push_str(&table.to_string());
    out.push('\n');
    out
}

fn argument_label(argument: &ArgumentDefinition) -> String {
    if argument.is_array {
        format!("{}...", argument.name)
    } else {
        argument.name.clone()
    }
}

fn option_label(option: &OptionDefinition) -> String {
    let long = format!("--{}", option.name);
    match option.shortcut.as_deref() {
        Some(shortcut) if shortcut.chars().count() == 1 => format!("-{shortcut}, {long}"),
        Some(shortcut) => format!("--{shortcut}, {long}"),
        None => long,
    }
}

fn mode_label(mode: ValueMode) -> &'static str {
    match mode {
        ValueMode::None => "flag",
        ValueMode::OptionalScalar => "value",
        ValueMode::OptionalArray => "values",
    }
}

fn default_label(default: Option<&DefaultValue>) -> String {
    match default {
        Some(DefaultValue::Scalar(value)) => value.clone(),
        Some(DefaultValue::List(values)) => values.join(", "),
        None => String::new(),
    }
}
