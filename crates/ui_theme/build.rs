use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const SCHEMA_VERSION: i64 = 1;
const TOKEN_GROUPS: &[(&str, &str)] = &[
    ("colors", "Colors"),
    ("spacing", "Spacing"),
    ("radius", "Radius"),
    ("font-size", "FontSize"),
    ("font-weight", "FontWeight"),
];

#[derive(Debug, Deserialize)]
struct ThemeFile {
    schema_version: i64,
    #[serde(flatten)]
    groups: toml::Table,
}

fn is_valid_token_name(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= 32
        && !raw.starts_with('-')
        && !raw.ends_with('-')
        && raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Class names the style configuration layer derives from a token.
fn utility_classes(group: &str, name: &str) -> Vec<String> {
    match group {
        "colors" => vec![
            format!("text-{name}"),
            format!("bg-{name}"),
            format!("border-{name}"),
        ],
        "spacing" => ["p", "px", "py", "m", "gap"]
            .iter()
            .map(|prefix| format!("{prefix}-{name}"))
            .collect(),
        "radius" if name == "default" => vec!["rounded".to_string()],
        "radius" => vec![format!("rounded-{name}")],
        "font-size" => vec![format!("text-{name}")],
        "font-weight" => vec![format!("font-{name}")],
        _ => Vec::new(),
    }
}

fn render_value(path: &str, group: &str, name: &str, value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => format!("RawValue::Text({text:?})"),
        toml::Value::Integer(number) => format!("RawValue::Number({:?})", *number as f64),
        toml::Value::Float(number) if number.is_finite() => format!("RawValue::Number({number:?})"),
        toml::Value::Float(number) => {
            panic!("token `{group}.{name}` in {path} must be a finite number, found {number}")
        }
        other => panic!(
            "token `{group}.{name}` in {path} must be a string or number, found {}",
            other.type_str()
        ),
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("theme.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let display = path.display().to_string();
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {display}: {err}"));
    let file: ThemeFile =
        toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {display}: {err}"));
    if file.schema_version != SCHEMA_VERSION {
        panic!(
            "theme schema mismatch in {display}: expected {SCHEMA_VERSION} found {}",
            file.schema_version
        );
    }

    let mut generated = String::from(
        "/// Build-time generated design token table.\n\
pub(crate) const THEME_TOKENS: &[RawToken] = &[\n",
    );
    let mut claimed = BTreeMap::<String, String>::new();
    for (group, entries) in &file.groups {
        let Some((_, variant)) = TOKEN_GROUPS.iter().find(|(token, _)| token == group) else {
            panic!("unknown token group `{group}` in {display}");
        };
        let Some(entries) = entries.as_table() else {
            panic!("token group `{group}` in {display} must be a table");
        };
        for (name, value) in entries {
            if !is_valid_token_name(name) {
                panic!("invalid token name `{group}.{name}` in {display}; expected lowercase kebab-case");
            }
            for class in utility_classes(group, name) {
                if let Some(existing) = claimed.insert(class.clone(), format!("{group}.{name}")) {
                    panic!(
                        "utility `{class}` in {display} is derived from both {existing} and {group}.{name}"
                    );
                }
            }
            let value = render_value(&display, group, name, value);
            writeln!(
                generated,
                "    RawToken {{ group: TokenGroup::{variant}, name: {name:?}, value: {value} }},"
            )
            .expect("write generated token");
        }
    }
    generated.push_str("];\n");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("theme_tokens_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
