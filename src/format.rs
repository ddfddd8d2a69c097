use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::error::{CorrectionError, ParseError};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Options {
    pub indent: usize,
    pub sort_keys: bool,
}

pub fn format(data: &[u8], opts: &Options) -> Result<String, ParseError> {
    let mut value: Value = serde_json::from_slice(data)?;

    if opts.sort_keys {
        value = sort_keys(value);
    }

    let indent = " ".repeat(opts.indent);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut buf,
        PrettyFormatter::with_indent(indent.as_bytes()),
    );
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}

pub fn is_valid(data: &[u8]) -> bool {
    serde_json::from_slice::<serde::de::IgnoredAny>(data).is_ok()
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            entries.sort_by(|(left, _), (right, _)| left.cmp(right));
            Value::Object(entries.into_iter().collect())
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value,
    }
}

/// Single-pass textual repair for two syntax mistakes: unquoted object keys
/// and trailing commas before a closing brace or bracket. Anything else still
/// fails. The key repair is line-based and does not understand strings, so a
/// colon inside a string value or several pairs on one line will confuse it.
pub fn auto_correct(data: &[u8]) -> Result<String, CorrectionError> {
    let text = std::str::from_utf8(data)?;

    let corrected = text
        .split('\n')
        .map(quote_bare_key)
        .collect::<Vec<_>>()
        .join("\n")
        .replace(",\n}", "\n}")
        .replace(",\n]", "\n]");

    match serde_json::from_str::<serde::de::IgnoredAny>(&corrected) {
        Ok(_) => Ok(corrected),
        Err(err) => Err(CorrectionError::StillInvalid(err)),
    }
}

fn quote_bare_key(line: &str) -> String {
    let Some((before_colon, _)) = line.split_once(':') else {
        return line.to_string();
    };

    let key = before_colon.trim();
    if key.starts_with('"') && key.ends_with('"') {
        return line.to_string();
    }

    line.replacen(key, &format!("\"{key}\""), 1)
}
