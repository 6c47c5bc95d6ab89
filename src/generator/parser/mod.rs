
use crate::generator::errors::ParseError;
use crate::params::{Namespace, ParamType, Parameter};
use once_cell::sync::Lazy;
use regex::Regex;

const COMMENT_MARKER: char = '#';
const COMMAND_MARKER: char = '@';
const NAMESPACE_COMMAND: &str = "@namespace";

// A field is a bare token, a parenthesized group, or an unclosed group. The
// last two are checked separately so a bad pair is reported instead of being
// split into stray tokens.
static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\([^)]*\)|\([^)]*$|[\w"+.\-]+"#).expect("valid field regex"));

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[\w"+.\-]+$"#).expect("valid token regex"));

/// Parses a parameter definition file into records, in file order.
pub fn parse_source(source: &str) -> Result<Vec<Parameter>, ParseError> {
    let mut params = Vec::new();
    let mut namespace: Option<Namespace> = None;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;

        if raw.starts_with(COMMENT_MARKER) || raw.trim().is_empty() {
            continue;
        }

        if raw.starts_with(COMMAND_MARKER) {
            namespace = Some(parse_command(raw, line)?);
            continue;
        }

        params.push(parse_data_line(raw, line, namespace.as_ref())?);
    }

    Ok(params)
}

fn parse_command(raw: &str, line: usize) -> Result<Namespace, ParseError> {
    let (command, value) = raw.split_once(':').ok_or_else(|| ParseError::MalformedCommand {
        line,
        text: raw.trim().to_string(),
    })?;

    let command = command.trim();
    if command != NAMESPACE_COMMAND {
        return Err(ParseError::InvalidCommand {
            line,
            command: command.to_string(),
        });
    }

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(name), Some(class_name)) => Ok(Namespace::new(name, class_name)),
        _ => Err(ParseError::MalformedCommand {
            line,
            text: raw.trim().to_string(),
        }),
    }
}

fn parse_data_line(
    raw: &str,
    line: usize,
    namespace: Option<&Namespace>,
) -> Result<Parameter, ParseError> {
    let fields: Vec<&str> = FIELD_RE.find_iter(raw).map(|m| m.as_str()).collect();

    let name_field = *fields
        .first()
        .ok_or(ParseError::MissingField { line, field: "name" })?;
    let (name, code_name) = match split_pair(name_field, "name", line)? {
        Some((name, code_name)) => (name, code_name),
        None => (name_field.to_string(), name_field.to_string()),
    };

    let namespace = namespace.ok_or_else(|| ParseError::NamespaceNotSet {
        line,
        name: name.clone(),
    })?;

    let dtype = *fields.get(1).ok_or(ParseError::MissingField { line, field: "type" })?;
    reject_pair(dtype, "type", line)?;
    let param_type: ParamType = dtype.parse().map_err(|_| ParseError::InvalidDataType {
        line,
        name: name.clone(),
        dtype: dtype.to_lowercase(),
    })?;

    let default_field = *fields
        .get(2)
        .ok_or(ParseError::MissingField { line, field: "default" })?;
    let (default, debug_default) = match split_pair(default_field, "default", line)? {
        Some((default, debug_default)) => (default, Some(debug_default)),
        None => (default_field.to_string(), None),
    };

    let in_fortran = match fields.get(3) {
        Some(flag) => {
            reject_pair(flag, "fortran flag", line)?;
            flag.trim().eq_ignore_ascii_case("y")
        }
        None => false,
    };

    let guard = match fields.get(4) {
        Some(&"None") | None => None,
        Some(symbol) => {
            reject_pair(symbol, "guard", line)?;
            Some(symbol.to_string())
        }
    };

    Ok(Parameter {
        name,
        code_name,
        param_type,
        default,
        debug_default,
        in_fortran,
        guard,
        namespace: namespace.clone(),
        line,
    })
}

/// Splits `(a, b)` into its two tokens. Returns `None` for a bare token.
fn split_pair(
    field: &str,
    which: &'static str,
    line: usize,
) -> Result<Option<(String, String)>, ParseError> {
    if !field.starts_with('(') {
        return Ok(None);
    }

    let malformed = || ParseError::MalformedPair {
        line,
        field: which,
        text: field.to_string(),
    };

    let inner = field
        .strip_prefix('(')
        .and_then(|f| f.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [first, second] if TOKEN_RE.is_match(first) && TOKEN_RE.is_match(second) => {
            Ok(Some((first.to_string(), second.to_string())))
        }
        _ => Err(malformed()),
    }
}

fn reject_pair(field: &str, which: &'static str, line: usize) -> Result<(), ParseError> {
    if field.starts_with('(') {
        return Err(ParseError::MalformedPair {
            line,
            field: which,
            text: field.to_string(),
        });
    }
    Ok(())
}
