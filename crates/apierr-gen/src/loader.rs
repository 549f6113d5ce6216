//! Loading and validation of error definition files.

use crate::schema::{ErrorDef, ErrorsFile, RawErrorsFile};
use crate::SchemaError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Words that cannot be used as argument names in generated code.
const RESERVED: &[&str] = &[
    "_", "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for",
    "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut",
    "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

/// Reads and validates an error definitions file.
pub fn load(path: impl AsRef<Path>) -> Result<ErrorsFile, SchemaError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml(&content)
}

/// Parses and validates error definitions from YAML text.
pub fn from_yaml(yaml: &str) -> Result<ErrorsFile, SchemaError> {
    let raw: RawErrorsFile = serde_yaml::from_str(yaml)?;
    validate(&raw.errors)?;
    Ok(ErrorsFile::new(raw.errors))
}

/// Checks every definition and the set as a whole.
pub fn validate(errors: &[ErrorDef]) -> Result<(), SchemaError> {
    if errors.is_empty() {
        return Err(SchemaError::Validation(
            "no errors defined in error definitions".to_string(),
        ));
    }

    let mut names = HashSet::new();
    for def in errors {
        validate_def(def).map_err(|reason| {
            SchemaError::Validation(format!("error `{}`: {}", def.name, reason))
        })?;
        if !names.insert(def.name.as_str()) {
            return Err(SchemaError::Validation(format!(
                "error `{}` is defined more than once",
                def.name
            )));
        }
    }
    Ok(())
}

fn validate_def(def: &ErrorDef) -> Result<(), String> {
    if !IDENTIFIER.is_match(&def.name) || def.name == "_" {
        return Err("name is not a valid identifier".to_string());
    }
    if !(100..=599).contains(&def.status_code) {
        return Err(format!("status code {} is out of range", def.status_code));
    }

    let mut arg_names = HashSet::new();
    for arg in &def.args {
        if !IDENTIFIER.is_match(&arg.name) || RESERVED.contains(&arg.name.as_str()) {
            return Err(format!("argument `{}` is not a usable identifier", arg.name));
        }
        if arg.arg_type.trim().is_empty() {
            return Err(format!("argument `{}` has no type", arg.name));
        }
        if arg.arg_type.contains(['&', '\'']) {
            return Err(format!(
                "argument `{}` must have an owned type, got `{}`",
                arg.name, arg.arg_type
            ));
        }
        if !arg_names.insert(arg.name.as_str()) {
            return Err(format!("argument `{}` is repeated", arg.name));
        }
    }

    let placeholders = count_placeholders(&def.err_msg)?;
    if placeholders != def.args.len() {
        return Err(format!(
            "err_msg has {} placeholder(s) but {} argument(s) are declared",
            placeholders,
            def.args.len()
        ));
    }
    Ok(())
}

/// Counts `{}` / `{:spec}` placeholders, treating `{{` and `}}` as literals.
pub fn count_placeholders(format: &str) -> Result<usize, String> {
    let mut chars = format.chars().peekable();
    let mut count = 0;

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    continue;
                }
                let mut spec = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => spec.push(ch),
                        None => return Err("err_msg has an unterminated `{`".to_string()),
                    }
                }
                if !(spec.is_empty() || spec.starts_with(':')) {
                    return Err(format!(
                        "err_msg placeholder `{{{}}}` must be positional-free",
                        spec
                    ));
                }
                if spec.contains(['*', '$']) {
                    return Err(format!(
                        "err_msg placeholder `{{{}}}` takes its width or precision from an argument",
                        spec
                    ));
                }
                count += 1;
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                } else {
                    return Err("err_msg has an unmatched `}`".to_string());
                }
            }
            _ => {}
        }
    }
    Ok(count)
}
