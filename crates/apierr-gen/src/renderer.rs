//! Rendering of error definitions into Rust source.
//!
//! Uses Handlebars with escaping disabled and these helpers:
//! - title: uppercase the first character
//! - snake: split words and join lowercase with `_`
//! - screaming: split words and join uppercase with `_`
//! - lit: quote as a Rust string literal
//! - line: collapse text onto one line for doc comments

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::schema::{ErrorDef, ErrorsFile};
use crate::template::{ERRORS_TEMPLATE, ERRORS_TEMPLATE_NAME};
use crate::RenderError;

/// Name imported at the top of every generated module.
const IMPORTED_TYPE: &str = "CustomError";

/// Members of every generated struct that arguments must not shadow.
const GENERATED_MEMBERS: &[&str] = &["base", "new", "as_custom_error", "into_custom_error"];

/// Knobs for the generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Path under which `CustomError` is imported, e.g. `apierr` or `crate`.
    pub crate_path: String,
    /// Tool name written into the header comment.
    pub generator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            crate_path: "apierr".to_string(),
            generator: "apierr-gen".to_string(),
        }
    }
}

#[derive(Serialize)]
struct TemplateData<'a> {
    generator: &'a str,
    crate_path: &'a str,
    errors: &'a [ErrorDef],
    err_types: &'a [String],
    err_codes: &'a [String],
}

/// Compiled renderer with registered helpers
pub struct ErrorRenderer {
    handlebars: Handlebars<'static>,
    options: RenderOptions,
}

impl ErrorRenderer {
    pub fn new(options: RenderOptions) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("title", Box::new(title));
        handlebars.register_helper("snake", Box::new(snake));
        handlebars.register_helper("screaming", Box::new(screaming));
        handlebars.register_helper("lit", Box::new(lit));
        handlebars.register_helper("line", Box::new(line));

        handlebars
            .register_template_string(ERRORS_TEMPLATE_NAME, ERRORS_TEMPLATE)
            .map_err(|e| RenderError::Template(Box::new(e)))?;

        Ok(Self { handlebars, options })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `file` into a Rust module. Same input, same bytes.
    pub fn render(&self, file: &ErrorsFile) -> Result<String, RenderError> {
        check_names(file)?;

        let data = TemplateData {
            generator: &self.options.generator,
            crate_path: &self.options.crate_path,
            errors: file.errors(),
            err_types: file.err_types(),
            err_codes: file.err_codes(),
        };
        let raw = self
            .handlebars
            .render(ERRORS_TEMPLATE_NAME, &data)
            .map_err(|e| RenderError::Expansion(Box::new(e)))?;

        Ok(tidy(&raw))
    }
}

/// Renders with [`RenderOptions::default`].
pub fn render(file: &ErrorsFile) -> Result<String, RenderError> {
    ErrorRenderer::new(RenderOptions::default())?.render(file)
}

/// Fails on duplicate names and on identifiers generated twice.
fn check_names(file: &ErrorsFile) -> Result<(), RenderError> {
    let mut owners: HashMap<String, String> = HashMap::new();
    owners.insert(IMPORTED_TYPE.to_string(), format!("the `{}` import", IMPORTED_TYPE));
    let mut claim = |ident: String, owner: String| -> Result<(), RenderError> {
        match owners.get(&ident) {
            Some(first) => Err(RenderError::NameCollision {
                ident,
                first: first.clone(),
                second: owner,
            }),
            None => {
                owners.insert(ident, owner);
                Ok(())
            }
        }
    };

    let mut seen = HashSet::new();
    for def in file.errors() {
        if !seen.insert(def.name.as_str()) {
            return Err(RenderError::DuplicateName(def.name.clone()));
        }
    }

    for def in file.errors() {
        let owner = format!("error `{}`", def.name);
        claim(format!("ERROR_{}", screaming_case(&def.name)), owner.clone())?;
        claim(format!("{}Error", title_case(&def.name)), owner.clone())?;
        claim(format!("new_{}_error", snake_case(&def.name)), owner.clone())?;

        for arg in &def.args {
            if GENERATED_MEMBERS.contains(&arg.name.as_str()) {
                return Err(RenderError::NameCollision {
                    ident: arg.name.clone(),
                    first: format!("generated member of `{}Error`", title_case(&def.name)),
                    second: format!("argument of {}", owner),
                });
            }
        }
    }
    for err_type in file.err_types() {
        claim(
            format!("ERR_TYPE_{}", screaming_case(err_type)),
            format!("err_type `{}`", err_type),
        )?;
    }
    for err_code in file.err_codes() {
        claim(
            format!("ERR_CODE_{}", screaming_case(err_code)),
            format!("err_code `{}`", err_code),
        )?;
    }
    Ok(())
}

handlebars_helper!(title: |s: str| title_case(s));
handlebars_helper!(snake: |s: str| snake_case(s));
handlebars_helper!(screaming: |s: str| screaming_case(s));
handlebars_helper!(lit: |s: str| format!("{:?}", s));
handlebars_helper!(line: |s: str| s.split_whitespace().collect::<Vec<_>>().join(" "));

/// Returns the input with the first letter capitalized.
pub fn title_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn snake_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn screaming_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Splits on non-alphanumerics and on case boundaries (`HTTPError` -> `HTTP`, `Error`).
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Strips trailing whitespace and blank lines that carry no layout.
fn tidy(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());

    for (i, &text) in lines.iter().enumerate() {
        if text.is_empty() {
            let prev = kept.last().copied().unwrap_or("");
            let next = lines[i + 1..]
                .iter()
                .find(|l| !l.is_empty())
                .copied()
                .unwrap_or("");
            if prev.is_empty() || prev.ends_with('{') || next.trim_start().starts_with('}') {
                continue;
            }
        }
        kept.push(text);
    }

    let mut out = kept.join("\n");
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
