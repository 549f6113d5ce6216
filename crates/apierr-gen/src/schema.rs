//! In-memory form of an error definitions file.
//!
//! The YAML layout is:
//!
//! ```yaml
//! errors:
//!   - name: NotFound
//!     description: The requested resource could not be found.
//!     err_type: NOT_FOUND
//!     err_code: NOT_FOUND
//!     err_msg: "{} not found"
//!     display_msg: The requested resource could not be found.
//!     status_code: 404
//!     retryable: false
//!     args:
//!       - name: resource
//!         arg_type: String
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgDef {
    pub name: String,
    /// Rust type of the parameter, e.g. `String` or `u64`.
    #[serde(rename = "arg_type", alias = "type")]
    pub arg_type: String,
}

impl ArgDef {
    pub fn new(name: impl Into<String>, arg_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: arg_type.into(),
        }
    }
}

/// One error definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub err_type: String,
    pub err_code: String,
    /// Format string with one `{}` placeholder per argument.
    pub err_msg: String,
    #[serde(default)]
    pub display_msg: String,
    pub status_code: u16,
    #[serde(default)]
    pub retryable: bool,
    #[serde(default)]
    pub args: Vec<ArgDef>,
}

/// Raw file shape; only `errors` is read from the source.
#[derive(Debug, Deserialize)]
pub(crate) struct RawErrorsFile {
    #[serde(default)]
    pub errors: Vec<ErrorDef>,
}

/// A set of error definitions with derived type and code lists.
///
/// `err_types` and `err_codes` are always recomputed from `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorsFile {
    errors: Vec<ErrorDef>,
    err_types: Vec<String>,
    err_codes: Vec<String>,
}

impl ErrorsFile {
    /// Builds a model from definitions without validating them.
    pub fn new(errors: Vec<ErrorDef>) -> Self {
        let (err_types, err_codes) = unique_types_and_codes(&errors);
        Self {
            errors,
            err_types,
            err_codes,
        }
    }

    pub fn errors(&self) -> &[ErrorDef] {
        &self.errors
    }

    /// Distinct `err_type` values in first-seen order.
    pub fn err_types(&self) -> &[String] {
        &self.err_types
    }

    /// Distinct `err_code` values in first-seen order.
    pub fn err_codes(&self) -> &[String] {
        &self.err_codes
    }

    pub fn into_errors(self) -> Vec<ErrorDef> {
        self.errors
    }
}

/// First occurrence wins, case-sensitive, empty values skipped.
fn unique_types_and_codes(defs: &[ErrorDef]) -> (Vec<String>, Vec<String>) {
    let mut types = Vec::new();
    let mut codes = Vec::new();
    let mut seen_types = HashSet::new();
    let mut seen_codes = HashSet::new();

    for def in defs {
        if !def.err_type.is_empty() && seen_types.insert(def.err_type.as_str()) {
            types.push(def.err_type.clone());
        }
        if !def.err_code.is_empty() && seen_codes.insert(def.err_code.as_str()) {
            codes.push(def.err_code.clone());
        }
    }

    (types, codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, err_type: &str, err_code: &str) -> ErrorDef {
        ErrorDef {
            name: name.to_string(),
            description: String::new(),
            err_type: err_type.to_string(),
            err_code: err_code.to_string(),
            err_msg: "failed".to_string(),
            display_msg: "failed".to_string(),
            status_code: 500,
            retryable: false,
            args: Vec::new(),
        }
    }

    #[test]
    fn test_projection_keeps_first_seen_order() {
        let file = ErrorsFile::new(vec![
            def("A", "ZETA", "Z_1"),
            def("B", "ALPHA", "A_1"),
            def("C", "ZETA", "Z_2"),
            def("D", "MID", "A_1"),
        ]);

        assert_eq!(file.err_types(), ["ZETA", "ALPHA", "MID"]);
        assert_eq!(file.err_codes(), ["Z_1", "A_1", "Z_2"]);
    }

    #[test]
    fn test_projection_is_case_sensitive_and_skips_empty() {
        let file = ErrorsFile::new(vec![
            def("A", "auth", ""),
            def("B", "AUTH", ""),
            def("C", "", "CODE"),
        ]);

        assert_eq!(file.err_types(), ["auth", "AUTH"]);
        assert_eq!(file.err_codes(), ["CODE"]);
    }
}
