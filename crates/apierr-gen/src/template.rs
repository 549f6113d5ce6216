//! Handlebars template for generated error modules.
//!
//! Context fields: `generator`, `crate_path`, `errors`, `err_types`,
//! `err_codes`. Helpers are registered by the renderer.
//!
//! Block tags sit at line ends, never alone on a line, so each iteration
//! contributes exactly its own lines. Literal Rust braces never touch a `{{`
//! expression: `{{{` would be read as a raw block.

pub const ERRORS_TEMPLATE_NAME: &str = "errors";

pub const ERRORS_TEMPLATE: &str = r#"// Code generated by {{generator}}. DO NOT EDIT.

use {{crate_path}}::CustomError;

// Error names{{#each errors}}
/// {{line description}}
pub const ERROR_{{screaming name}}: &str = {{lit name}};{{/each}}

// Error types{{#each err_types}}
pub const ERR_TYPE_{{screaming this}}: &str = {{lit this}};{{/each}}

// Error codes{{#each err_codes}}
pub const ERR_CODE_{{screaming this}}: &str = {{lit this}};{{/each}}{{#each errors}}

/// {{line description}}
#[derive(Debug)]
pub struct {{title name}}Error {
    base: CustomError,{{#each args}}
    {{name}}: {{arg_type}},{{/each}}
}

impl {{title name}}Error {
    /// Creates a new `{{title name}}Error`.
    pub fn new({{#each args}}{{name}}: {{arg_type}}{{#unless @last}}, {{/unless}}{{/each}}) -> Self {
        let base = CustomError::new(
            {{status_code}},
            format!({{lit err_msg}}{{#each args}}, {{name}}{{/each}}),
            {{lit display_msg}},
            {{lit err_type}},
            {{lit err_code}},
            {{retryable}},
        );
        Self {
            base,{{#each args}}
            {{name}},{{/each}}
        }
    }{{#each args}}

    /// Returns the `{{name}}` argument of this `{{title ../name}}Error`.
    pub fn {{name}}(&self) -> &{{arg_type}} {
        &self.{{name}}
    }{{/each}}

    pub fn as_custom_error(&self) -> &CustomError {
        &self.base
    }

    pub fn into_custom_error(self) -> CustomError {
        self.base
    }
}

impl std::fmt::Display for {{title name}}Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for {{title name}}Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.base)
    }
}

impl From<{{title name}}Error> for CustomError {
    fn from(err: {{title name}}Error) -> Self {
        err.base
    }
}

/// Creates a `{{name}}` error as a [`CustomError`].
pub fn new_{{snake name}}_error({{#each args}}{{name}}: {{arg_type}}{{#unless @last}}, {{/unless}}{{/each}}) -> CustomError {
    {{title name}}Error::new({{#each args}}{{name}}{{#unless @last}}, {{/unless}}{{/each}}).into_custom_error()
}{{/each}}
"#;
