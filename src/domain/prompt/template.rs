//! Prompt template parsing and rendering
//!
//! Supports variable syntax: `${var:variable-name:default-value}`
//! - `${var:name}` - Required variable, error if not provided
//! - `${var:name:default}` - Optional variable with default value

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Regex to match variable patterns: ${var:name} or ${var:name:default}
static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{var:([a-zA-Z0-9][-a-zA-Z0-9]*)(?::([^}]*))?\}").unwrap()
});

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },
}

/// A parsed variable from a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptVariable {
    /// Variable name
    pub name: String,
    /// Default value if provided
    pub default: Option<String>,
    /// Whether the variable is required (no default)
    pub required: bool,
}

impl PromptVariable {
    /// Create a required variable
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            required: true,
        }
    }

    /// Create an optional variable with a default
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
            required: false,
        }
    }
}

/// A parsed prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// Original template content
    content: String,
    /// Parsed variables
    variables: Vec<PromptVariable>,
}

impl PromptTemplate {
    /// Parse a template string and extract variables
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut variables = Vec::new();
        let mut seen_names = std::collections::HashSet::new();

        for cap in VARIABLE_PATTERN.captures_iter(&content) {
            let name = cap.get(1).unwrap().as_str().to_string();

            // Skip duplicates
            if seen_names.contains(&name) {
                continue;
            }
            seen_names.insert(name.clone());

            let default = cap.get(2).map(|m| m.as_str().to_string());

            let variable = if let Some(default_value) = default {
                PromptVariable::with_default(&name, default_value)
            } else {
                PromptVariable::required(&name)
            };

            variables.push(variable);
        }

        Self { content, variables }
    }

    /// Get the original template content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get all parsed variables
    pub fn variables(&self) -> &[PromptVariable] {
        &self.variables
    }

    /// Get only required variables (no default value)
    pub fn required_variables(&self) -> Vec<&PromptVariable> {
        self.variables.iter().filter(|v| v.required).collect()
    }

    /// Render the template with provided values
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut result = self.content.clone();

        for var in &self.variables {
            let value = values.get(&var.name).or(var.default.as_ref());

            match value {
                Some(v) => {
                    let pattern = if let Some(ref default) = var.default {
                        format!("${{var:{}:{}}}", var.name, default)
                    } else {
                        format!("${{var:{}}}", var.name)
                    };
                    result = result.replace(&pattern, v);
                }
                None => {
                    return Err(TemplateError::MissingVariable {
                        name: var.name.clone(),
                    });
                }
            }
        }

        Ok(result)
    }
}
