//! Reply template loading and rendering
//!
//! Built-in templates are embedded at compile time. An optional JSON file
//! can override any subset of keys, which is how wording is localized or
//! adjusted without a rebuild.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{info, warn, debug};
use crate::config::TemplatesConfig;
use crate::utils::errors::{StoreBuddyError, Result};
use super::ids::TemplateId;

const BUILTIN_PT_BR: &str = include_str!("../../templates/pt-BR.json");
const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Template parameters for message formatting
pub type TemplateParams = HashMap<String, String>;

/// Loaded reply templates
#[derive(Debug, Clone)]
pub struct Templates {
    language: String,
    entries: Map<String, Value>,
}

impl Templates {
    /// Built-in templates for the default language
    pub fn builtin() -> Result<Self> {
        Self::builtin_for(DEFAULT_LANGUAGE)
    }

    /// Built-in templates for a language tag
    pub fn builtin_for(language: &str) -> Result<Self> {
        let source = match language {
            "pt-BR" => BUILTIN_PT_BR,
            other => {
                return Err(StoreBuddyError::Template(format!(
                    "No built-in templates for language: {}",
                    other
                )))
            }
        };

        let templates = Self {
            language: language.to_string(),
            entries: parse_object(source, language)?,
        };
        templates.validate()?;
        Ok(templates)
    }

    /// Built-in templates merged with the configured overrides file
    pub async fn load(config: &TemplatesConfig) -> Result<Self> {
        let mut templates = Self::builtin_for(&config.language)?;

        if let Some(path) = &config.overrides_path {
            templates.load_overrides(Path::new(path)).await?;
        }

        info!(language = %templates.language, "Reply templates loaded");
        Ok(templates)
    }

    /// Merge a JSON overrides file on top of the current templates
    pub async fn load_overrides(&mut self, file_path: &Path) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let overrides = parse_object(&content, &file_path.display().to_string())?;

        let count = count_keys(&overrides);
        merge(&mut self.entries, overrides);
        self.validate()?;

        debug!(path = %file_path.display(), keys = count, "Applied template overrides");
        Ok(())
    }

    /// Language tag of the loaded templates
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Render a template with parameters
    pub fn render(&self, id: TemplateId, params: &TemplateParams) -> String {
        match self.lookup(id.key()) {
            Some(text) => format_message(text, params),
            None => {
                warn!("Template '{}' not found", id.key());
                id.key().to_string()
            }
        }
    }

    /// Ensure every template id resolves to a string
    fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = TemplateId::ALL
            .iter()
            .map(|id| id.key())
            .filter(|key| self.lookup(key).is_none())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StoreBuddyError::Template(format!("Missing templates: {}", missing.join(", "))))
        }
    }

    /// Resolve a dotted key like "menu.main"
    fn lookup(&self, key: &str) -> Option<&str> {
        let mut parts = key.split('.');
        let mut current = self.entries.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        current.as_str()
    }
}

fn parse_object(content: &str, source: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreBuddyError::Template(format!("Invalid template file format: {}", source))),
    }
}

/// Recursively merge `overrides` into `base`
fn merge(base: &mut Map<String, Value>, overrides: Map<String, Value>) {
    for (key, value) in overrides {
        match base.get_mut(&key) {
            Some(Value::Object(existing)) if value.is_object() => {
                if let Value::Object(nested) = value {
                    merge(existing, nested);
                }
            }
            _ => {
                base.insert(key, value);
            }
        }
    }
}

fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

/// Replace `{name}` placeholders with parameter values
fn format_message(template: &str, params: &TemplateParams) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
