//! Project-level settings and template rendering context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::naming;

/// Settings captured by the application generator's prompts and persisted in
/// the project configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    #[serde(default)]
    pub base_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_notification_email: Option<String>,
}

impl ProjectSettings {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            aws_region: None,
            aws_notification_email: None,
        }
    }
}

/// Variable context for rendering the built-in templates.
///
/// The application name is transformed once into each technology's
/// convention; templates reference the variants as `{{BASE_NAME_CAMEL}}`,
/// `{{BASE_NAME_CAPITALIZED}}`, and so on.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    variables: HashMap<String, String>,
}

impl ProjectContext {
    pub fn new(settings: &ProjectSettings) -> Self {
        let name = settings.base_name.as_str();
        let mut vars = HashMap::new();

        vars.insert("BASE_NAME".to_string(), name.to_string());
        vars.insert("BASE_NAME_CAMEL".to_string(), naming::camel_case(name));
        vars.insert(
            "BASE_NAME_CAPITALIZED".to_string(),
            naming::upper_first(name),
        );
        vars.insert("BASE_NAME_KEBAB".to_string(), naming::kebab_case(name));
        vars.insert("BASE_NAME_LOWER".to_string(), name.to_lowercase());
        vars.insert(
            "AWS_REGION".to_string(),
            settings.aws_region.clone().unwrap_or_default(),
        );
        vars.insert(
            "NOTIFICATION_EMAIL".to_string(),
            settings.aws_notification_email.clone().unwrap_or_default(),
        );

        Self { variables: vars }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
