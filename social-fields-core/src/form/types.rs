//! Form, field and submission shapes
//!
//! Field names follow the host engine's JSON (`cssClass`, `pageNumber`) so
//! form objects can be passed through as-is.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn first_page() -> u32 {
    1
}

/// A form field as far as validation is concerned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field ID, unique within the form
    pub id: u32,
    /// Label shown to the user
    #[serde(default)]
    pub label: String,
    /// Space-separated CSS classes, where `validate-<kind>` tags live
    #[serde(default, rename = "cssClass")]
    pub css_class: String,
    /// Page the field is on (multi-page forms), 1-based
    #[serde(default = "first_page", rename = "pageNumber")]
    pub page_number: u32,
    /// Set when the field failed validation
    #[serde(default)]
    pub failed_validation: bool,
    /// Message shown on failure; a non-empty value is kept as-is
    #[serde(default)]
    pub validation_message: String,
}

impl FormField {
    /// Creates an untagged field on page 1.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            label: String::new(),
            css_class: String::new(),
            page_number: 1,
            failed_validation: false,
            validation_message: String::new(),
        }
    }

    /// Sets the CSS class list.
    pub fn with_css_class(mut self, css_class: &str) -> Self {
        self.css_class = css_class.to_string();
        self
    }

    /// Moves the field to a page.
    pub fn on_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    /// Sets a custom validation message.
    pub fn with_validation_message(mut self, message: &str) -> Self {
        self.validation_message = message.to_string();
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }
}

/// A form definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Form ID
    pub id: u32,
    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl Form {
    /// Creates a form.
    pub fn new(id: u32, fields: Vec<FormField>) -> Self {
        Self { id, fields }
    }

    /// Gets a field by ID.
    pub fn field(&self, id: u32) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Validation state handed back and forth with the host engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// False once any field failed
    pub is_valid: bool,
    /// Form with per-field failure annotations
    pub form: Form,
}

impl ValidationResult {
    /// Starts a result for a form that has not failed yet.
    pub fn new(form: Form) -> Self {
        Self {
            is_valid: true,
            form,
        }
    }

    /// Fields that failed validation.
    pub fn failed_fields(&self) -> Vec<&FormField> {
        self.form
            .fields
            .iter()
            .filter(|f| f.failed_validation)
            .collect()
    }
}

/// Posted values of one submission, keyed the way the host posts them
/// (`input_<field_id>`, `gform_source_page_number_<form_id>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    values: HashMap<String, String>,
}

impl Submission {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a submission from raw posted pairs.
    pub fn from_posted(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Sets the value posted for a field.
    pub fn with_field(mut self, field_id: u32, value: &str) -> Self {
        self.values
            .insert(format!("input_{}", field_id), value.to_string());
        self
    }

    /// Sets the page the submission was posted from.
    pub fn with_source_page(mut self, form_id: u32, page: u32) -> Self {
        self.values.insert(
            format!("gform_source_page_number_{}", form_id),
            page.to_string(),
        );
        self
    }

    /// Value posted for a field; missing values read as blank.
    pub fn field_value(&self, field_id: u32) -> &str {
        self.values
            .get(&format!("input_{}", field_id))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Page being validated. Defaults to 1 when absent, unparseable or 0.
    pub fn source_page(&self, form_id: u32) -> u32 {
        self.values
            .get(&format!("gform_source_page_number_{}", form_id))
            .and_then(|page| page.trim().parse().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1)
    }
}
