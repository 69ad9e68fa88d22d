//! Form Validator
//!
//! Runs profile checks over a submission and annotates the fields that
//! fail. A field is checked when:
//! 1. Its CSS classes carry a registered `validate-<kind>` tag
//! 2. It sits on the page being validated
//! 3. Conditional logic does not hide it

use tracing::debug;

use super::types::{Form, FormField, Submission, ValidationResult};
use crate::social::CheckerRegistry;

/// Conditional-logic query answered by the host engine.
///
/// Closures `Fn(&Form, &FormField) -> bool` implement this too.
pub trait ConditionalLogic {
    /// Returns true if the field is hidden for this submission.
    fn is_field_hidden(&self, form: &Form, field: &FormField) -> bool;
}

impl<F> ConditionalLogic for F
where
    F: Fn(&Form, &FormField) -> bool,
{
    fn is_field_hidden(&self, form: &Form, field: &FormField) -> bool {
        self(form, field)
    }
}

/// For forms without conditional logic: nothing is hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConditionalLogic;

impl ConditionalLogic for NoConditionalLogic {
    fn is_field_hidden(&self, _form: &Form, _field: &FormField) -> bool {
        false
    }
}

/// Validates tagged fields against the checker registry
pub struct FormValidator {
    registry: CheckerRegistry,
}

impl FormValidator {
    /// Creates a validator over a registry.
    pub fn new(registry: CheckerRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry.
    pub fn registry(&self) -> &CheckerRegistry {
        &self.registry
    }

    /// Returns the registry for registering more kinds.
    pub fn registry_mut(&mut self) -> &mut CheckerRegistry {
        &mut self.registry
    }

    /// Validation kind of a field, if it is tagged with a registered one.
    pub fn validation_kind(&self, field: &FormField) -> Option<&str> {
        self.registry.kind_for_classes(&field.css_class)
    }

    /// Validates the fields on `current_page`.
    ///
    /// Failed fields get `failed_validation` and a message (their own if
    /// set, else the kind's default, else a generic one) and the result
    /// is marked invalid. Passing fields are left untouched.
    pub fn validate(
        &self,
        mut result: ValidationResult,
        submission: &Submission,
        current_page: u32,
        logic: &dyn ConditionalLogic,
    ) -> ValidationResult {
        let targets: Vec<(usize, &str)> = result
            .form
            .fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| {
                let kind = self.validation_kind(field)?;
                if field.page_number != current_page {
                    return None;
                }
                if logic.is_field_hidden(&result.form, field) {
                    return None;
                }
                Some((index, kind))
            })
            .collect();

        for (index, kind) in targets {
            let field = &mut result.form.fields[index];
            let value = submission.field_value(field.id);

            if self.registry.check(kind, value) {
                continue;
            }

            debug!(form_id = result.form.id, field_id = field.id, kind, "field failed profile check");

            result.is_valid = false;
            field.failed_validation = true;
            if field.validation_message.is_empty() {
                field.validation_message = self.registry.invalid_message(kind).to_string();
            }
        }

        result
    }

    /// Validates using the page the submission was posted from.
    pub fn validate_submission(
        &self,
        result: ValidationResult,
        submission: &Submission,
        logic: &dyn ConditionalLogic,
    ) -> ValidationResult {
        let current_page = submission.source_page(result.form.id);
        self.validate(result, submission, current_page, logic)
    }
}
