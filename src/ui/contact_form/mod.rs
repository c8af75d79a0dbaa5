// SPDX-License-Identifier: MPL-2.0
//! Contact form validation.
//!
//! Submission never reaches a server: the form validates its fields, shows an
//! annotation beneath each invalid one, and when everything passes reports a
//! success so the page can show a notification and empty the form.
//!
//! Any of the four fields may be missing from the markup; missing fields are
//! neither validated nor rendered.

pub mod validation;

use crate::render::{Node, Surface};
use std::collections::BTreeMap;

/// Border color applied to invalid inputs.
pub const ERROR_COLOR: &str = "#FF8DA1";

/// A contact form input, identified by its `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// The input's `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => "Please enter your name",
            Field::Email => "Please enter a valid email address",
            Field::Phone => "Please enter your phone number",
            Field::Message => "Please enter your message",
        }
    }
}

/// Values read from the form at submission time.
///
/// Only fields present in the markup appear in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<Field, String>,
}

impl FormSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}

/// State of one input between submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Every present field passed; the form has been emptied.
    Accepted,
    /// `errors` fields failed and are annotated.
    Rejected { errors: usize },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: BTreeMap<Field, FieldState>,
}

impl ContactForm {
    /// Creates a form containing the given fields.
    pub fn new(present: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: present
                .into_iter()
                .map(|field| (field, FieldState::default()))
                .collect(),
        }
    }

    #[must_use]
    pub fn has_field(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    #[must_use]
    pub fn field(&self, field: Field) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    /// Validates a submission, rendering or clearing each field's annotation.
    ///
    /// On success every value is cleared and the surface form is reset.
    pub fn submit(&mut self, snapshot: &FormSnapshot, surface: &mut impl Surface) -> Submission {
        let mut errors = 0;
        for (&field, state) in &mut self.fields {
            state.value = snapshot.value(field).unwrap_or_default().to_string();
            state.error = validation::validate(field, &state.value);

            surface.set_field_error(field, state.error);
            surface.set_style(
                Node::Field(field),
                "border-color",
                if state.error.is_some() { ERROR_COLOR } else { "" },
            );
            if state.error.is_some() {
                errors += 1;
            }
        }

        if errors > 0 {
            tracing::debug!(errors, "contact form rejected");
            return Submission::Rejected { errors };
        }

        for state in self.fields.values_mut() {
            state.value.clear();
        }
        surface.reset_form();
        tracing::debug!("contact form accepted");
        Submission::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn full_form() -> ContactForm {
        ContactForm::new(Field::ALL)
    }

    #[test]
    fn blank_name_and_message_yield_two_errors() {
        let mut surface = RecordingSurface::new();
        let mut form = full_form();
        let snapshot = FormSnapshot::new()
            .with(Field::Name, "")
            .with(Field::Email, "x@y.com")
            .with(Field::Phone, "555")
            .with(Field::Message, "");

        let outcome = form.submit(&snapshot, &mut surface);

        assert_eq!(outcome, Submission::Rejected { errors: 2 });
        assert_eq!(surface.field_error(Field::Name), Some("Please enter your name"));
        assert_eq!(surface.field_error(Field::Message), Some("Please enter your message"));
        assert_eq!(surface.field_error(Field::Email), None);
        assert_eq!(surface.style(Node::Field(Field::Name), "border-color"), Some(ERROR_COLOR));
        assert_eq!(surface.style(Node::Field(Field::Phone), "border-color"), None);
        assert_eq!(surface.form_resets(), 0);
        assert_eq!(form.field(Field::Phone).map(|s| s.value.as_str()), Some("555"));
    }

    #[test]
    fn corrected_submission_clears_errors_and_resets() {
        let mut surface = RecordingSurface::new();
        let mut form = full_form();
        form.submit(&FormSnapshot::new().with(Field::Email, "nope"), &mut surface);
        assert_eq!(surface.field_error_count(), 4);

        let snapshot = FormSnapshot::new()
            .with(Field::Name, "Ana")
            .with(Field::Email, "ana@example.com")
            .with(Field::Phone, "555 0100")
            .with(Field::Message, "Quote for weekly cleaning");
        let outcome = form.submit(&snapshot, &mut surface);

        assert_eq!(outcome, Submission::Accepted);
        assert_eq!(surface.field_error_count(), 0);
        assert_eq!(surface.style(Node::Field(Field::Email), "border-color"), None);
        assert_eq!(surface.form_resets(), 1);
        assert!(Field::ALL
            .iter()
            .all(|&f| form.field(f).is_some_and(|s| s.value.is_empty() && s.error.is_none())));
    }

    #[test]
    fn absent_fields_are_not_validated() {
        let mut surface = RecordingSurface::new();
        let mut form = ContactForm::new([Field::Email]);

        let outcome = form.submit(&FormSnapshot::new().with(Field::Email, "a@b.co"), &mut surface);

        assert_eq!(outcome, Submission::Accepted);
        assert!(!form.has_field(Field::Name));
        assert_eq!(surface.field_error(Field::Name), None);
    }

    #[test]
    fn field_names_match_markup() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["name", "email", "phone", "message"]);
    }
}
