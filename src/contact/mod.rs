// SPDX-License-Identifier: MPL-2.0
//! Contact form state and validation.
//!
//! The form lives entirely client-side: validation runs on submit, errors are
//! surfaced per field as Fluent keys, and a successful submission is a local
//! echo that resets the fields and shows an inline acknowledgment. The
//! validate-then-commit split keeps a failed submission from clearing
//! anything the user typed.

pub mod email;

/// Minimum accepted name length (after trimming).
pub const MIN_NAME_LEN: usize = 2;
/// Minimum accepted message length (after trimming).
pub const MIN_MESSAGE_LEN: usize = 10;

pub const NAME_TOO_SHORT_KEY: &str = "contact-error-name-short";
pub const EMAIL_INVALID_KEY: &str = "contact-error-email-invalid";
pub const MESSAGE_TOO_SHORT_KEY: &str = "contact-error-message-short";

/// Form fields addressable by validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// A recoverable, per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    /// Fluent key for the user-facing message.
    pub key: &'static str,
}

/// A record that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

/// Editable state of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    errors: Vec<FieldError>,
    /// Set after a successful submission, cleared on the next edit.
    acknowledged: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an edit to one field, clearing its stale error and any
    /// previous acknowledgment.
    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.clear_error(Field::Name);
        self.acknowledged = false;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.clear_error(Field::Email);
        self.acknowledged = false;
    }

    pub fn set_company(&mut self, value: String) {
        self.company = value;
        self.acknowledged = false;
    }

    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
        self.acknowledged = false;
    }

    pub fn set_message(&mut self, value: String) {
        self.message = value;
        self.clear_error(Field::Message);
        self.acknowledged = false;
    }

    /// Validates every field, without mutating the buffers.
    ///
    /// All rules run even after the first failure so the user sees every
    /// problem at once.
    pub fn validate(&self) -> Result<Submission, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < MIN_NAME_LEN {
            errors.push(FieldError {
                field: Field::Name,
                key: NAME_TOO_SHORT_KEY,
            });
        }
        if !email::is_valid(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                key: EMAIL_INVALID_KEY,
            });
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError {
                field: Field::Message,
                key: MESSAGE_TOO_SHORT_KEY,
            });
        }

        if errors.is_empty() {
            let optional = |s: &str| {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            };
            Ok(Submission {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                company: optional(&self.company),
                phone: optional(&self.phone),
                message: self.message.trim().to_string(),
            })
        } else {
            Err(errors)
        }
    }

    /// Attempts submission: on success resets the fields to empty defaults
    /// and shows the acknowledgment, on failure records the per-field errors
    /// and leaves every buffer untouched.
    pub fn submit(&mut self) -> Option<Submission> {
        match self.validate() {
            Ok(submission) => {
                *self = Self {
                    acknowledged: true,
                    ..Self::default()
                };
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The error key recorded for `field`, if any.
    pub fn error_key(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.key)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the success acknowledgment should be shown.
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    fn clear_error(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Ada Lovelace".into());
        form.set_email("ada@example.com".into());
        form.set_company("Analytical Engines Ltd".into());
        form.set_phone("+44 20 7946 0000".into());
        form.set_message("Interested in smart menus for our venues.".into());
        form
    }

    #[test]
    fn valid_form_submits_and_resets() {
        let mut form = filled_form();
        let submission = form.submit().expect("submission should succeed");

        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.company.as_deref(), Some("Analytical Engines Ltd"));
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());
        assert!(form.acknowledged());
        assert!(!form.has_errors());
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut form = filled_form();
        form.set_company(String::new());
        form.set_phone("   ".into());

        let submission = form.submit().expect("optional fields are optional");
        assert_eq!(submission.company, None);
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn short_message_fails_only_that_field() {
        // Name and email pass, message is below the 10-char minimum.
        let mut form = ContactForm::new();
        form.set_name("Al".into());
        form.set_email("a@b.com".into());
        form.set_message("short".into());

        assert!(form.submit().is_none());
        assert_eq!(form.error_key(Field::Message), Some(MESSAGE_TOO_SHORT_KEY));
        assert_eq!(form.error_key(Field::Name), None);
        assert_eq!(form.error_key(Field::Email), None);
        // Failed submission must not clear what the user typed.
        assert_eq!(form.message, "short");
        assert!(!form.acknowledged());
    }

    #[test]
    fn all_errors_are_reported_at_once() {
        let mut form = ContactForm::new();
        form.set_name("A".into());
        form.set_email("not-an-email".into());
        form.set_message("hi".into());

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn whitespace_does_not_count_toward_minimums() {
        let mut form = filled_form();
        form.set_name("  A  ".into());
        assert!(form.submit().is_none());
        assert_eq!(form.error_key(Field::Name), Some(NAME_TOO_SHORT_KEY));

        form.set_message("         a".into());
        assert_eq!(
            form.validate().unwrap_err().iter().filter(|e| e.field == Field::Message).count(),
            1
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::new();
        form.set_name("A".into());
        form.set_email("a@b.com".into());
        form.set_message("long enough message".into());
        assert!(form.submit().is_none());
        assert!(form.error_key(Field::Name).is_some());

        form.set_name("Ada".into());
        assert_eq!(form.error_key(Field::Name), None);
        assert!(form.submit().is_some());
    }

    #[test]
    fn editing_clears_acknowledgment() {
        let mut form = filled_form();
        assert!(form.submit().is_some());
        assert!(form.acknowledged());

        form.set_name("B".into());
        assert!(!form.acknowledged());
    }
}
