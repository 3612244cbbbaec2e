//! Contact form validation
//!
//! Required-field and email checks plus Ghana phone normalization, the
//! only validation the site performs on visitor input.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Ghana phone after normalization: +233 followed by 9 digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+233\d{9}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Normalize a phone number to international Ghana format.
///
/// Everything but digits and `+` is stripped, then: a bare `233` prefix
/// gains `+`, a leading `0` becomes `+233`, and anything else without a
/// `+` is prefixed with `+233`.
pub fn normalize_phone(raw: &str) -> String {
    let mut phone: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if phone.starts_with("233") {
        phone = format!("+{}", phone);
    } else if let Some(rest) = phone.strip_prefix('0') {
        phone = format!("+233{}", rest);
    } else if !phone.starts_with('+') {
        phone = format!("+233{}", phone);
    }

    phone
}

pub fn is_valid_ghana_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&phone.replace(' ', ""))
}

/// Visitor contact form (inquiry, viewing request, callback).
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldProblem::Required => write!(f, "is required"),
            FieldProblem::InvalidEmail => write!(f, "is not a valid email address"),
            FieldProblem::InvalidPhone => write!(f, "is not a valid Ghana phone number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

/// Validate a contact form. Returns one error per offending field; an
/// empty list means the form can be submitted. The message field is
/// optional.
pub fn validate_contact(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            problem: FieldProblem::Required,
        });
    }

    if form.email.trim().is_empty() {
        errors.push(FieldError {
            field: "email",
            problem: FieldProblem::Required,
        });
    } else if !is_valid_email(form.email.trim()) {
        errors.push(FieldError {
            field: "email",
            problem: FieldProblem::InvalidEmail,
        });
    }

    if form.phone.trim().is_empty() {
        errors.push(FieldError {
            field: "phone",
            problem: FieldProblem::Required,
        });
    } else if !is_valid_ghana_phone(&normalize_phone(&form.phone)) {
        errors.push(FieldError {
            field: "phone",
            problem: FieldProblem::InvalidPhone,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_normalization_rules() {
        assert_eq!(normalize_phone("0244 123 456"), "+233244123456");
        assert_eq!(normalize_phone("233244123456"), "+233244123456");
        assert_eq!(normalize_phone("+233244123456"), "+233244123456");
        assert_eq!(normalize_phone("244123456"), "+233244123456");
        assert_eq!(normalize_phone("(024) 412-3456"), "+233244123456");
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("ama@example.com"));
        assert!(!is_valid_email("ama@example"));
        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn contact_form_collects_field_errors() {
        let form = ContactForm {
            name: "".to_string(),
            email: "bad".to_string(),
            phone: "12".to_string(),
            message: "".to_string(),
        };
        let errors = validate_contact(&form);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].problem, FieldProblem::Required);
        assert_eq!(errors[1].problem, FieldProblem::InvalidEmail);
        assert_eq!(errors[2].problem, FieldProblem::InvalidPhone);
    }

    #[test]
    fn complete_form_passes() {
        let form = ContactForm {
            name: "Kwame Mensah".to_string(),
            email: "kwame@example.com".to_string(),
            phone: "0244123456".to_string(),
            message: "Interested in a viewing".to_string(),
        };
        assert!(validate_contact(&form).is_empty());
    }
}
