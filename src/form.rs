//! Contact form data and validation.
//!
//! Validation is pure and recomputes every field on each pass, so the UI can
//! replace its error state wholesale instead of patching it.

/// The four text fields of the contact form. Held in component state only;
/// cleared after a successful submission, kept intact on failure so the
/// visitor can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation messages. `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    /// An empty set of errors means the form may be submitted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;

/// Validate all fields. Every rule runs; within a field the first failing
/// rule wins. `company` is always optional and never checked.
pub fn validate(form: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.name = Some("Name is required".to_string());
    } else if name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters long".to_string());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address".to_string());
    }

    let message = form.message.trim();
    let len = message.chars().count();
    if message.is_empty() {
        errors.message = Some("Message is required".to_string());
    } else if len < MESSAGE_MIN {
        errors.message = Some("Message must be at least 10 characters long".to_string());
    } else if len > MESSAGE_MAX {
        errors.message = Some("Message must be less than 1000 characters".to_string());
    }

    errors
}

/// Shape check only: no whitespace, exactly one `@` with something before
/// it, and a `.` inside the domain with at least one character on each side.
/// Deliberately not an RFC-grade parser.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormData {
        FormData {
            name: "Jo".to_string(),
            company: String::new(),
            email: "jo@x.com".to_string(),
            message: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&filled());
        assert!(errors.is_empty(), "expected no errors, got {errors:?}");
    }

    #[test]
    fn test_all_fields_invalid() {
        let form = FormData {
            name: String::new(),
            company: String::new(),
            email: "bad".to_string(),
            message: "short".to_string(),
        };
        let errors = validate(&form);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(
            errors.email.as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.message.as_deref(),
            Some("Message must be at least 10 characters long")
        );
    }

    #[test]
    fn test_name_rules() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(validate(&form).name.as_deref(), Some("Name is required"));

        form.name = "J".to_string();
        assert_eq!(
            validate(&form).name.as_deref(),
            Some("Name must be at least 2 characters long")
        );

        // surrounding whitespace doesn't count toward the minimum
        form.name = " J ".to_string();
        assert!(validate(&form).name.is_some());

        form.name = "Jo".to_string();
        assert!(validate(&form).name.is_none());
    }

    #[test]
    fn test_company_is_never_validated() {
        let mut form = filled();
        form.company = String::new();
        assert!(validate(&form).is_empty());
        form.company = "  ".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_email_rules() {
        let mut form = filled();
        for bad in [
            "plainaddress",
            "no-at-sign.com",
            "missing-dot@domain",
            "@no-local.com",
            "dot-at-end@domain.",
            "dot-at-start@.com",
            "two@@ats.com",
            "white space@domain.com",
        ] {
            form.email = bad.to_string();
            assert!(
                validate(&form).email.is_some(),
                "expected {bad:?} to be rejected"
            );
        }
        for good in ["a@b.co", "jo@x.com", "first.last@sub.domain.org"] {
            form.email = good.to_string();
            assert!(
                validate(&form).email.is_none(),
                "expected {good:?} to be accepted"
            );
        }
    }

    #[test]
    fn test_message_length_bounds() {
        let mut form = filled();

        form.message = "123456789".to_string(); // 9 chars
        assert!(validate(&form).message.is_some());

        form.message = "1234567890".to_string(); // 10 chars
        assert!(validate(&form).message.is_none());

        form.message = "x".repeat(1000);
        assert!(validate(&form).message.is_none());

        form.message = "x".repeat(1001);
        assert_eq!(
            validate(&form).message.as_deref(),
            Some("Message must be less than 1000 characters")
        );

        // trimmed length is what counts
        form.message = format!("  {}  ", "x".repeat(1000));
        assert!(validate(&form).message.is_none());
    }

    #[test]
    fn test_errors_recomputed_wholesale() {
        let mut form = filled();
        form.email = "bad".to_string();
        let first = validate(&form);
        assert!(first.email.is_some());

        form.email = "jo@x.com".to_string();
        let second = validate(&form);
        assert!(second.is_empty());
    }
}
