//! Schema-driven validation of user payloads.
//!
//! The rules mirror the host form's schema and run as a single pass over a
//! [`UserInput`], producing one [`FieldError`] per violated rule. Field paths
//! are dotted JSON paths (`name.firstName`), so the host can attach each error
//! to its input inline. Enum-valued fields (gender, blood group) never reach
//! these rules: an out-of-range value already fails deserialization.
//!
//! Validation is a form-boundary concern. The store trusts its callers and
//! never re-runs these checks.

use serde::{Deserialize, Serialize};

use crate::user_model::UserInput;

const MSG_TOO_SHORT: &str = "Too short";
const MSG_TOO_LONG: &str = "Too long";
const MSG_IMPOSSIBLE: &str = "Humanly impossible";
const MSG_BAD_EMAIL: &str = "Not a valid email";
const MSG_BAD_PHONE: &str = "Invalid phone";
const MSG_REQUIRED: &str = "This is Required";

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 20;

/// A single field-level validation failure.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Checks every field rule and returns the violations. Empty means valid.
///
/// # Examples
///
/// ```rust
/// use user_directory_core::user_model::{PersonName, UserInput};
/// use user_directory_core::validation::validate_user;
///
/// let input = UserInput {
///     name: PersonName {
///         first_name: "Jane".to_string(),
///         middle_name: None,
///         last_name: "Doe".to_string(),
///     },
///     gender: None,
///     blood_group: None,
///     height: None,
///     weight: None,
///     email: "jane@example.com".to_string(),
///     phone: "9876543210".to_string(),
///     profession: "Engineer".to_string(),
///     country: "India".to_string(),
///     state: "Kerala".to_string(),
///     district: "Ernakulam".to_string(),
///     city: "Kochi".to_string(),
///     address: "12 Marine Drive".to_string(),
/// };
///
/// assert!(validate_user(&input).is_empty());
/// ```
pub fn validate_user(input: &UserInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name_part(&mut errors, "name.firstName", &input.name.first_name);
    if let Some(middle) = &input.name.middle_name {
        check_name_part(&mut errors, "name.middleName", middle);
    }
    check_name_part(&mut errors, "name.lastName", &input.name.last_name);

    if let Some(height) = input.height {
        if !(height > 25.0 && height <= 300.0) {
            errors.push(FieldError::new("height", MSG_IMPOSSIBLE));
        }
    }
    if let Some(weight) = input.weight {
        if !(weight > 0.0 && weight <= 300.0) {
            errors.push(FieldError::new("weight", MSG_IMPOSSIBLE));
        }
    }

    if !is_valid_email(&input.email) {
        errors.push(FieldError::new("email", MSG_BAD_EMAIL));
    }
    if input.phone.chars().count() != 10 {
        errors.push(FieldError::new("phone", MSG_BAD_PHONE));
    }
    if input.profession.is_empty() {
        errors.push(FieldError::new("profession", MSG_TOO_SHORT));
    }

    for (field, value) in [
        ("country", &input.country),
        ("state", &input.state),
        ("district", &input.district),
        ("city", &input.city),
    ] {
        if value.is_empty() {
            errors.push(FieldError::new(field, MSG_REQUIRED));
        }
    }

    if input.address.chars().count() < 5 {
        errors.push(FieldError::new("address", MSG_TOO_SHORT));
    }

    errors
}

fn check_name_part(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    let len = value.chars().count();
    if len < NAME_MIN {
        errors.push(FieldError::new(field, MSG_TOO_SHORT));
    } else if len > NAME_MAX {
        errors.push(FieldError::new(field, MSG_TOO_LONG));
    }
}

/// Structural email check: non-empty local part and a dotted domain, no
/// whitespace. Format-exactness beyond this stays with the host form.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
