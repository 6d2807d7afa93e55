//! Declarative input validation shared by every request DTO.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] runs the rules and
//! folds any failures into a single [`CoreError::Validation`] whose message
//! lists the offending fields in sorted order, so all endpoints report
//! validation problems the same way.

use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Usernames are ASCII letters and digits only.
pub static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid regex"));

/// Matches any string containing at least one non-whitespace character.
pub static NOT_BLANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S").expect("valid regex"));

/// Usernames that collide with static segments under `/users`.
pub const RESERVED_USERNAMES: &[&str] = &["search"];

/// Reject usernames that could never be addressed as `/users/{username}`.
pub fn username_not_reserved(username: &str) -> Result<(), ValidationError> {
    if RESERVED_USERNAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(username))
    {
        return Err(ValidationError::new("reserved"));
    }
    Ok(())
}

/// Canonical form used to store and compare email addresses.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Render validation failures as `"invalid fields: a (length), b (email)"`.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{field} ({})", codes.join(", "))
        })
        .collect();
    fields.sort();
    format!("invalid fields: {}", fields.join(", "))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(
            regex(path = *USERNAME_RE),
            length(min = 3, max = 25),
            custom(function = "username_not_reserved")
        )]
        username: String,
        #[validate(regex(path = *NOT_BLANK_RE))]
        title: String,
        #[validate(email)]
        email: String,
    }

    fn sample() -> Sample {
        Sample {
            username: "alice".to_string(),
            title: "Write docs".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&sample()).is_ok());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let input = Sample {
            title: "   ".to_string(),
            ..sample()
        };
        let err = validate_input(&input).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("title"));
    }

    #[test]
    fn test_username_must_be_alphanumeric() {
        let input = Sample {
            username: "al ice!".to_string(),
            ..sample()
        };
        assert_matches!(validate_input(&input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_fields_are_listed_in_sorted_order() {
        let input = Sample {
            username: "x".to_string(),
            title: String::new(),
            email: "not-an-email".to_string(),
        };
        let err = input.validate().unwrap_err();
        let msg = describe_errors(&err);
        let email = msg.find("email").unwrap();
        let title = msg.find("title").unwrap();
        let username = msg.find("username").unwrap();
        assert!(email < title && title < username, "got: {msg}");
    }

    #[test]
    fn test_reserved_usernames_are_rejected() {
        for name in ["search", "Search"] {
            let input = Sample {
                username: name.to_string(),
                ..sample()
            };
            assert_matches!(
                validate_input(&input),
                Err(CoreError::Validation(msg)) if msg.contains("username (reserved)")
            );
        }
    }

    #[test]
    fn test_normalize_email_lowercases() {
        assert_eq!(normalize_email("Alice@Example.COM"), "alice@example.com");
    }
}
