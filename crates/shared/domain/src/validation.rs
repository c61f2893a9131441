//! Payload validation shared by every aggregate type.
//!
//! Field rules are declared with `validator` derives on the payload structs;
//! cross-field rules (required dates, date ordering, the login pair) live in
//! [`Draft::check_rules`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::account::{Credentials, LoginCredentials};
use crate::error::{DomainError, DomainResult};

/// Loose international phone number: digits, spaces, dashes, parentheses, optional leading `+`.
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-]{6,20}$").expect("phone pattern is valid"));

/// Postcodes: 3 to 10 letters, digits, spaces or dashes.
pub static POSTCODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{2,9}$").expect("postcode pattern is valid"));

/// A create payload for an aggregate.
pub trait Draft: Validate {
    /// Login credentials requested for the aggregate's account, if any.
    fn login(&self) -> Option<&LoginCredentials>;

    /// Rules the field derives cannot express.
    fn check_rules(&self) -> DomainResult<()> {
        Ok(())
    }

    /// Validate the whole payload and extract the credentials to provision.
    ///
    /// Runs without touching storage, so a failure here writes nothing.
    fn check(&self) -> DomainResult<Option<Credentials>> {
        ensure_valid(self)?;
        self.check_rules()?;
        match self.login() {
            Some(login) => login.credentials(),
            None => Ok(None),
        }
    }
}

/// Run derived field validation and fold every failure into one message.
pub fn ensure_valid<T: Validate + ?Sized>(value: &T) -> DomainResult<()> {
    value
        .validate()
        .map_err(|e| DomainError::validation(format_validation_errors(&e)))
}

/// Validate each record of a child group, prefixing failures with the group name.
pub fn ensure_valid_group<T: Validate>(group: &str, records: &[T]) -> DomainResult<()> {
    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|e| {
            DomainError::validation(format!(
                "{}[{}]: {}",
                group,
                index,
                format_validation_errors(&e)
            ))
        })?;
    }
    Ok(())
}

/// Require an optional field to be present.
pub fn required<T: Copy>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::validation(format!("{} is required", field)))
}

/// Reject a range whose end precedes its start.
pub fn ensure_date_order(
    start: NaiveDate,
    end: Option<NaiveDate>,
    start_field: &str,
    end_field: &str,
) -> DomainResult<()> {
    match end {
        Some(end) if end < start => Err(DomainError::validation(format!(
            "{} must not be before {}",
            end_field, start_field
        ))),
        _ => Ok(()),
    }
}

/// Format validation errors into a single deterministic message.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Contact {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(email(message = "email must be a valid email address"))]
        email: Option<String>,
    }

    #[test]
    fn test_ensure_valid_collects_messages() {
        let contact = Contact {
            name: String::new(),
            email: Some("nope".to_string()),
        };

        let err = ensure_valid(&contact).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("email must be a valid email address, name is required")
        );
    }

    #[test]
    fn test_group_errors_name_the_record() {
        let records = vec![
            Contact {
                name: "ok".to_string(),
                email: None,
            },
            Contact {
                name: String::new(),
                email: None,
            },
        ];

        let err = ensure_valid_group("branches", &records).unwrap_err();
        assert_eq!(err, DomainError::validation("branches[1]: name is required"));
    }

    #[test]
    fn test_date_order() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        assert!(ensure_date_order(start, None, "start_date", "end_date").is_ok());
        assert!(ensure_date_order(start, Some(start), "start_date", "end_date").is_ok());
        assert!(ensure_date_order(start, Some(before), "start_date", "end_date").is_err());
    }

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE_PATTERN.is_match("+61 2 9876 5432"));
        assert!(PHONE_PATTERN.is_match("(02) 9876-5432"));
        assert!(!PHONE_PATTERN.is_match("call me"));
    }

    #[test]
    fn test_required() {
        assert_eq!(required(Some(3), "n").unwrap(), 3);
        assert_eq!(
            required::<i32>(None, "joining_date").unwrap_err(),
            DomainError::validation("joining_date is required")
        );
    }
}
