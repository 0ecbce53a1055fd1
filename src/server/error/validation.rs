//! Field-level validation errors.
//!
//! Validation collects every problem with a request before returning, so a client sees
//! all failing fields at once. Nested payloads such as the tickets of an order are
//! reported under indexed paths like `tickets[2].seat`.

use std::{collections::BTreeMap, fmt};

use crate::{model::api::ErrorDto, server::error::AppError};

/// Message for integer fields that must be positive.
pub const MIN_ONE_MESSAGE: &str = "Ensure this value is greater than or equal to 1.";

/// Key for errors that concern a whole object rather than one of its fields.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Map from field path to the messages raised for that field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error set holding a single message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Moves every error of `other` into `self` with field paths prefixed by `prefix`.
    pub fn merge_nested(&mut self, prefix: &str, other: ValidationErrors) {
        for (field, messages) in other.fields {
            self.fields
                .entry(format!("{}.{}", prefix, field))
                .or_default()
                .extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    /// Returns `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }

    pub fn into_dto(self) -> ErrorDto {
        ErrorDto {
            error: "Validation failed".to_string(),
            fields: Some(self.fields),
        }
    }

    /// Checks that a name is non-empty and at most 255 characters.
    pub fn check_name(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field may not be blank.");
        } else if value.chars().count() > 255 {
            self.add(field, "Ensure this field has no more than 255 characters.");
        }
    }

    /// Checks that an integer is at least 1.
    pub fn check_positive(&mut self, field: &str, value: i32) {
        if value < 1 {
            self.add(field, MIN_ONE_MESSAGE);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nests_ticket_errors_under_indexed_path() {
        let mut ticket = ValidationErrors::new();
        ticket.add("row", "Row 31 exceeds airplane's max rows (30)");
        ticket.add(NON_FIELD_ERRORS, "Duplicate ticket for this flight (row, seat)");

        let mut order = ValidationErrors::new();
        order.merge_nested("tickets[1]", ticket);

        assert_eq!(
            order.fields().get("tickets[1].row"),
            Some(&vec!["Row 31 exceeds airplane's max rows (30)".to_string()])
        );
        assert!(order.fields().contains_key("tickets[1].non_field_errors"));
    }

    #[test]
    fn empty_errors_are_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn rejects_blank_and_long_names() {
        let mut errors = ValidationErrors::new();
        errors.check_name("name", "  ");
        errors.check_name("other", &"x".repeat(256));
        errors.check_name("fine", "Kyiv");

        assert_eq!(errors.fields().len(), 2);
        assert!(!errors.fields().contains_key("fine"));
    }
}
