//! Payload field rules shared by the recipe and ingredient endpoints.
//!
//! Text fields are trimmed before they are checked and stored. Problems are
//! reported per field (`"<field path>: <problem>"`) and collected so a single
//! response lists everything wrong with a payload.

use std::fmt::Display;

use crate::error::CoreError;

/// Maximum length of a recipe or ingredient name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Trim a name and check it is non-blank and within [`MAX_NAME_LENGTH`].
pub fn clean_name(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("must not be blank".to_string());
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(format!(
            "must be at most {MAX_NAME_LENGTH} characters (got {len})"
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim a description and check it is non-blank.
pub fn clean_description(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("must not be blank".to_string());
    }
    Ok(trimmed.to_string())
}

/// Accumulates field-level validation problems.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem for `field`.
    pub fn push(&mut self, field: impl Display, problem: impl Display) {
        self.errors.push(format!("{field}: {problem}"));
    }

    /// Run `rule` on `value`, returning the cleaned value or recording the
    /// failure under `field`.
    pub fn check<T>(
        &mut self,
        field: impl Display,
        value: &str,
        rule: fn(&str) -> Result<T, String>,
    ) -> Option<T> {
        match rule(value) {
            Ok(cleaned) => Some(cleaned),
            Err(problem) => {
                self.push(field, problem);
                None
            }
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise a single
    /// [`CoreError::Validation`] listing every problem.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(clean_name("  Basil ").unwrap(), "Basil");
    }

    #[test]
    fn blank_name_rejected() {
        assert_eq!(clean_name("").unwrap_err(), "must not be blank");
        assert_eq!(clean_name("   \t").unwrap_err(), "must not be blank");
    }

    #[test]
    fn name_at_limit_accepted() {
        let name = "a".repeat(MAX_NAME_LENGTH);
        assert_eq!(clean_name(&name).unwrap().len(), MAX_NAME_LENGTH);
    }

    #[test]
    fn name_over_limit_rejected() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        let err = clean_name(&name).unwrap_err();
        assert!(err.contains("at most 255"), "unexpected message: {err}");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(clean_name(&name).is_ok());
    }

    #[test]
    fn blank_description_rejected() {
        assert!(clean_description(" ").is_err());
        assert_eq!(clean_description(" A tasty curry ").unwrap(), "A tasty curry");
    }

    #[test]
    fn field_errors_collects_all_problems() {
        let mut errors = FieldErrors::new();
        assert!(errors.check("name", " ", clean_name).is_none());
        assert_eq!(errors.check("description", "ok", clean_description).as_deref(), Some("ok"));
        assert!(errors.check("ingredients[1].name", "", clean_name).is_none());

        assert_matches!(
            errors.finish(),
            Err(CoreError::Validation(msg))
                if msg == "name: must not be blank; ingredients[1].name: must not be blank"
        );
    }

    #[test]
    fn empty_field_errors_finish_ok() {
        assert!(FieldErrors::new().finish().is_ok());
    }
}
