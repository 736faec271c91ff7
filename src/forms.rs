//! Field-level validation shared by the create/update forms.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field name to messages, rendered next to each input.
#[derive(Debug, Default, Serialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required.");
        }
    }
}

pub const LICENSE_NUMBER_LENGTH: usize = 8;

/// Three uppercase letters followed by five digits, e.g. `ABC12345`.
pub fn validate_license_number(license_number: &str) -> Result<(), String> {
    if license_number.chars().count() != LICENSE_NUMBER_LENGTH {
        return Err(format!(
            "License number should consist of {} characters.",
            LICENSE_NUMBER_LENGTH
        ));
    }
    if !license_number.chars().take(3).all(|c| c.is_ascii_uppercase()) {
        return Err("First 3 characters should be uppercase letters.".to_string());
    }
    if !license_number.chars().skip(3).all(|c| c.is_ascii_digit()) {
        return Err("Last 5 characters should be digits.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_number_format() {
        assert!(validate_license_number("ABC12345").is_ok());
        assert!(validate_license_number("ABC1234").is_err());
        assert!(validate_license_number("abc12345").is_err());
        assert!(validate_license_number("AB123456").is_err());
        assert!(validate_license_number("ABC1234X").is_err());
        assert!(validate_license_number("ÄÄB12345").is_err());
    }

    #[test]
    fn errors_accumulate_per_field() {
        let mut errors = FormErrors::default();
        assert!(errors.is_empty());
        errors.require("name", "  ");
        errors.add("name", "Another problem.");
        errors.require("country", "Germany");
        assert_eq!(errors.get("name").map(<[String]>::len), Some(2));
        assert!(errors.get("country").is_none());
    }
}
