use serde::{Deserialize, Serialize};

use crate::forms::{validate_license_number, FormErrors};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DriverCreateForm {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub license_number: String,
}

impl DriverCreateForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.require("username", &self.username);
        errors.require("password", &self.password);
        if let Err(message) = validate_license_number(self.license_number.trim()) {
            errors.add("license_number", message);
        }
        errors
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LicenseForm {
    #[serde(default)]
    pub license_number: String,
}

impl LicenseForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if let Err(message) = validate_license_number(self.license_number.trim()) {
            errors.add("license_number", message);
        }
        errors
    }
}
