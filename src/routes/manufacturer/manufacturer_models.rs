use serde::{Deserialize, Serialize};

use crate::forms::FormErrors;

// Create and update share one form
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ManufacturerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

impl ManufacturerForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.require("name", &self.name);
        errors.require("country", &self.country);
        errors
    }
}
