use serde::{Deserialize, Serialize};

use crate::forms::FormErrors;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarForm {
    #[serde(default)]
    pub model: String,
    pub manufacturer_id: Option<i64>,
}

impl CarForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.require("model", &self.model);
        if self.manufacturer_id.is_none() {
            errors.add("manufacturer_id", "This field is required.");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manufacturer_is_required() {
        let form = CarForm { model: "A4".to_string(), manufacturer_id: None };
        let errors = form.validate();
        assert!(errors.get("model").is_none());
        assert_eq!(errors.get("manufacturer_id").map(<[String]>::len), Some(1));
    }
}
