//! Employee types exposed by the façade.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// An employee record as served to façade callers.
///
/// Field names are owned by the façade and do not follow the upstream
/// payload; see `upstream::types` for the translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque, upstream-assigned identifier.
    pub id: String,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i64,
    #[serde(rename = "employee_age")]
    pub age: i32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload accepted by `POST /employees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeInput {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(range(min = 1))]
    pub salary: i64,
    #[validate(range(min = 16, max = 75))]
    pub age: i32,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
