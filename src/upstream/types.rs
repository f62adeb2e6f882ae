//! Upstream wire types and their translation into façade types.
//!
//! Every upstream response is wrapped in `{ "data": ..., "status": "..." }`.
//! Unknown fields are ignored and missing fields default, so a partially
//! populated record still deserializes; the service decides what is usable.

use serde::{Deserialize, Serialize};

use crate::employee::model::{CreateEmployeeInput, Employee};

/// Envelope around every upstream response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Employee record as the upstream serializes it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamEmployee {
    pub id: Option<String>,
    pub employee_name: Option<String>,
    pub employee_salary: Option<i64>,
    pub employee_age: Option<i32>,
    pub employee_title: Option<String>,
    pub employee_email: Option<String>,
}

impl From<UpstreamEmployee> for Employee {
    fn from(e: UpstreamEmployee) -> Self {
        Employee {
            id: e.id.unwrap_or_default(),
            name: e.employee_name.unwrap_or_default(),
            salary: e.employee_salary.unwrap_or_default(),
            age: e.employee_age.unwrap_or_default(),
            title: e.employee_title.unwrap_or_default(),
            email: e.employee_email,
        }
    }
}

/// Body of `POST /employee`.
#[derive(Debug, Serialize)]
pub struct CreateEmployeeBody<'a> {
    pub name: &'a str,
    pub salary: i64,
    pub age: i32,
    pub title: &'a str,
}

impl<'a> From<&'a CreateEmployeeInput> for CreateEmployeeBody<'a> {
    fn from(input: &'a CreateEmployeeInput) -> Self {
        Self {
            name: &input.name,
            salary: input.salary,
            age: input.age,
            title: &input.title,
        }
    }
}

/// Body of the name-bearing `DELETE /employee` fallback.
#[derive(Debug, Serialize)]
pub struct DeleteByNameBody<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_data_deserializes_to_none() {
        let resp: ApiResponse<UpstreamEmployee> =
            serde_json::from_str(r#"{"data": null, "status": "ok"}"#).unwrap();
        assert!(resp.data.is_none());

        let resp: ApiResponse<Vec<UpstreamEmployee>> = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_translation_renames_fields() {
        let resp: ApiResponse<UpstreamEmployee> = serde_json::from_str(
            r#"{"data": {
                "id": "5255f1a5-f9f7-4be5-829a-134bde088d17",
                "employee_name": "Bill Bob",
                "employee_salary": 89750,
                "employee_age": 24,
                "employee_title": "Documentation Engineer",
                "employee_email": "billBob@company.com",
                "extra": true
            }, "status": "Successfully processed request."}"#,
        )
        .unwrap();

        let employee: Employee = resp.data.unwrap().into();
        assert_eq!(employee.id, "5255f1a5-f9f7-4be5-829a-134bde088d17");
        assert_eq!(employee.name, "Bill Bob");
        assert_eq!(employee.salary, 89_750);
        assert_eq!(employee.email.as_deref(), Some("billBob@company.com"));
    }

    #[test]
    fn test_missing_name_becomes_empty() {
        let upstream: UpstreamEmployee = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        let employee = Employee::from(upstream);
        assert!(employee.name.is_empty());
    }

    #[test]
    fn test_null_numbers_default_to_zero() {
        let resp: ApiResponse<Vec<UpstreamEmployee>> = serde_json::from_str(
            r#"{"data": [
                {"id": "x", "employee_name": "Nul", "employee_salary": null, "employee_age": null},
                {"id": "y", "employee_name": "Set", "employee_salary": 5, "employee_age": 40}
            ]}"#,
        )
        .unwrap();

        let employees: Vec<Employee> = resp.data.unwrap().into_iter().map(Employee::from).collect();
        assert_eq!(employees[0].salary, 0);
        assert_eq!(employees[0].age, 0);
        assert_eq!(employees[1].salary, 5);
        assert_eq!(employees[1].age, 40);
    }
}
