//! Employee operations on top of the upstream client.
//!
//! Every call reads fresh from upstream; nothing is cached between requests.
//!
//! # Delete by id
//! ```text
//! START --get_by_id(id)--> ID_RESOLVED --delete_by_name(name)--> DONE
//!   | not found / blank name             | false
//!   v                                    v
//! NOT_FOUND                            NOT_FOUND
//! ```
//! The two upstream calls are not transactional. A record removed by someone
//! else between them shows up as `false` from the second call, which is
//! reported as absence rather than retried.

use std::sync::Arc;
use validator::Validate;

use crate::employee::model::{CreateEmployeeInput, Employee};
use crate::employee::query::{self, TOP_EARNER_LIMIT};
use crate::error::{EmployeeError, Result};
use crate::upstream::EmployeeClient;

/// Stateless service; cheap to share behind an `Arc`.
#[derive(Clone)]
pub struct EmployeeService {
    client: Arc<dyn EmployeeClient>,
}

impl EmployeeService {
    pub fn new(client: Arc<dyn EmployeeClient>) -> Self {
        Self { client }
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        let employees = self.client.list_all().await?;
        tracing::info!(count = employees.len(), "Fetched all employees");
        if let Some(first) = employees.first() {
            tracing::debug!(id = %first.id, name = %first.name, "First employee");
        }
        Ok(employees)
    }

    pub async fn search_by_name(&self, fragment: Option<&str>) -> Result<Vec<Employee>> {
        tracing::debug!(fragment = ?fragment, "Searching employees by name");
        let all = self.get_all_employees().await?;
        Ok(query::filter_by_name(all, fragment))
    }

    pub async fn get_employee_by_id(&self, id: &str) -> Result<Employee> {
        tracing::debug!(id = %id, "Fetching employee by id");
        self.client.get_by_id(id).await.map_err(|e| match e {
            EmployeeError::NotFound(_) => not_found(id),
            other => other.into_upstream(),
        })
    }

    pub async fn highest_salary(&self) -> Result<i64> {
        let all = self.get_all_employees().await?;
        let max = query::highest_salary(&all);
        tracing::info!(highest_salary = max, "Computed highest salary");
        Ok(max)
    }

    pub async fn top_ten_highest_earning_names(&self) -> Result<Vec<String>> {
        let all = self.get_all_employees().await?;
        Ok(query::top_earner_names(&all, TOP_EARNER_LIMIT))
    }

    /// Validate `input` and create it upstream. Invalid input never reaches the client.
    pub async fn create_employee(&self, input: CreateEmployeeInput) -> Result<Employee> {
        input.validate()?;
        tracing::debug!(name = %input.name, "Creating employee");
        self.client.create(&input).await.map_err(EmployeeError::into_upstream)
    }

    /// Delete the employee with `id` and return the name that was deleted.
    pub async fn delete_employee_by_id(&self, id: &str) -> Result<String> {
        tracing::info!(id = %id, "Deleting employee by id");

        let employee = self.get_employee_by_id(id).await?;
        let name = employee.name;
        if name.trim().is_empty() {
            tracing::warn!(id = %id, "Employee resolved without a name");
            return Err(not_found(id));
        }

        let deleted = self
            .client
            .delete_by_name(&name)
            .await
            .map_err(|e| match e {
                // a 404-shaped error from the delete call is still absence
                EmployeeError::NotFound(_) => {
                    EmployeeError::NotFound(format!("Employee not found when deleting by name: {name}"))
                }
                other => other.into_upstream(),
            })?;
        if !deleted {
            tracing::info!(id = %id, name = %name, "Upstream had nothing to delete");
            return Err(EmployeeError::NotFound(format!(
                "Employee not found when deleting by name: {name}"
            )));
        }

        tracing::info!(id = %id, name = %name, "Deleted employee");
        Ok(name)
    }
}

fn not_found(id: &str) -> EmployeeError {
    EmployeeError::NotFound(format!("Employee not found: {id}"))
}
