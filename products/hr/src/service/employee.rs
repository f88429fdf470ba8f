use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    error::{HrError, HrResult},
    model::{Employee, EmployeeProjection},
    repository::EmployeeRepository,
};

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> HrResult<Vec<Employee>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> HrResult<Option<Employee>> {
        self.repo.find_by_id(id).await
    }

    /// Persists a new row. The department, if given, must already exist.
    pub async fn create(&self, employee: Employee) -> HrResult<Employee> {
        let created = self.repo.save(Employee { id: None, ..employee }).await?;
        debug!(id = ?created.id, "employee created");
        Ok(created)
    }

    /// Full replace: every mutable field takes the value from `details`,
    /// including fields left empty there.
    pub async fn update(&self, id: i64, details: Employee) -> HrResult<Employee> {
        let Some(mut employee) = self.repo.find_by_id(id).await? else {
            warn!(id, "update of missing employee");
            return Err(HrError::EmployeeNotFound(id));
        };
        employee.first_name = details.first_name;
        employee.last_name = details.last_name;
        employee.position = details.position;
        employee.salary = details.salary;
        employee.department = details.department;
        self.repo.save(employee).await
    }

    pub async fn delete(&self, id: i64) -> HrResult<()> {
        self.repo.delete_by_id(id).await
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> HrResult<Vec<EmployeeProjection>> {
        self.repo.find_by_last_name(last_name).await
    }
}
