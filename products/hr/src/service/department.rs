use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    error::{HrError, HrResult},
    model::Department,
    repository::DepartmentRepository,
};

#[derive(Clone)]
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> HrResult<Vec<Department>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> HrResult<Option<Department>> {
        self.repo.find_by_id(id).await
    }

    /// Persists a new row. Any client-supplied id is ignored.
    pub async fn create(&self, department: Department) -> HrResult<Department> {
        let created = self
            .repo
            .save(Department {
                id: None,
                ..department
            })
            .await?;
        debug!(id = ?created.id, "department created");
        Ok(created)
    }

    /// Overwrites `name` on an existing row.
    pub async fn update(&self, id: i32, details: Department) -> HrResult<Department> {
        let Some(mut department) = self.repo.find_by_id(id).await? else {
            warn!(id, "update of missing department");
            return Err(HrError::DepartmentNotFound(id));
        };
        department.name = details.name;
        self.repo.save(department).await
    }

    pub async fn delete(&self, id: i32) -> HrResult<()> {
        self.repo.delete_by_id(id).await
    }
}
