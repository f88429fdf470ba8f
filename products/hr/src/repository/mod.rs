//! Per-entity data access. The traits are the seam the services depend on;
//! the `SeaOrm*` types are the store-backed implementations.

mod department;
mod employee;

use async_trait::async_trait;

use crate::{
    error::HrResult,
    model::{Department, Employee, EmployeeProjection},
};

pub use department::SeaOrmDepartmentRepository;
pub use employee::SeaOrmEmployeeRepository;

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// All rows in id order.
    async fn find_all(&self) -> HrResult<Vec<Department>>;

    async fn find_by_id(&self, id: i32) -> HrResult<Option<Department>>;

    /// Inserts when `id` is `None`, otherwise overwrites the row with that id.
    async fn save(&self, department: Department) -> HrResult<Department>;

    /// Succeeds whether or not the row existed.
    async fn delete_by_id(&self, id: i32) -> HrResult<()>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> HrResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> HrResult<Option<Employee>>;

    /// Inserts when `id` is `None`, otherwise overwrites the row with that id.
    /// Only the id of the embedded department is written.
    async fn save(&self, employee: Employee) -> HrResult<Employee>;

    async fn delete_by_id(&self, id: i64) -> HrResult<()>;

    /// Case-sensitive exact match on `last_name`, joined to the department
    /// name.
    async fn find_by_last_name(&self, last_name: &str) -> HrResult<Vec<EmployeeProjection>>;
}
