//! REST surface of the slice, mounted under `/api`.

mod departments;
mod employees;

use std::sync::Arc;

use axum::Router;
use platform_db::DbPool;

use crate::{
    repository::{SeaOrmDepartmentRepository, SeaOrmEmployeeRepository},
    service::{DepartmentService, EmployeeService},
};

#[derive(Clone)]
pub struct HrState {
    pub departments: DepartmentService,
    pub employees: EmployeeService,
}

impl HrState {
    /// Wires the store-backed repositories over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self {
            departments: DepartmentService::new(Arc::new(SeaOrmDepartmentRepository::new(
                pool.clone(),
            ))),
            employees: EmployeeService::new(Arc::new(SeaOrmEmployeeRepository::new(pool))),
        }
    }
}

pub fn router(state: HrState) -> Router {
    Router::new()
        .merge(departments::routes())
        .merge(employees::routes())
        .with_state(state)
}
