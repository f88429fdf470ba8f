//! Demo fixtures for local runs.

use tracing::info;

use crate::{
    error::HrResult,
    http::HrState,
    model::{Department, Employee},
};

#[derive(Clone, Debug)]
pub struct SeededHr {
    pub department: Department,
    pub employee: Employee,
}

/// Inserts "IT Department" and John Doe unless departments already exist.
/// Returns `None` when the store was left untouched.
pub async fn seed_demo(state: &HrState) -> HrResult<Option<SeededHr>> {
    if !state.departments.list().await?.is_empty() {
        info!("departments present; skipping seed");
        return Ok(None);
    }

    let department = state
        .departments
        .create(Department {
            id: None,
            name: Some("IT Department".into()),
        })
        .await?;
    let employee = state
        .employees
        .create(Employee {
            id: None,
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            position: Some("Developer".into()),
            salary: Some("1000.00".into()),
            department: Some(department.clone()),
        })
        .await?;
    info!(department = ?department.id, employee = ?employee.id, "seeded demo data");

    Ok(Some(SeededHr {
        department,
        employee,
    }))
}
