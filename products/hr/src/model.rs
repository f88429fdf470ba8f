//! Wire and domain shapes shared by every layer of the slice.

use entity::{department, employee};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// A department row. `id` is `None` until the store assigns one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Department {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl From<department::Model> for Department {
    fn from(model: department::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
        }
    }
}

/// An employee row with its department resolved.
///
/// On input only `department.id` is read; the name is filled in from the
/// store when the row is returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
    pub department: Option<Department>,
}

impl Employee {
    pub(crate) fn from_row(model: employee::Model, department: Option<department::Model>) -> Self {
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            position: model.position,
            salary: model.salary,
            department: department.map(Department::from),
        }
    }

    pub(crate) fn department_id(&self) -> Option<i32> {
        self.department.as_ref().and_then(|department| department.id)
    }
}

/// Read-only view produced by the last-name lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProjection {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department_name: Option<String>,
}
