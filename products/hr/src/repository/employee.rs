use async_trait::async_trait;
use entity::{department, employee};
use platform_db::DbPool;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{Set, Unchanged}, ColumnTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::debug;

use super::EmployeeRepository;
use crate::{
    error::{HrError, HrResult},
    model::{Employee, EmployeeProjection},
};

#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    db: DbPool,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> HrResult<Vec<Employee>> {
        let rows = employee::Entity::find()
            .find_also_related(department::Entity)
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(row, department)| Employee::from_row(row, department))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> HrResult<Option<Employee>> {
        let row = employee::Entity::find_by_id(id)
            .find_also_related(department::Entity)
            .one(&self.db)
            .await?;
        Ok(row.map(|(row, department)| Employee::from_row(row, department)))
    }

    async fn save(&self, employee: Employee) -> HrResult<Employee> {
        let department_id = employee.department_id();
        let mut active = employee::ActiveModel {
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            position: Set(employee.position),
            salary: Set(employee.salary),
            department_id: Set(department_id),
            ..Default::default()
        };
        let id = match employee.id {
            Some(id) => {
                active.id = Unchanged(id);
                active
                    .update(&self.db)
                    .await
                    .map_err(|err| match err {
                        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                            HrError::EmployeeNotFound(id)
                        }
                        other => other.into(),
                    })?
                    .id
            }
            None => active.insert(&self.db).await?.id,
        };
        // Reload so the department name comes back with the row.
        self.find_by_id(id)
            .await?
            .ok_or(HrError::EmployeeNotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> HrResult<()> {
        let result = employee::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows = result.rows_affected, "employee delete");
        Ok(())
    }

    async fn find_by_last_name(&self, last_name: &str) -> HrResult<Vec<EmployeeProjection>> {
        let rows = employee::Entity::find()
            .select_only()
            .column(employee::Column::FirstName)
            .column(employee::Column::LastName)
            .column(employee::Column::Position)
            .column_as(department::Column::Name, "department_name")
            .left_join(department::Entity)
            .filter(employee::Column::LastName.eq(last_name))
            .order_by_asc(employee::Column::Id)
            .into_model::<EmployeeProjection>()
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
