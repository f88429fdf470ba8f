use async_trait::async_trait;
use entity::department;
use platform_db::DbPool;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{Set, Unchanged}, DbErr, EntityTrait, QueryOrder,
};
use tracing::debug;

use super::DepartmentRepository;
use crate::{
    error::{HrError, HrResult},
    model::Department,
};

#[derive(Clone)]
pub struct SeaOrmDepartmentRepository {
    db: DbPool,
}

impl SeaOrmDepartmentRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn find_all(&self) -> HrResult<Vec<Department>> {
        let rows = department::Entity::find()
            .order_by_asc(department::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> HrResult<Option<Department>> {
        let row = department::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Department::from))
    }

    async fn save(&self, department: Department) -> HrResult<Department> {
        let mut active = department::ActiveModel {
            name: Set(department.name),
            ..Default::default()
        };
        let model = match department.id {
            Some(id) => {
                active.id = Unchanged(id);
                active.update(&self.db).await.map_err(|err| match err {
                    DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                        HrError::DepartmentNotFound(id)
                    }
                    other => other.into(),
                })?
            }
            None => active.insert(&self.db).await?,
        };
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> HrResult<()> {
        let result = department::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows = result.rows_affected, "department delete");
        Ok(())
    }
}
