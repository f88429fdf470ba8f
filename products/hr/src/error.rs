use platform_api::ApiError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("department {0} not found")]
    DepartmentNotFound(i32),
    #[error("employee {0} not found")]
    EmployeeNotFound(i64),
    /// The store rejected a write on a foreign key.
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for HrError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => HrError::Constraint(msg),
            _ => HrError::Database(err),
        }
    }
}

impl From<HrError> for ApiError {
    fn from(err: HrError) -> Self {
        match err {
            HrError::DepartmentNotFound(_) | HrError::EmployeeNotFound(_) => {
                ApiError::not_found(err.to_string())
            }
            HrError::Constraint(_) => ApiError::conflict(err.to_string()),
            HrError::Database(db) => ApiError::internal(db),
        }
    }
}
