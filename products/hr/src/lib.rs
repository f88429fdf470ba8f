//! HR vertical slice.
//!
//! Layers, leaves first: [`repository`] talks to the store through SeaORM,
//! [`service`] owns the update semantics and not-found signaling, and
//! [`http`] exposes both entities as JSON routes under `/api`.

pub mod error;
pub mod http;
pub mod model;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{HrError, HrResult};
pub use http::{HrState, router};
pub use model::{Department, Employee, EmployeeProjection};
