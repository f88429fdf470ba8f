//! SeaORM entities for the HR tables.

pub mod department;
pub mod employee;

