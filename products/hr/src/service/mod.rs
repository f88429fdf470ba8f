//! Domain services. Each wraps one repository and owns the
//! fetch-overwrite-persist update flow.
//!
//! Updates are two separate store round-trips with no lock or version
//! check, so concurrent updates of the same id can overwrite each other.

mod department;
mod employee;

pub use department::DepartmentService;
pub use employee::EmployeeService;
