pub mod sqlite_employee_repository;

pub use sqlite_employee_repository::SqliteEmployeeRepository;
