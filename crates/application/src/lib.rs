use domain::*;
use infrastructure::*;
use std::sync::Arc;

/// Employee Application - wires storage to the business rules
pub struct EmployeeApp {
    pub employee_service: EmployeeService,
}

impl EmployeeApp {
    pub fn new(database_path: &str) -> Result<Self, DomainError> {
        // Infrastructure layer - database setup
        let database = Database::new(database_path)?;
        Ok(Self::with_database(&database))
    }

    /// Application over a throwaway in-memory database.
    pub fn in_memory() -> Result<Self, DomainError> {
        let database = Database::in_memory()?;
        Ok(Self::with_database(&database))
    }

    fn with_database(database: &Database) -> Self {
        let pool = database.get_pool().clone();

        // Create repository implementation
        let employee_repository: Arc<dyn EmployeeRepository> =
            Arc::new(SqliteEmployeeRepository::new(pool));

        // Domain service
        let employee_service = EmployeeService::new(employee_repository);

        Self { employee_service }
    }
}
