use crate::entities::Employee;
use crate::errors::DomainError;
use crate::repositories::EmployeeRepository;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Employee Service - business rules layered over the repository
pub struct EmployeeService {
    employee_repository: Arc<dyn EmployeeRepository>,
    // Held across the email check and the insert so creates through this
    // instance cannot interleave. Other processes sharing the database are
    // not covered; they can still insert the same email concurrently.
    create_lock: Mutex<()>,
}

impl EmployeeService {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employee_repository,
            create_lock: Mutex::new(()),
        }
    }

    /// Create an employee, rejecting an email that is already taken.
    /// Nothing is written when the email conflicts. Any id on the input is
    /// ignored; the store always assigns a fresh one.
    pub async fn save_employee(&self, mut employee: Employee) -> Result<Employee, DomainError> {
        employee.id = None;

        let _guard = self.create_lock.lock().await;

        if self
            .employee_repository
            .find_by_email(&employee.email)
            .await?
            .is_some()
        {
            warn!(email = %employee.email, "employee email already taken");
            return Err(DomainError::EmailAlreadyExists(employee.email));
        }

        let saved = self.employee_repository.save(&employee).await?;
        debug!(id = ?saved.id, "employee created");
        Ok(saved)
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, DomainError> {
        self.employee_repository.find_all().await
    }

    /// `Ok(None)` is the not-found result; callers decide how to surface it.
    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        self.employee_repository.find_by_id(id).await
    }

    /// Persist changes to an existing employee. Email uniqueness is only
    /// enforced on create, not here.
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, DomainError> {
        let employee_id = employee.id.ok_or_else(|| {
            DomainError::ValidationError("Employee ID is required for updates".to_string())
        })?;

        let updated = self.employee_repository.save(&employee).await?;
        debug!(id = employee_id, "employee updated");
        Ok(updated)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), DomainError> {
        self.employee_repository.delete_by_id(id).await?;
        debug!(id, "employee deleted");
        Ok(())
    }
}
