use crate::entities::Employee;
use crate::errors::DomainError;
use async_trait::async_trait;

/// Ways of expressing the first-name/last-name lookup. Every form must
/// produce the same result for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryForm {
    /// Query builder, parameters bound in position order
    Structured,
    /// Query builder assembled from `(column, value)` criteria
    StructuredNamed,
    /// Raw SQL with `?` placeholders
    Native,
    /// Raw SQL with `:name` placeholders
    NativeNamed,
}

impl QueryForm {
    pub const ALL: [QueryForm; 4] = [
        QueryForm::Structured,
        QueryForm::StructuredNamed,
        QueryForm::Native,
        QueryForm::NativeNamed,
    ];
}

/// Repository trait - defines what we need from persistence layer
/// This is a PORT in hexagonal architecture
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `id` is unset, otherwise upsert the row with that id.
    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError>;
    async fn save_all(&self, employees: &[Employee]) -> Result<Vec<Employee>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;
    async fn find_by_both_names_with(
        &self,
        first_name: &str,
        last_name: &str,
        form: QueryForm,
    ) -> Result<Option<Employee>, DomainError>;
    /// Removing an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
    async fn delete_all(&self) -> Result<(), DomainError>;

    async fn find_by_both_names(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DomainError> {
        self.find_by_both_names_with(first_name, last_name, QueryForm::Structured)
            .await
    }

    /// Records that were never persisted have nothing to remove.
    async fn delete(&self, employee: &Employee) -> Result<(), DomainError> {
        match employee.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(()),
        }
    }
}
