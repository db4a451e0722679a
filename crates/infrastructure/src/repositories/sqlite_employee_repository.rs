use crate::database::{employees, SqlitePool};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use domain::{DomainError, Employee, EmployeeRepository, QueryForm};

const SELECT_BY_BOTH_NAMES: &str = "SELECT id, first_name, last_name, email FROM employees \
     WHERE first_name = ? AND last_name = ? ORDER BY id LIMIT 1";

const SELECT_BY_BOTH_NAMES_NAMED: &str = "SELECT id, first_name, last_name, email FROM employees \
     WHERE first_name = :first_name AND last_name = :last_name ORDER BY id LIMIT 1";

// Database model - separate from domain entity
#[derive(Queryable, QueryableByName, Selectable, Insertable, Debug)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct EmployeeModel {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

#[derive(Insertable)]
#[diesel(table_name = employees)]
struct NewEmployeeModel {
    first_name: String,
    last_name: String,
    email: String,
}

impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee::with_id(model.id, model.first_name, model.last_name, model.email)
    }
}

impl From<&Employee> for NewEmployeeModel {
    fn from(employee: &Employee) -> Self {
        NewEmployeeModel {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
        }
    }
}

/// Insert or upsert a single row and read it back.
fn upsert(conn: &mut SqliteConnection, employee: &Employee) -> QueryResult<EmployeeModel> {
    let id = match employee.id {
        Some(id) => {
            let model = EmployeeModel {
                id,
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                email: employee.email.clone(),
            };
            diesel::replace_into(employees::table)
                .values(&model)
                .execute(conn)?;
            id
        }
        None => {
            diesel::insert_into(employees::table)
                .values(NewEmployeeModel::from(employee))
                .execute(conn)?;
            diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result::<i64>(conn)?
        }
    };

    employees::table
        .find(id)
        .select(EmployeeModel::as_select())
        .first::<EmployeeModel>(conn)
}

/// Builds the lookup from `(column, value)` pairs instead of fixed positions.
fn find_by_columns(
    conn: &mut SqliteConnection,
    criteria: Vec<(&'static str, String)>,
) -> QueryResult<Option<EmployeeModel>> {
    let mut query = employees::table
        .order(employees::id.asc())
        .select(EmployeeModel::as_select())
        .into_boxed();

    for (column, value) in criteria {
        query = match column {
            "first_name" => query.filter(employees::first_name.eq(value)),
            "last_name" => query.filter(employees::last_name.eq(value)),
            "email" => query.filter(employees::email.eq(value)),
            other => {
                return Err(diesel::result::Error::QueryBuilderError(
                    format!("unknown employee column: {}", other).into(),
                ))
            }
        };
    }

    query.first::<EmployeeModel>(conn).optional()
}

pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run blocking diesel work off the async executor on a pooled connection.
    async fn run<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        tokio::task::spawn_blocking(move || work(&mut *conn))
            .await
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?
            .map_err(|e| DomainError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let employee = employee.clone();

        let result = self
            .run(move |conn| conn.immediate_transaction(|conn| upsert(conn, &employee)))
            .await?;

        Ok(result.into())
    }

    async fn save_all(&self, employees: &[Employee]) -> Result<Vec<Employee>, DomainError> {
        let batch = employees.to_vec();

        let result = self
            .run(move |conn| {
                conn.immediate_transaction(|conn| {
                    batch
                        .iter()
                        .map(|employee| upsert(conn, employee))
                        .collect::<QueryResult<Vec<_>>>()
                })
            })
            .await?;

        Ok(result.into_iter().map(|model| model.into()).collect())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let result = self
            .run(|conn| {
                employees::table
                    .order(employees::id.asc())
                    .select(EmployeeModel::as_select())
                    .load::<EmployeeModel>(conn)
            })
            .await?;

        Ok(result.into_iter().map(|model| model.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        let result = self
            .run(move |conn| {
                employees::table
                    .find(id)
                    .select(EmployeeModel::as_select())
                    .first::<EmployeeModel>(conn)
                    .optional()
            })
            .await?;

        Ok(result.map(|model| model.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let email = email.to_string();

        let result = self
            .run(move |conn| {
                employees::table
                    .filter(employees::email.eq(email))
                    .select(EmployeeModel::as_select())
                    .first::<EmployeeModel>(conn)
                    .optional()
            })
            .await?;

        Ok(result.map(|model| model.into()))
    }

    async fn find_by_both_names_with(
        &self,
        first_name: &str,
        last_name: &str,
        form: QueryForm,
    ) -> Result<Option<Employee>, DomainError> {
        // Every form orders by id so the earliest match wins in all of them
        let first_name = first_name.to_string();
        let last_name = last_name.to_string();

        let result = self
            .run(move |conn| match form {
                QueryForm::Structured => employees::table
                    .filter(employees::first_name.eq(first_name))
                    .filter(employees::last_name.eq(last_name))
                    .order(employees::id.asc())
                    .select(EmployeeModel::as_select())
                    .first::<EmployeeModel>(conn)
                    .optional(),
                QueryForm::StructuredNamed => find_by_columns(
                    conn,
                    vec![("first_name", first_name), ("last_name", last_name)],
                ),
                QueryForm::Native => diesel::sql_query(SELECT_BY_BOTH_NAMES)
                    .bind::<Text, _>(first_name)
                    .bind::<Text, _>(last_name)
                    .get_result::<EmployeeModel>(conn)
                    .optional(),
                // SQLite numbers named parameters by first appearance
                QueryForm::NativeNamed => diesel::sql_query(SELECT_BY_BOTH_NAMES_NAMED)
                    .bind::<Text, _>(first_name)
                    .bind::<Text, _>(last_name)
                    .get_result::<EmployeeModel>(conn)
                    .optional(),
            })
            .await?;

        Ok(result.map(|model| model.into()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        self.run(move |conn| {
            diesel::delete(employees::table.filter(employees::id.eq(id))).execute(conn)
        })
        .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.run(|conn| diesel::delete(employees::table).execute(conn))
            .await?;

        Ok(())
    }
}
