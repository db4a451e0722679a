use serde::{Deserialize, Serialize};

/// Core Employee entity - the only record the service manages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>, // None until the store assigns one
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
        }
    }

    pub fn with_id(id: i64, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            email,
        }
    }

    /// Replace every mutable field with the values from `changes`. The id is kept.
    pub fn apply(&mut self, changes: &Employee) {
        self.first_name = changes.first_name.clone();
        self.last_name = changes.last_name.clone();
        self.email = changes.email.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_id() {
        let mut employee = Employee::with_id(
            7,
            "dennis".to_string(),
            "githinji".to_string(),
            "wakahiad@gmail.com".to_string(),
        );
        let changes = Employee::with_id(
            99,
            "denno".to_string(),
            "gg".to_string(),
            "denno@gmail.com".to_string(),
        );

        employee.apply(&changes);

        assert_eq!(employee.id, Some(7));
        assert_eq!(employee.first_name, "denno");
        assert_eq!(employee.last_name, "gg");
        assert_eq!(employee.email, "denno@gmail.com");
    }

    #[test]
    fn json_uses_camel_case_and_optional_id() {
        let employee: Employee = serde_json::from_str(
            r#"{"firstName":"dennis","lastName":"githinji","email":"wakahiad@gmail.com"}"#,
        )
        .unwrap();
        assert_eq!(employee.id, None);
        assert_eq!(employee.first_name, "dennis");

        let value = serde_json::to_value(Employee::with_id(
            1,
            "jane".to_string(),
            "doe".to_string(),
            "jane@gmail.com".to_string(),
        ))
        .unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["lastName"], "doe");
    }
}
