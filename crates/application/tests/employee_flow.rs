use application::EmployeeApp;
use domain::{DomainError, Employee};

fn employee(first_name: &str, last_name: &str, email: &str) -> Employee {
    Employee::new(
        first_name.to_string(),
        last_name.to_string(),
        email.to_string(),
    )
}

#[tokio::test]
async fn create_then_reject_duplicate_email() {
    let app = EmployeeApp::in_memory().unwrap();
    let service = &app.employee_service;

    let created = service
        .save_employee(employee("dennis", "githinji", "wakahiad@gmail.com"))
        .await
        .unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.first_name, "dennis");
    assert_eq!(created.last_name, "githinji");
    assert_eq!(created.email, "wakahiad@gmail.com");

    let duplicate = service
        .save_employee(employee("jane", "doe", "wakahiad@gmail.com"))
        .await;
    assert_eq!(
        duplicate,
        Err(DomainError::EmailAlreadyExists(
            "wakahiad@gmail.com".to_string()
        ))
    );
    assert_eq!(service.get_all_employees().await.unwrap().len(), 1);
}

#[tokio::test]
async fn saved_employee_reads_back_equal() {
    let app = EmployeeApp::in_memory().unwrap();
    let service = &app.employee_service;
    let input = employee("jane", "doe", "jane@gmail.com");

    let saved = service.save_employee(input.clone()).await.unwrap();
    let fetched = service
        .get_employee_by_id(saved.id.unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        Employee {
            id: None,
            ..fetched
        },
        input
    );
}

#[tokio::test]
async fn unknown_id_is_absent() {
    let app = EmployeeApp::in_memory().unwrap();

    let fetched = app.employee_service.get_employee_by_id(999).await;

    assert_eq!(fetched, Ok(None));
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let app = EmployeeApp::in_memory().unwrap();
    let service = &app.employee_service;
    let saved = service
        .save_employee(employee("dennis", "githinji", "wakahiad@gmail.com"))
        .await
        .unwrap();

    let mut existing = service
        .get_employee_by_id(saved.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    existing.apply(&employee("denno", "gg", "denno@gmail.com"));
    let updated = service.update_employee(existing).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.first_name, "denno");
    assert_eq!(service.get_all_employees().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = EmployeeApp::in_memory().unwrap();
    let service = &app.employee_service;
    let saved = service
        .save_employee(employee("dennis", "githinji", "wakahiad@gmail.com"))
        .await
        .unwrap();
    let id = saved.id.unwrap();

    service.delete_employee(id).await.unwrap();
    service.delete_employee(id).await.unwrap();

    assert!(service.get_all_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn email_is_free_again_after_delete() {
    let app = EmployeeApp::in_memory().unwrap();
    let service = &app.employee_service;
    let saved = service
        .save_employee(employee("dennis", "githinji", "wakahiad@gmail.com"))
        .await
        .unwrap();

    service.delete_employee(saved.id.unwrap()).await.unwrap();
    let again = service
        .save_employee(employee("jane", "doe", "wakahiad@gmail.com"))
        .await;

    assert!(again.is_ok());
}
