use staffdir_core::{Employee, EmployeeValidationError, Position};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(employee: &Employee) -> u64 {
    let mut hasher = DefaultHasher::new();
    employee.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn new_keeps_supplied_values() {
    let employee = Employee::new(
        "Jan Kowalski",
        "jan.kowalski@corp.com",
        "TechCorp",
        Position::Programmer,
        9000.0,
    )
    .unwrap();

    assert_eq!(employee.full_name(), "Jan Kowalski");
    assert_eq!(employee.email(), "jan.kowalski@corp.com");
    assert_eq!(employee.company_name(), "TechCorp");
    assert_eq!(employee.position(), Position::Programmer);
    assert_eq!(employee.salary(), 9000.0);
}

#[test]
fn new_preserves_email_casing() {
    let employee =
        Employee::new("Jan", "Jan.K@Corp.COM", "TechCorp", Position::Intern, 1000.0).unwrap();
    assert_eq!(employee.email(), "Jan.K@Corp.COM");
}

#[test]
fn new_rejects_negative_salary() {
    let err = Employee::new("Jan", "a@a", "TechCorp", Position::Intern, -1.0).unwrap_err();
    assert_eq!(err, EmployeeValidationError::InvalidSalary(-1.0));
}

#[test]
fn new_rejects_non_finite_salary() {
    let err = Employee::new("Jan", "a@a", "TechCorp", Position::Intern, f64::NAN).unwrap_err();
    assert!(matches!(err, EmployeeValidationError::InvalidSalary(_)));
}

#[test]
fn new_rejects_blank_required_fields() {
    let blank_name = Employee::new("   ", "a@a", "TechCorp", Position::Intern, 1000.0).unwrap_err();
    assert_eq!(blank_name, EmployeeValidationError::MissingField("full_name"));

    let blank_email = Employee::new("Jan", "", "TechCorp", Position::Intern, 1000.0).unwrap_err();
    assert_eq!(blank_email, EmployeeValidationError::MissingField("email"));

    let blank_company = Employee::new("Jan", "a@a", " ", Position::Intern, 1000.0).unwrap_err();
    assert_eq!(
        blank_company,
        EmployeeValidationError::MissingField("company_name")
    );
}

#[test]
fn set_salary_validates_and_keeps_previous_value_on_failure() {
    let mut employee = Employee::new("Jan", "b@b", "TechCorp", Position::Intern, 1000.0).unwrap();

    let err = employee.set_salary(-5.0).unwrap_err();
    assert_eq!(err, EmployeeValidationError::InvalidSalary(-5.0));
    assert_eq!(employee.salary(), 1000.0);
}

#[test]
fn set_salary_updates_value() {
    let mut employee =
        Employee::new("Jan", "set@corp.com", "TechCorp", Position::Intern, 1000.0).unwrap();
    employee.set_salary(1500.0).unwrap();
    assert_eq!(employee.salary(), 1500.0);
}

#[test]
fn set_full_name_rejects_blank_and_keeps_previous_value() {
    let mut employee =
        Employee::new("Jan", "fn@corp.com", "TechCorp", Position::Intern, 1000.0).unwrap();

    let err = employee.set_full_name("  ").unwrap_err();
    assert_eq!(err, EmployeeValidationError::MissingField("full_name"));
    assert_eq!(employee.full_name(), "Jan");

    employee.set_full_name("Jan Nowak").unwrap();
    assert_eq!(employee.full_name(), "Jan Nowak");
}

#[test]
fn set_company_name_rejects_blank() {
    let mut employee =
        Employee::new("Jan", "cn@corp.com", "TechCorp", Position::Intern, 1000.0).unwrap();

    let err = employee.set_company_name("").unwrap_err();
    assert_eq!(err, EmployeeValidationError::MissingField("company_name"));
    assert_eq!(employee.company_name(), "TechCorp");
}

#[test]
fn set_position_updates_value() {
    let mut employee =
        Employee::new("Jan", "pos@corp.com", "TechCorp", Position::Intern, 1000.0).unwrap();
    employee.set_position(Position::Manager);
    assert_eq!(employee.position(), Position::Manager);
}

#[test]
fn last_name_is_final_token() {
    let employee = Employee::new(
        "Anna Maria Nowak",
        "c@c",
        "TechCorp",
        Position::Manager,
        12_000.0,
    )
    .unwrap();
    assert_eq!(employee.last_name(), "Nowak");
}

#[test]
fn last_name_of_single_token_is_whole_name() {
    let employee =
        Employee::new("Madonna", "m@c", "TechCorp", Position::Manager, 12_000.0).unwrap();
    assert_eq!(employee.last_name(), "Madonna");
}

#[test]
fn last_name_ignores_runs_of_whitespace() {
    let employee = Employee::new(
        "Jan   Adam    Nowak",
        "spaces@c",
        "TechCorp",
        Position::Manager,
        12_000.0,
    )
    .unwrap();
    assert_eq!(employee.last_name(), "Nowak");
}

#[test]
fn equality_and_hash_use_email_case_insensitively() {
    let first = Employee::new("Jan", "X@EX.com", "TechCorp", Position::Intern, 1000.0).unwrap();
    let second = Employee::new("Inny", "x@ex.com", "OtherCorp", Position::Manager, 2000.0).unwrap();

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn different_emails_are_not_equal() {
    let first = Employee::new("Jan", "a@ex.com", "TechCorp", Position::Intern, 1000.0).unwrap();
    let second = Employee::new("Jan", "b@ex.com", "TechCorp", Position::Intern, 1000.0).unwrap();
    assert_ne!(first, second);
}

#[test]
fn display_contains_key_fields() {
    let employee = Employee::new(
        "Jan Kowalski",
        "jan@corp.com",
        "TechCorp",
        Position::Programmer,
        8000.0,
    )
    .unwrap();

    let rendered = employee.to_string();
    assert!(rendered.contains("Jan Kowalski"));
    assert!(rendered.contains("jan@corp.com"));
    assert!(rendered.contains("programmer"));
    assert!(rendered.contains("salary=8000"));
}

#[test]
fn serialization_round_trips() {
    let employee = Employee::new(
        "Jan Kowalski",
        "jan@corp.com",
        "TechCorp",
        Position::Programmer,
        8000.0,
    )
    .unwrap();

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["full_name"], "Jan Kowalski");
    assert_eq!(json["email"], "jan@corp.com");
    assert_eq!(json["company_name"], "TechCorp");
    assert_eq!(json["position"], "programmer");
    assert_eq!(json["salary"], 8000.0);

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.full_name(), employee.full_name());
    assert_eq!(decoded.salary(), employee.salary());
}

#[test]
fn deserialization_re_validates() {
    let negative = serde_json::json!({
        "full_name": "Jan",
        "email": "jan@corp.com",
        "company_name": "TechCorp",
        "position": "intern",
        "salary": -10.0,
    });
    assert!(serde_json::from_value::<Employee>(negative).is_err());

    let blank_name = serde_json::json!({
        "full_name": "   ",
        "email": "jan@corp.com",
        "company_name": "TechCorp",
        "position": "intern",
        "salary": 10.0,
    });
    assert!(serde_json::from_value::<Employee>(blank_name).is_err());
}
