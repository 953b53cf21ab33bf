//! Column names shared by participant, previous-year and output files.

/// Participant (giver) name column.
pub const EMPLOYEE_NAME: &str = "Employee_Name";
/// Participant (giver) email column.
pub const EMPLOYEE_EMAIL: &str = "Employee_EmailID";
/// Receiver name column.
pub const SECRET_CHILD_NAME: &str = "Secret_Child_Name";
/// Receiver email column.
pub const SECRET_CHILD_EMAIL: &str = "Secret_Child_EmailID";

/// Columns every participant file must carry.
pub const EMPLOYEE_REQUIRED_FIELDS: &[&str] = &[EMPLOYEE_NAME, EMPLOYEE_EMAIL];

/// Columns every previous-year assignment file must carry.
pub const PREVIOUS_REQUIRED_FIELDS: &[&str] = &[
    EMPLOYEE_NAME,
    EMPLOYEE_EMAIL,
    SECRET_CHILD_NAME,
    SECRET_CHILD_EMAIL,
];

/// Output column order, identical to the previous-year layout.
pub const ASSIGNMENT_FIELDS: &[&str] = PREVIOUS_REQUIRED_FIELDS;

/// Whether a column holds email addresses.
pub fn is_email_field(field: &str) -> bool {
    field.to_lowercase().contains("email")
}
