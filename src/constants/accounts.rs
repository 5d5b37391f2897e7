use entity::sea_orm_active_enums::Role;

use crate::types::account::AccountSpec;

/// Demo logins created by `create_test_accounts`. The plaintext passwords are
/// printed back to the operator, so this roster must never reach production.
pub const TEST_ACCOUNTS: &[AccountSpec] = &[
    AccountSpec {
        username: "admin",
        password: "admin123",
        role: Role::Admin,
        fullname: None,
        email: None,
        contact: None,
        company: None,
    },
    AccountSpec {
        username: "applicant1",
        password: "applicant123",
        role: Role::Applicant,
        fullname: Some("John Doe"),
        email: Some("john.doe@email.com"),
        contact: Some("123-456-7890"),
        company: None,
    },
    AccountSpec {
        username: "applicant2",
        password: "applicant123",
        role: Role::Applicant,
        fullname: Some("Jane Smith"),
        email: Some("jane.smith@email.com"),
        contact: Some("987-654-3210"),
        company: None,
    },
    AccountSpec {
        username: "employer1",
        password: "employer123",
        role: Role::Employer,
        fullname: Some("Bob Johnson"),
        email: Some("bob.johnson@company.com"),
        contact: Some("555-1234"),
        company: Some("Tech Corp"),
    },
    AccountSpec {
        username: "employer2",
        password: "employer123",
        role: Role::Employer,
        fullname: Some("Alice Williams"),
        email: Some("alice.williams@business.com"),
        contact: Some("555-5678"),
        company: Some("Business Solutions"),
    },
];
