use entity::sea_orm_active_enums::Role;

const NOT_AVAILABLE: &str = "N/A";

/// Skills text stored for freshly seeded applicants.
pub const APPLICANT_SKILLS_PLACEHOLDER: &str = NOT_AVAILABLE;

/// One roster entry. Profile fields are optional and fall back to the
/// defaults below when the account is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSpec {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub fullname: Option<&'static str>,
    pub email: Option<&'static str>,
    pub contact: Option<&'static str>,
    pub company: Option<&'static str>,
}

impl AccountSpec {
    pub fn fullname(&self) -> &'static str {
        self.fullname.unwrap_or(self.username)
    }

    pub fn email(&self) -> &'static str {
        self.email.unwrap_or("")
    }

    pub fn contact(&self) -> &'static str {
        self.contact.unwrap_or("")
    }

    pub fn company(&self) -> &'static str {
        self.company.unwrap_or(NOT_AVAILABLE)
    }
}
