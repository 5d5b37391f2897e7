pub mod applicants;
pub mod employers;
pub mod jobs;
pub mod resumes;
pub mod sea_orm_active_enums;
pub mod users;
