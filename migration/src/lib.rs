pub use sea_orm_migration::prelude::*;

mod m20240101_000000_create_users_table;
mod m20240101_000001_create_applicants_table;
mod m20240101_000002_create_employers_table;
mod m20240101_000003_create_jobs_table;
mod m20240101_000004_create_resumes_table;

/// Baseline job-board schema. The `resume.job_id` column is deliberately absent:
/// it is added afterwards by the `add_job_id_to_resume` tool.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000000_create_users_table::Migration),
            Box::new(m20240101_000001_create_applicants_table::Migration),
            Box::new(m20240101_000002_create_employers_table::Migration),
            Box::new(m20240101_000003_create_jobs_table::Migration),
            Box::new(m20240101_000004_create_resumes_table::Migration),
        ]
    }
}
