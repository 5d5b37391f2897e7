use std::env::VarError;
use std::fmt;
use std::io::{self, Write};

use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;

use crate::error::AdminError;
use crate::utils::db;

pub const RESUME_TABLE: &str = "resume";
pub const JOB_ID_COLUMN: &str = "job_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Added,
    AlreadyExists,
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Added => {
                write!(f, "[OK] Successfully added job_id column to Resume table")
            }
            PatchOutcome::AlreadyExists => {
                write!(f, "[INFO] job_id column already exists in Resume table")
            }
        }
    }
}

/// Add the nullable `resume.job_id -> job.id` column unless it is already there.
///
/// The existence check and the ALTER are separate statements, so two copies
/// racing each other can both see the column missing; the loser fails with a
/// duplicate column error.
pub async fn add_job_id_column(db: &DatabaseConnection) -> Result<PatchOutcome, AdminError> {
    let manager = SchemaManager::new(db);

    if !manager.has_table(RESUME_TABLE).await? {
        return Err(AdminError::MissingTable(RESUME_TABLE.to_string()));
    }

    if manager.has_column(RESUME_TABLE, JOB_ID_COLUMN).await? {
        log::debug!("{}.{} present, nothing to do", RESUME_TABLE, JOB_ID_COLUMN);
        return Ok(PatchOutcome::AlreadyExists);
    }

    // Inline REFERENCES: SQLite cannot add a table-level foreign key to an existing table.
    let references = format!("REFERENCES {}({})", Job::Table.to_string(), Job::Id.to_string());
    manager
        .alter_table(
            Table::alter()
                .table(Resume::Table)
                .add_column(ColumnDef::new(Resume::JobId).integer().null().extra(references))
                .to_owned(),
        )
        .await?;

    log::info!("Added {}.{}", RESUME_TABLE, JOB_ID_COLUMN);
    Ok(PatchOutcome::Added)
}

/// Patch and print one status line. Failures are reported on `out` and
/// swallowed; only a broken `out` is returned as an error.
pub async fn run<W: Write>(db: &DatabaseConnection, out: &mut W) -> io::Result<()> {
    match add_job_id_column(db).await {
        Ok(outcome) => writeln!(out, "{}", outcome),
        Err(e) => report_error(out, &e),
    }
}

/// Entry point for the `add_job_id_to_resume` tool: connect to `database_url`
/// and patch. A missing URL or an unreachable database is reported on `out`
/// like any other failure.
pub async fn run_with_url<W: Write>(
    database_url: Result<String, VarError>,
    out: &mut W,
) -> io::Result<()> {
    let connected = match database_url {
        Ok(url) => db::connect(&url).await,
        Err(e) => Err(AdminError::from(e)),
    };

    match connected {
        Ok(db) => run(&db, out).await,
        Err(e) => report_error(out, &e),
    }
}

fn report_error<W: Write>(out: &mut W, e: &AdminError) -> io::Result<()> {
    log::error!("Resume schema patch failed: {}", e);
    writeln!(out, "[ERROR] Error: {}", e)
}

#[derive(DeriveIden)]
enum Resume {
    Table,
    JobId,
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::{output_text, setup_test_db};
    use entity::{applicants, employers, jobs, resumes, sea_orm_active_enums::Role, users};
    use sea_orm::{ActiveModelTrait, ConnectionTrait, DbBackend, EntityTrait, Set, Statement};

    async fn resume_columns(db: &DatabaseConnection) -> Vec<(String, String, i32)> {
        db.query_all(Statement::from_string(
            DbBackend::Sqlite,
            "PRAGMA table_info(resume)",
        ))
        .await
        .unwrap()
        .into_iter()
        .map(|row| {
            (
                row.try_get::<String>("", "name").unwrap(),
                row.try_get::<String>("", "type").unwrap(),
                row.try_get::<i32>("", "notnull").unwrap(),
            )
        })
        .collect()
    }

    #[tokio::test]
    async fn adds_missing_column_with_foreign_key() {
        let db = setup_test_db().await;
        assert!(!resume_columns(&db).await.iter().any(|(name, _, _)| name == "job_id"));

        let outcome = add_job_id_column(&db).await.unwrap();
        assert_eq!(outcome, PatchOutcome::Added);

        let columns = resume_columns(&db).await;
        let (_, column_type, not_null) = columns
            .iter()
            .find(|(name, _, _)| name == "job_id")
            .expect("job_id column added");
        assert!(column_type.eq_ignore_ascii_case("integer"));
        assert_eq!(*not_null, 0);

        let foreign_keys = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA foreign_key_list(resume)",
            ))
            .await
            .unwrap();
        assert!(foreign_keys.iter().any(|row| {
            row.try_get::<String>("", "from").unwrap() == "job_id"
                && row.try_get::<String>("", "table").unwrap() == "job"
                && row.try_get::<String>("", "to").unwrap() == "id"
        }));
    }

    #[tokio::test]
    async fn second_run_reports_already_exists() {
        let db = setup_test_db().await;

        assert_eq!(add_job_id_column(&db).await.unwrap(), PatchOutcome::Added);
        assert_eq!(add_job_id_column(&db).await.unwrap(), PatchOutcome::AlreadyExists);

        let job_id_columns = resume_columns(&db)
            .await
            .into_iter()
            .filter(|(name, _, _)| name == "job_id")
            .count();
        assert_eq!(job_id_columns, 1);
    }

    #[tokio::test]
    async fn run_prints_status_lines() {
        let db = setup_test_db().await;

        let mut out = Vec::new();
        run(&db, &mut out).await.unwrap();
        run(&db, &mut out).await.unwrap();

        assert_eq!(
            output_text(out),
            "[OK] Successfully added job_id column to Resume table\n\
             [INFO] job_id column already exists in Resume table\n"
        );
    }

    #[tokio::test]
    async fn missing_resume_table_is_reported_not_raised() {
        let db = setup_test_db().await;
        db.execute_unprepared("DROP TABLE resume").await.unwrap();

        let err = add_job_id_column(&db).await.unwrap_err();
        assert!(matches!(err, AdminError::MissingTable(ref table) if table == "resume"));

        let mut out = Vec::new();
        run(&db, &mut out).await.unwrap();
        assert_eq!(output_text(out), "[ERROR] Error: no such table: resume\n");
    }

    #[tokio::test]
    async fn unset_database_url_is_reported() {
        let mut out = Vec::new();
        let result = run_with_url(Err(VarError::NotPresent), &mut out).await;

        assert!(result.is_ok());
        let output = output_text(out);
        assert!(output.starts_with("[ERROR] Error: "));
        assert!(output.contains("DATABASE_URL"));
    }

    #[tokio::test]
    async fn unreachable_database_is_reported() {
        let mut out = Vec::new();
        let url = "sqlite:///nonexistent/dir/x.db?mode=ro".to_owned();
        let result = run_with_url(Ok(url), &mut out).await;

        assert!(result.is_ok());
        let output = output_text(out);
        assert!(output.starts_with("[ERROR] Error: "));
        assert_eq!(output.lines().count(), 1);
    }

    #[tokio::test]
    async fn patched_resume_links_to_a_job() {
        let db = setup_test_db().await;
        add_job_id_column(&db).await.unwrap();

        let employer_user = users::ActiveModel {
            username: Set("hiring".to_owned()),
            password: Set("x".to_owned()),
            role: Set(Role::Employer),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let employer = employers::ActiveModel {
            user_id: Set(employer_user.id),
            fullname: Set("Hiring Manager".to_owned()),
            email: Set(String::new()),
            company: Set("Acme".to_owned()),
            phone: Set(String::new()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let job = jobs::ActiveModel {
            employer_id: Set(employer.id),
            title: Set("Rust Engineer".to_owned()),
            description: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let applicant_user = users::ActiveModel {
            username: Set("seeker".to_owned()),
            password: Set("x".to_owned()),
            role: Set(Role::Applicant),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let applicant = applicants::ActiveModel {
            user_id: Set(applicant_user.id),
            fullname: Set("Job Seeker".to_owned()),
            email: Set(String::new()),
            contact_number: Set(String::new()),
            skills: Set("N/A".to_owned()),
            experience: Set(0),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let resume = resumes::ActiveModel {
            applicant_id: Set(applicant.id),
            filename: Set("cv.pdf".to_owned()),
            job_id: Set(Some(job.id)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let linked = resumes::Entity::find_by_id(resume.id)
            .find_also_related(jobs::Entity)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(linked.0.job_id, Some(job.id));
        assert_eq!(linked.1.map(|j| j.title), Some("Rust Engineer".to_owned()));

        let unlinked = resumes::ActiveModel {
            applicant_id: Set(applicant.id),
            filename: Set("general.pdf".to_owned()),
            job_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        assert_eq!(unlinked.job_id, None);
    }
}
