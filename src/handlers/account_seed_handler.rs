use std::io::Write;

use entity::{applicants, employers, sea_orm_active_enums::Role, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};

use crate::error::AdminError;
use crate::types::account::{AccountSpec, APPLICANT_SKILLS_PLACEHOLDER};
use crate::utils::password::hash_password;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    pub total_users: u64,
}

/// Insert every account in `accounts` whose username is not taken yet, along
/// with its applicant or employer profile, then print a credentials table.
///
/// All inserts share one transaction. Any error rolls back the whole batch and
/// is returned to the caller untouched. Existing accounts are never modified.
///
/// The credentials table echoes plaintext passwords. That is only acceptable
/// because the roster is throwaway demo data; do not point this at real users.
pub async fn create_test_accounts<W: Write>(
    db: &DatabaseConnection,
    accounts: &[AccountSpec],
    hash_cost: u32,
    out: &mut W,
) -> Result<SeedSummary, AdminError> {
    writeln!(out, "Creating test accounts...\n")?;

    let mut summary = SeedSummary::default();
    let txn = db.begin().await?;

    for account in accounts {
        let username = account.username;

        let existing_user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&txn)
            .await?;
        if existing_user.is_some() {
            writeln!(out, "  [SKIP] {} already exists, skipping...", username)?;
            summary.skipped.push(username.to_owned());
            continue;
        }

        let new_user = users::ActiveModel {
            username: Set(username.to_owned()),
            password: Set(hash_password(account.password, hash_cost)?),
            role: Set(account.role),
            ..Default::default()
        };
        // Inserted inside the transaction so the id is known before commit.
        let user = new_user.insert(&txn).await.map_err(|e| {
            log::error!("User creation error for {}: {}", username, e);
            e
        })?;
        log::debug!("Inserted user {} with id {}", username, user.id);

        match account.role {
            Role::Applicant => {
                applicants::ActiveModel {
                    user_id: Set(user.id),
                    fullname: Set(account.fullname().to_owned()),
                    email: Set(account.email().to_owned()),
                    contact_number: Set(account.contact().to_owned()),
                    skills: Set(APPLICANT_SKILLS_PLACEHOLDER.to_owned()),
                    experience: Set(0),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                writeln!(out, "  [OK] Created applicant: {} ({})", username, account.fullname())?;
            }
            Role::Employer => {
                employers::ActiveModel {
                    user_id: Set(user.id),
                    fullname: Set(account.fullname().to_owned()),
                    email: Set(account.email().to_owned()),
                    company: Set(account.company().to_owned()),
                    phone: Set(account.contact().to_owned()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                writeln!(
                    out,
                    "  [OK] Created employer: {} ({} - {})",
                    username,
                    account.fullname(),
                    account.company()
                )?;
            }
            Role::Admin => {
                writeln!(out, "  [OK] Created admin: {}", username)?;
            }
        }
        summary.created.push(username.to_owned());
    }

    txn.commit().await?;
    log::info!(
        "Seeding committed: {} created, {} skipped",
        summary.created.len(),
        summary.skipped.len()
    );
    writeln!(out, "\n[SUCCESS] All accounts created successfully!")?;

    summary.total_users = users::Entity::find().count(db).await?;

    writeln!(out, "\n=== ACCOUNT SUMMARY ===")?;
    writeln!(out, "\nTotal Users: {}", summary.total_users)?;
    writeln!(out, "\nLogin Credentials:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for account in accounts {
        writeln!(
            out,
            "Username: {:<15} Password: {:<15} Role: {}",
            account.username, account.password, account.role
        )?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    Ok(summary)
}
