//! CLI helpers invoked through the main binary.
//!
//! Every API endpoint is permission-gated, so a fresh deployment needs a
//! first `ROLE_ADMIN` account created out of band.

use anyhow::{Context, bail};
use gescom_core::ROLE_ADMIN;
use sqlx::PgPool;

use crate::utils::password::hash_password;

/// Creates the initial admin account.
///
/// The account gets `ROLE_ADMIN` and an empty permission string: with the
/// admin override enabled that is all-powerful, with the override disabled
/// the admin must grant itself slugs through the toggle API first.
pub async fn create_admin(
    pool: &PgPool,
    first_name: &str,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let existing = sqlx::query("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .context("Failed to check for existing user")?;

    if existing.is_some() {
        bail!("A user with email {email} already exists");
    }

    let hashed_password = hash_password(password)?;

    sqlx::query(
        "INSERT INTO users (email, password, first_name, name, roles, employee) \
         VALUES ($1, $2, $3, $4, $5, true)",
    )
    .bind(email)
    .bind(&hashed_password)
    .bind(first_name)
    .bind(name)
    .bind(vec![ROLE_ADMIN.to_string()])
    .execute(pool)
    .await
    .context("Failed to insert admin user")?;

    Ok(())
}
