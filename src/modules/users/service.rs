use gescom_core::ROLE_USER;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{CreateUserDto, UpdateUserDto, User};

const USER_COLUMNS: &str = "id, email, first_name, name, phone, roles, status, employee, \
                            permissions, last_connection, created_at, updated_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {id} not found")))
    }

    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let existing = sqlx::query_as::<_, (Uuid,)>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let hashed_password = hash_password(&dto.password)?;
        let roles = if dto.roles.is_empty() {
            vec![ROLE_USER.to_string()]
        } else {
            dto.roles
        };

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password, first_name, name, phone, roles, employee) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.first_name)
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(&roles)
        .bind(dto.employee)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: Uuid, dto: UpdateUserDto) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                email = COALESCE($2, email), \
                first_name = COALESCE($3, first_name), \
                name = COALESCE($4, name), \
                phone = COALESCE($5, phone), \
                roles = COALESCE($6, roles), \
                status = COALESCE($7, status), \
                employee = COALESCE($8, employee), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.email)
        .bind(&dto.first_name)
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(&dto.roles)
        .bind(dto.status)
        .bind(dto.employee)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {id} not found")))?;

        Ok(user)
    }

    #[instrument(skip(db, password))]
    pub async fn update_password(db: &PgPool, id: Uuid, password: &str) -> Result<(), AppError> {
        let hashed_password = hash_password(password)?;

        let result =
            sqlx::query("UPDATE users SET password = $2, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(&hashed_password)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {id} not found")));
        }

        Ok(())
    }

    /// Persists a re-encoded permission string produced by the toggle
    /// operation. Plain last-writer-wins: two concurrent toggles on the
    /// same user race on this column.
    #[instrument(skip(db))]
    pub async fn update_permissions(db: &PgPool, id: Uuid, raw: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET permissions = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(raw)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {id} not found")))?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {id} not found")));
        }

        Ok(())
    }
}
