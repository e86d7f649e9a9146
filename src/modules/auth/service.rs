use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let credentials = sqlx::query_as::<_, (Uuid, String, i16)>(
            "SELECT id, password, status FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let (user_id, hashed, status) = credentials;

        if !verify_password(&dto.password, &hashed)? {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        if status != 0 {
            return Err(AppError::Unauthorized("Account is disabled".to_string()));
        }

        // Stamp the login and fetch the record in one round trip.
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET last_connection = now() \
             WHERE id = $1 \
             RETURNING id, email, first_name, name, phone, roles, status, employee, \
                       permissions, last_connection, created_at, updated_at",
        )
        .bind(user_id)
        .fetch_one(db)
        .await?;

        let access_token = create_access_token(user.id, &user.email, jwt_config)?;

        Ok(LoginResponse { access_token, user })
    }
}
