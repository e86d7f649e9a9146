use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateServiceDto, Service, UpdateServiceDto};

const SERVICE_COLUMNS: &str = "id, ref, label, state, description, duration, duration_unit, \
                               note, tags, price, vat, created_at, updated_at";

pub struct ServicesService;

impl ServicesService {
    #[instrument(skip(db))]
    pub async fn get_services(db: &PgPool) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services ORDER BY ref"
        ))
        .fetch_all(db)
        .await?;

        Ok(services)
    }

    #[instrument(skip(db))]
    pub async fn get_service(db: &PgPool, id: Uuid) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service with id {id} not found")))
    }

    #[instrument(skip(db, dto), fields(reference = %dto.reference))]
    pub async fn create_service(db: &PgPool, dto: CreateServiceDto) -> Result<Service, AppError> {
        let service = sqlx::query_as::<_, Service>(&format!(
            "INSERT INTO services \
                (ref, label, state, description, duration, duration_unit, note, tags, price, vat) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(&dto.reference)
        .bind(&dto.label)
        .bind(dto.state)
        .bind(&dto.description)
        .bind(dto.duration)
        .bind(&dto.duration_unit)
        .bind(&dto.note)
        .bind(&dto.tags)
        .bind(dto.price)
        .bind(dto.vat)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::BadRequest(
                        "A service with this reference already exists".to_string(),
                    );
                }
            }
            AppError::from(e)
        })?;

        Ok(service)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_service(
        db: &PgPool,
        id: Uuid,
        dto: UpdateServiceDto,
    ) -> Result<Service, AppError> {
        let service = sqlx::query_as::<_, Service>(&format!(
            "UPDATE services SET \
                ref = COALESCE($2, ref), \
                label = COALESCE($3, label), \
                state = COALESCE($4, state), \
                description = COALESCE($5, description), \
                duration = COALESCE($6, duration), \
                duration_unit = COALESCE($7, duration_unit), \
                note = COALESCE($8, note), \
                tags = COALESCE($9, tags), \
                price = COALESCE($10, price), \
                vat = COALESCE($11, vat), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.reference)
        .bind(&dto.label)
        .bind(dto.state)
        .bind(&dto.description)
        .bind(dto.duration)
        .bind(&dto.duration_unit)
        .bind(&dto.note)
        .bind(&dto.tags)
        .bind(dto.price)
        .bind(dto.vat)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service with id {id} not found")))?;

        Ok(service)
    }

    #[instrument(skip(db))]
    pub async fn delete_service(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service with id {id} not found")));
        }

        Ok(())
    }
}
