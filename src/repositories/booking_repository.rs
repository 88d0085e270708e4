use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::repositories::BookingStore;
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn insert(&self, booking: &Booking) -> Result<Booking, AppError> {
        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (id, client_id, vehicle_id, start_date, end_date, status, days, daily_rate, total_amount, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.client_id)
        .bind(booking.vehicle_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status)
        .bind(booking.days)
        .bind(booking.daily_rate)
        .bind(booking.total_amount)
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(bookings)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET client_id = $2, vehicle_id = $3, start_date = $4, end_date = $5,
                status = $6, days = $7, daily_rate = $8, total_amount = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.client_id)
        .bind(booking.vehicle_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status)
        .bind(booking.days)
        .bind(booking.daily_rate)
        .bind(booking.total_amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_active_for_vehicle(
        &self,
        vehicle_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE vehicle_id = $1
              AND status = $2
              AND ($3::uuid IS NULL OR id <> $3)
            ORDER BY start_date
            "#,
        )
        .bind(vehicle_id)
        .bind(BookingStatus::Active)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn active_exists_for_client(&self, client_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM bookings WHERE client_id = $1 AND status = $2)",
        )
        .bind(client_id)
        .bind(BookingStatus::Active)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    async fn active_exists_for_vehicle(&self, vehicle_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM bookings WHERE vehicle_id = $1 AND status = $2)",
        )
        .bind(vehicle_id)
        .bind(BookingStatus::Active)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
