use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::repositories::ClientStore;
use crate::utils::errors::AppError;

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for ClientRepository {
    async fn insert(&self, client: &Client) -> Result<Client, AppError> {
        let created = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, full_name, id_or_passport, phone, address, license_number, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(client.id)
        .bind(&client.full_name)
        .bind(&client.id_or_passport)
        .bind(&client.phone)
        .bind(&client.address)
        .bind(&client.license_number)
        .bind(client.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let clients =
            sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(clients)
    }

    async fn update(&self, client: &Client) -> Result<Client, AppError> {
        let updated = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET full_name = $2, id_or_passport = $3, phone = $4, address = $5, license_number = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(client.id)
        .bind(&client.full_name)
        .bind(&client.id_or_passport)
        .bind(&client.phone)
        .bind(&client.address)
        .bind(&client.license_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_duplicate(
        &self,
        id_or_passport: &str,
        phone: &str,
        license_number: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Client>, AppError> {
        let duplicate = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE (id_or_passport = $1 OR phone = $2 OR license_number = $3)
              AND ($4::uuid IS NULL OR id <> $4)
            LIMIT 1
            "#,
        )
        .bind(id_or_passport)
        .bind(phone)
        .bind(license_number)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await?;

        Ok(duplicate)
    }
}
