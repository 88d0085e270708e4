//! Servicio de autenticación
//!
//! Login con verificación bcrypt contra la tabla users y emisión de un
//! token que transporta el rol. La política de permisos vive aparte, en
//! [`crate::services::access_policy`].

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::auth::User;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::jwt::{create_token, JwtConfig};

pub struct AuthService {
    pool: PgPool,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self { pool, jwt }
    }

    /// Verifica credenciales y devuelve (token, usuario)
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email.trim().to_lowercase())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Hash verification failed: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = create_token(&self.jwt, &user)?;
        Ok((token, user))
    }

    pub async fn me(&self, user_id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("User", &user_id.to_string()))
    }
}
