//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para emitir y verificar
//! los tokens de sesión que transportan el rol del usuario.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::{JwtClaims, User};
use crate::utils::errors::AppError;

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Emitir un token para un usuario autenticado
pub fn create_token(config: &JwtConfig, user: &User) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(config.expiration_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Decodificar y validar un token
pub fn decode_token(config: &JwtConfig, token: &str) -> Result<JwtClaims, AppError> {
    decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserRole;
    use uuid::Uuid;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "staff@example.com".to_string(),
            password_hash: "irrelevant".to_string(),
            full_name: "Test Staff".to_string(),
            role: UserRole::Staff,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_roundtrip_preserves_role() {
        let config = test_config();
        let user = test_user();

        let token = create_token(&config, &user).unwrap();
        let claims = decode_token(&config, &token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "staff");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let token = create_token(&config, &test_user()).unwrap();

        let other = JwtConfig {
            secret: "other-secret".to_string(),
            expiration_hours: 1,
        };
        assert!(decode_token(&other, &token).is_err());
    }
}
