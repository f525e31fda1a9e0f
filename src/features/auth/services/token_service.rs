use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthContext, Claims};
use crate::features::users::models::User;

/// Issues and validates the HS256 access tokens used by the API
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: AuthConfig,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            config,
        }
    }

    pub fn issue_token(&self, user: &User) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            cid: user.company_id,
            role: user.role,
            iat: now,
            exp: now + self.config.token_ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign access token: {:?}", e);
            AppError::Internal("Failed to issue token".to_string())
        })
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthContext> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.config.jwt_leeway.as_secs();

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthContext {
            user_id: data.claims.sub,
            company_id: data.claims.cid,
            role: data.claims.role,
        })
    }
}
