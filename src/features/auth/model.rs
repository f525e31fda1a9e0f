use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::users::models::UserRole;

/// Request-scoped authenticated identity. Built by the auth middleware from
/// the bearer token and passed explicitly into services; every query is
/// scoped to `company_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub role: UserRole,
}

impl AuthContext {
    pub fn is_manager(&self) -> bool {
        self.role == UserRole::Manager
    }
}

/// JWT claims for locally issued access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    /// Company (tenant) id
    pub cid: Uuid,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}
