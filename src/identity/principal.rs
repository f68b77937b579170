use serde::{Deserialize, Serialize};

use super::role::RoleClaim;
use crate::error::{AppError, AppResult};

/// Authenticated caller as presented by the auth layer. `role` and `level`
/// are taken verbatim from the token claims and are not trusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub role: String,
    pub level: i64,
}

impl Principal {
    pub fn new<S: Into<String>>(user_id: S, role: S, level: i64) -> Self {
        Self { user_id: user_id.into(), role: role.into(), level }
    }

    pub fn from_claims_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::auth("invalid_claims".to_string(), format!("malformed token claims: {}", e)))
    }

    pub fn role_claim(&self) -> RoleClaim<'_> { RoleClaim::parse(&self.role) }
}
