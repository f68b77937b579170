use super::authorizer::authorize;
use super::permission::Permission;
use super::policy::AccessPolicy;
use super::Principal;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub principal: Option<Principal>,
    pub request_id: Option<String>,
}

impl RequestContext {
    pub fn authenticated(principal: Principal) -> Self {
        Self { principal: Some(principal), request_id: None }
    }

    pub fn with_request_id<S: Into<String>>(mut self, id: S) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Require `permission` for this request; anonymous requests are 401.
    pub fn require(&self, policy: &AccessPolicy, permission: Permission) -> AppResult<&Principal> {
        let Some(principal) = self.principal.as_ref() else {
            return Err(AppError::auth("unauthenticated", "no authenticated principal on request"));
        };
        authorize(policy, principal, permission)?;
        Ok(principal)
    }
}
