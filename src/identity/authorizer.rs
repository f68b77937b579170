use tracing::{debug, warn};

use super::permission::Permission;
use super::policy::AccessPolicy;
use super::principal::Principal;
use crate::error::{AppError, AppResult};

/// Gate a protected action for an authenticated principal.
///
/// An invalid (role, level) pair is a bad request (400); a valid pair that lacks
/// the permission is forbidden (403).
pub fn authorize(policy: &AccessPolicy, principal: &Principal, permission: Permission) -> AppResult<()> {
    let role = principal.role_claim();
    if let Err(e) = policy.assert_valid(role, principal.level) {
        warn!(
            target: "registry_access::authz",
            user = ?principal.user_id, role = ?principal.role, level = principal.level,
            "rejecting invalid access combination"
        );
        return Err(e.into());
    }
    if policy.allows(role, principal.level, permission) {
        debug!(target: "registry_access::authz", user = ?principal.user_id, %permission, "granted");
        return Ok(());
    }
    debug!(
        target: "registry_access::authz",
        user = ?principal.user_id, role = ?principal.role, level = principal.level, %permission,
        "denied"
    );
    Err(AppError::forbidden(
        "permission_denied".to_string(),
        format!("{} ({}) may not {}", principal.user_id, policy.describe(role, principal.level), permission),
    ))
}

/// Boolean form of [`authorize`] for UI guards that only need to decide what to render.
pub fn is_authorized(policy: &AccessPolicy, principal: &Principal, permission: Permission) -> bool {
    policy.allows(principal.role_claim(), principal.level, permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(role: &str, level: i64) -> Principal { Principal::new("alice", role, level) }

    #[test]
    fn shareholder_may_trade() {
        let policy = AccessPolicy::standard();
        assert!(authorize(&policy, &p("USER", 2), Permission::Trade).is_ok());
    }

    #[test]
    fn junior_admin_cannot_manage_emissions() {
        let policy = AccessPolicy::standard();
        let err = authorize(&policy, &p("ADMIN", 1), Permission::ManageEmissions).unwrap_err();
        assert_eq!(err.http_status(), 403);
        assert_eq!(err.code_str(), "permission_denied");
        assert!(err.message().contains("Junior admin"));
    }

    #[test]
    fn tampered_level_is_bad_request() {
        let policy = AccessPolicy::standard();
        let err = authorize(&policy, &p("ADMIN", 9), Permission::ViewOwnData).unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(err.code_str(), "invalid_access_combination");
    }

    #[test]
    fn boolean_guard_matches_authorize() {
        let policy = AccessPolicy::standard();
        for (role, level) in [("USER", 0), ("USER", 3), ("ADMIN", 1), ("ADMIN", 2), ("ADMIN", 5), ("X", 1)] {
            for perm in Permission::ALL {
                let principal = p(role, level);
                assert_eq!(is_authorized(&policy, &principal, perm), authorize(&policy, &principal, perm).is_ok());
            }
        }
    }

    #[test]
    fn tampered_role_is_logged_escaped() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        let policy = AccessPolicy::standard();
        let forged = p("ADMIN\nlevel=2 granted", 7);
        let res = tracing::subscriber::with_default(subscriber, || authorize(&policy, &forged, Permission::DeleteData));
        assert!(res.is_err());

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.lines().count(), 1, "{logs}");
        assert!(logs.contains(r#"role="ADMIN\nlevel=2 granted""#), "{logs}");
    }
}
