use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::policy::{AccessPolicy, Predicate};
use crate::error::AccessError;

/// Protected actions in the registry, one per policy predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewOwnData,
    Trade,
    ViewAllData,
    ApproveTrades,
    ManageUsers,
    ManageEmissions,
    DeleteData,
}

impl Permission {
    pub const ALL: [Permission; 7] = [
        Permission::ViewOwnData,
        Permission::Trade,
        Permission::ViewAllData,
        Permission::ApproveTrades,
        Permission::ManageUsers,
        Permission::ManageEmissions,
        Permission::DeleteData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewOwnData => "view_own_data",
            Permission::Trade => "trade",
            Permission::ViewAllData => "view_all_data",
            Permission::ApproveTrades => "approve_trades",
            Permission::ManageUsers => "manage_users",
            Permission::ManageEmissions => "manage_emissions",
            Permission::DeleteData => "delete_data",
        }
    }

    pub fn predicate(&self) -> Predicate {
        match self {
            Permission::ViewOwnData => AccessPolicy::can_view_own_data,
            Permission::Trade => AccessPolicy::can_trade,
            Permission::ViewAllData => AccessPolicy::can_view_all_data,
            Permission::ApproveTrades => AccessPolicy::can_approve_trades,
            Permission::ManageUsers => AccessPolicy::can_manage_users,
            Permission::ManageEmissions => AccessPolicy::can_manage_emissions,
            Permission::DeleteData => AccessPolicy::can_delete_data,
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AccessError::UnknownPermission(s.to_string()))
    }
}

/// What a UI guard needs to know about one (role, level) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessSummary {
    pub role: String,
    pub level: i64,
    pub valid: bool,
    pub label: &'static str,
    pub permissions: Vec<Permission>,
}

impl AccessSummary {
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::RoleClaim;

    #[test]
    fn names_round_trip() {
        for p in Permission::ALL {
            assert_eq!(p.to_string().parse::<Permission>().unwrap(), p);
            assert_eq!(serde_json::to_value(p).unwrap(), serde_json::Value::String(p.as_str().into()));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "approve".parse::<Permission>().unwrap_err();
        assert_eq!(err, AccessError::UnknownPermission("approve".into()));
    }

    #[test]
    fn senior_admin_summary_has_everything() {
        let s = AccessPolicy::standard().summarize(RoleClaim::parse("ADMIN"), 2);
        assert!(s.valid);
        assert_eq!(s.label, "Senior admin (full control)");
        assert_eq!(s.permissions, Permission::ALL.to_vec());
    }

    #[test]
    fn invalid_summary_grants_nothing() {
        let s = AccessPolicy::standard().summarize(RoleClaim::parse("ADMIN"), 3);
        assert!(!s.valid);
        assert_eq!(s.label, "Invalid level");
        assert!(s.permissions.is_empty());
    }

    #[test]
    fn shareholder_summary() {
        let s = AccessPolicy::standard().summarize(RoleClaim::parse("USER"), 2);
        assert_eq!(s.permissions, vec![Permission::ViewOwnData, Permission::Trade]);
        assert!(!s.has(Permission::ApproveTrades));
    }
}
