//! Access-level policy: validity of (role, level) pairs and the permission
//! predicates evaluated on top of it.
//!
//! Every predicate re-validates its input against the table and answers `false`
//! for anything outside it, so callers can hand in stale or tampered claims
//! without a separate validation step.

use std::borrow::Cow;

use super::combination::{AccessCombination, STANDARD_COMBINATIONS};
use super::permission::{AccessSummary, Permission};
use super::role::{Role, RoleClaim};
use crate::error::AccessError;

/// Signature shared by all permission predicates.
pub type Predicate = for<'p, 'r> fn(&'p AccessPolicy, RoleClaim<'r>, i64) -> bool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    table: Cow<'static, [AccessCombination]>,
}

impl Default for AccessPolicy {
    fn default() -> Self { Self::standard() }
}

impl AccessPolicy {
    /// Policy over the built-in six-tier table.
    pub fn standard() -> Self {
        Self { table: Cow::Borrowed(&STANDARD_COMBINATIONS[..]) }
    }

    /// Policy over a substitute table (used when tiers are reconfigured in tests).
    pub fn with_table(table: Vec<AccessCombination>) -> Self {
        Self { table: Cow::Owned(table) }
    }

    pub fn allowed(&self) -> Vec<AccessCombination> { self.table.to_vec() }

    fn lookup(&self, role: RoleClaim<'_>, level: i64) -> Option<&AccessCombination> {
        let role = role.role()?;
        self.table.iter().find(|c| c.matches(role, level))
    }

    // Role of a combination that is in the table, None otherwise.
    fn valid_role(&self, role: RoleClaim<'_>, level: i64) -> Option<Role> {
        self.lookup(role, level).map(|c| c.role)
    }

    pub fn is_valid(&self, role: RoleClaim<'_>, level: i64) -> bool {
        self.lookup(role, level).is_some()
    }

    pub fn assert_valid(&self, role: RoleClaim<'_>, level: i64) -> Result<(), AccessError> {
        if self.is_valid(role, level) {
            return Ok(());
        }
        Err(AccessError::InvalidAccessCombination {
            role: role.as_str().to_string(),
            level,
            allowed: self.allowed(),
        })
    }

    /// Display label for a combination. Never fails; unknown input yields
    /// `"Invalid role"` or `"Invalid level"`.
    pub fn describe(&self, role: RoleClaim<'_>, level: i64) -> &'static str {
        if role.role().is_none() {
            return "Invalid role";
        }
        match self.lookup(role, level) {
            Some(c) => c.label,
            None => "Invalid level",
        }
    }

    pub fn can_view_own_data(&self, role: RoleClaim<'_>, level: i64) -> bool {
        match self.valid_role(role, level) {
            Some(Role::User) => level != 0,
            Some(Role::Admin) => true,
            None => false,
        }
    }

    pub fn can_trade(&self, role: RoleClaim<'_>, level: i64) -> bool {
        match self.valid_role(role, level) {
            Some(Role::User) => level >= 2,
            Some(Role::Admin) => true,
            None => false,
        }
    }

    pub fn can_view_all_data(&self, role: RoleClaim<'_>, level: i64) -> bool {
        match self.valid_role(role, level) {
            Some(Role::User) => level == 3,
            Some(Role::Admin) => true,
            None => false,
        }
    }

    pub fn can_approve_trades(&self, role: RoleClaim<'_>, level: i64) -> bool {
        matches!(self.valid_role(role, level), Some(Role::Admin))
    }

    // Users, emissions and deletions are all gated on the senior admin tier today.
    // They stay separate predicates so the tiers can diverge later.
    fn is_senior_admin(&self, role: RoleClaim<'_>, level: i64) -> bool {
        matches!(self.valid_role(role, level), Some(Role::Admin)) && level == 2
    }

    pub fn can_manage_users(&self, role: RoleClaim<'_>, level: i64) -> bool {
        self.is_senior_admin(role, level)
    }

    pub fn can_manage_emissions(&self, role: RoleClaim<'_>, level: i64) -> bool {
        self.is_senior_admin(role, level)
    }

    pub fn can_delete_data(&self, role: RoleClaim<'_>, level: i64) -> bool {
        self.is_senior_admin(role, level)
    }

    /// Generic gate: invalid combinations are rejected before `predicate` runs.
    pub fn check_permission<'r, F>(&self, role: RoleClaim<'r>, level: i64, predicate: F) -> bool
    where
        F: FnOnce(&Self, RoleClaim<'r>, i64) -> bool,
    {
        if !self.is_valid(role, level) {
            return false;
        }
        predicate(self, role, level)
    }

    pub fn allows(&self, role: RoleClaim<'_>, level: i64, permission: Permission) -> bool {
        self.check_permission(role, level, permission.predicate())
    }

    pub fn granted(&self, role: RoleClaim<'_>, level: i64) -> Vec<Permission> {
        Permission::ALL
            .iter()
            .copied()
            .filter(|p| self.allows(role, level, *p))
            .collect()
    }

    pub fn summarize(&self, role: RoleClaim<'_>, level: i64) -> AccessSummary {
        AccessSummary {
            role: role.as_str().to_string(),
            level,
            valid: self.is_valid(role, level),
            label: self.describe(role, level),
            permissions: self.granted(role, level),
        }
    }

    /// One summary per table row, in table order.
    pub fn matrix(&self) -> Vec<AccessSummary> {
        self.table
            .iter()
            .map(|c| self.summarize(RoleClaim::from(c.role), c.level))
            .collect()
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
