//! String-typed entry points over the standard access table.
//!
//! Route handlers and UI guards that hold raw claims (`role` as text, `level`
//! as an integer) call these directly; the role text is parsed with
//! [`RoleClaim::parse`] so unknown roles simply fail every check.

use super::policy::AccessPolicy;
use super::role::RoleClaim;
use crate::error::AccessError;

pub fn is_valid(role: &str, level: i64) -> bool {
    AccessPolicy::standard().is_valid(RoleClaim::parse(role), level)
}

pub fn assert_valid(role: &str, level: i64) -> Result<(), AccessError> {
    AccessPolicy::standard().assert_valid(RoleClaim::parse(role), level)
}

pub fn describe(role: &str, level: i64) -> &'static str {
    AccessPolicy::standard().describe(RoleClaim::parse(role), level)
}

pub fn can_view_own_data(role: &str, level: i64) -> bool {
    AccessPolicy::standard().can_view_own_data(RoleClaim::parse(role), level)
}

pub fn can_trade(role: &str, level: i64) -> bool {
    AccessPolicy::standard().can_trade(RoleClaim::parse(role), level)
}

pub fn can_view_all_data(role: &str, level: i64) -> bool {
    AccessPolicy::standard().can_view_all_data(RoleClaim::parse(role), level)
}

pub fn can_approve_trades(role: &str, level: i64) -> bool {
    AccessPolicy::standard().can_approve_trades(RoleClaim::parse(role), level)
}

pub fn can_manage_users(role: &str, level: i64) -> bool {
    AccessPolicy::standard().can_manage_users(RoleClaim::parse(role), level)
}

pub fn can_manage_emissions(role: &str, level: i64) -> bool {
    AccessPolicy::standard().can_manage_emissions(RoleClaim::parse(role), level)
}

pub fn can_delete_data(role: &str, level: i64) -> bool {
    AccessPolicy::standard().can_delete_data(RoleClaim::parse(role), level)
}

/// Runs `predicate` only when `(role, level)` is a valid combination.
pub fn check_permission<F>(role: &str, level: i64, predicate: F) -> bool
where
    F: FnOnce(&str, i64) -> bool,
{
    if !is_valid(role, level) {
        return false;
    }
    predicate(role, level)
}
