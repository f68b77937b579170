use serde::Serialize;
use std::fmt::{Display, Formatter};

use super::role::Role;

/// One valid (role, level) pair and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccessCombination {
    pub role: Role,
    pub level: i64,
    pub label: &'static str,
}

impl AccessCombination {
    pub const fn new(role: Role, level: i64, label: &'static str) -> Self {
        Self { role, level, label }
    }

    pub fn matches(&self, role: Role, level: i64) -> bool {
        self.role == role && self.level == level
    }
}

impl Display for AccessCombination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.role, self.level)
    }
}

/// The closed set of access tiers. Anything not listed here is invalid.
pub static STANDARD_COMBINATIONS: [AccessCombination; 6] = [
    AccessCombination::new(Role::User, 0, "Pending user (awaiting verification)"),
    AccessCombination::new(Role::User, 1, "Verified user (limited access)"),
    AccessCombination::new(Role::User, 2, "Shareholder (can trade)"),
    AccessCombination::new(Role::User, 3, "Power user (full data access)"),
    AccessCombination::new(Role::Admin, 1, "Junior admin (can approve trades)"),
    AccessCombination::new(Role::Admin, 2, "Senior admin (full control)"),
];
