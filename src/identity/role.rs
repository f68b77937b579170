use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role as claimed by untrusted input (token claims, query strings, CLI args).
///
/// Parsing never fails: anything other than the exact strings `USER` and `ADMIN`
/// becomes `Unrecognized`, which no access combination matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleClaim<'a> {
    Known(Role),
    Unrecognized(&'a str),
}

impl<'a> RoleClaim<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw {
            "USER" => RoleClaim::Known(Role::User),
            "ADMIN" => RoleClaim::Known(Role::Admin),
            other => RoleClaim::Unrecognized(other),
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(r) => Some(*r),
            RoleClaim::Unrecognized(_) => None,
        }
    }

    /// The claim as originally written, for diagnostics.
    pub fn as_str(&self) -> &'a str {
        match self {
            RoleClaim::Known(r) => r.as_str(),
            RoleClaim::Unrecognized(s) => s,
        }
    }
}

impl From<Role> for RoleClaim<'_> {
    fn from(role: Role) -> Self { RoleClaim::Known(role) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(RoleClaim::parse("USER"), RoleClaim::Known(Role::User));
        assert_eq!(RoleClaim::parse("ADMIN"), RoleClaim::Known(Role::Admin));
        assert_eq!(RoleClaim::parse("user"), RoleClaim::Unrecognized("user"));
        assert_eq!(RoleClaim::parse(" ADMIN"), RoleClaim::Unrecognized(" ADMIN"));
        assert_eq!(RoleClaim::parse(""), RoleClaim::Unrecognized(""));
    }

    #[test]
    fn unrecognized_claim_keeps_original_text() {
        let claim = RoleClaim::parse("MODERATOR");
        assert_eq!(claim.role(), None);
        assert_eq!(claim.as_str(), "MODERATOR");
    }

    #[test]
    fn role_serde_uses_uppercase_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let r: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(r, Role::User);
    }
}
