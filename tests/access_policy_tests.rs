//! Access-level rules through the string-typed entry points, the way route
//! handlers and UI guards call them with raw token claims.

use registry_access::identity::access::{
    assert_valid, can_approve_trades, can_delete_data, can_manage_emissions, can_manage_users,
    can_trade, can_view_all_data, can_view_own_data, check_permission, describe, is_valid,
};
use registry_access::identity::{AccessCombination, Role, STANDARD_COMBINATIONS};
use registry_access::AccessError;

type Check = fn(&str, i64) -> bool;

const ALL_PREDICATES: [Check; 7] = [
    can_view_own_data,
    can_trade,
    can_view_all_data,
    can_approve_trades,
    can_manage_users,
    can_manage_emissions,
    can_delete_data,
];

const VALID: [(&str, i64); 6] = [("USER", 0), ("USER", 1), ("USER", 2), ("USER", 3), ("ADMIN", 1), ("ADMIN", 2)];

#[test]
fn closed_set_membership() {
    for role in ["USER", "ADMIN"] {
        for level in -1..=4 {
            assert_eq!(is_valid(role, level), VALID.contains(&(role, level)), "{role}:{level}");
        }
    }
    for role in ["MODERATOR", "Admin", "user", "SUPERADMIN", ""] {
        for level in -1..=4 {
            assert!(!is_valid(role, level), "{role}:{level}");
        }
    }
}

#[test]
fn every_predicate_fails_closed() {
    for role in ["USER", "ADMIN", "MODERATOR"] {
        for level in [-100, -1, 0, 1, 2, 3, 4, 100] {
            if is_valid(role, level) {
                continue;
            }
            for pred in ALL_PREDICATES {
                assert!(!pred(role, level), "granted on invalid {role}:{level}");
            }
        }
    }
}

#[test]
fn assert_valid_raises_iff_invalid() {
    for role in ["USER", "ADMIN", "GUEST"] {
        for level in -1..=4 {
            assert_eq!(assert_valid(role, level).is_err(), !is_valid(role, level));
        }
    }
}

#[test]
fn trade_access_by_tier() {
    assert!(can_trade("USER", 2));
    assert!(can_trade("USER", 3));
    assert!(!can_trade("USER", 1));
    assert!(!can_trade("USER", 0));
    assert!(can_trade("ADMIN", 1));
    assert!(can_trade("ADMIN", 2));
}

#[test]
fn management_is_senior_admin_only() {
    for pred in [can_manage_users as Check, can_manage_emissions, can_delete_data] {
        assert!(pred("ADMIN", 2));
        assert!(!pred("ADMIN", 1));
        assert!(!pred("USER", 3));
    }
}

#[test]
fn concrete_scenarios() {
    assert!(is_valid("USER", 0));
    assert!(!can_view_own_data("USER", 0));

    assert!(!is_valid("USER", 4));
    assert_eq!(describe("USER", 4), "Invalid level");
    assert_eq!(describe("MODERATOR", 1), "Invalid role");
    assert_eq!(describe("ADMIN", 2), "Senior admin (full control)");

    assert!(can_approve_trades("ADMIN", 1));
    assert!(!can_approve_trades("USER", 3));
    assert!(can_view_all_data("USER", 3));

    assert!(check_permission("ADMIN", 2, can_delete_data));
    assert!(!check_permission("ADMIN", 3, can_delete_data));
}

#[test]
fn check_permission_skips_predicate_for_invalid_pair() {
    let mut calls = 0;
    assert!(!check_permission("ADMIN", 3, |_, _| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 0);
    assert!(check_permission("USER", 1, |_, _| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 1);
}

#[test]
fn moderator_is_rejected_with_canonical_list() {
    let err = assert_valid("MODERATOR", 1).unwrap_err();
    let AccessError::InvalidAccessCombination { role, level, allowed } = err else {
        panic!("expected InvalidAccessCombination");
    };
    assert_eq!(role, "MODERATOR");
    assert_eq!(level, 1);
    let pairs: Vec<(Role, i64)> = allowed.iter().map(|c: &AccessCombination| (c.role, c.level)).collect();
    assert_eq!(
        pairs,
        vec![(Role::User, 0), (Role::User, 1), (Role::User, 2), (Role::User, 3), (Role::Admin, 1), (Role::Admin, 2)]
    );
    assert_eq!(allowed, STANDARD_COMBINATIONS.to_vec());
}
