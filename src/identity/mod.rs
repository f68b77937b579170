//! Access levels for the shareholder registry.
//! Keep the public surface thin and split implementation across sub-modules.

mod role;
mod combination;
mod policy;
mod permission;
mod principal;
mod request_context;
mod authorizer;
pub mod access;

pub use role::{Role, RoleClaim};
pub use combination::{AccessCombination, STANDARD_COMBINATIONS};
pub use policy::{AccessPolicy, Predicate};
pub use permission::{AccessSummary, Permission};
pub use principal::Principal;
pub use request_context::RequestContext;
pub use authorizer::{authorize, is_authorized};
