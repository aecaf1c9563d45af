//! Boundary enforcement — keeps the layering honest.
//!
//! A small fixed rule table of forbidden role pairs is scanned against
//! every direct edge (optionally against reachability). Matching is by
//! exact role tag, not name substring: a module legitimately named
//! `billing-adapter-out-facade` must never false-positive.

pub mod rules;
pub mod types;
pub mod validator;

pub use rules::{ForbiddenEdgeRule, RuleTable};
pub use types::BoundaryViolation;
pub use validator::BoundaryValidator;
