//! Domain model for campers, activities, and signups.
//!
//! # Responsibility
//! - Define the canonical records used by services and views.
//! - Enforce field invariants at construction and on every assignment.
//!
//! # Invariants
//! - Every persisted entity carries a store-generated integer id.
//! - A `Signup` always references one camper and one activity.
//! - No constructor or setter can produce an entity that violates
//!   `validation` rules.

use std::fmt::{Display, Formatter};

pub mod activity;
pub mod camper;
pub mod signup;
pub mod validation;

/// Entity families managed by the camp store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Camper,
    Activity,
    Signup,
}

impl EntityKind {
    /// Lowercase singular name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camper => "camper",
            Self::Activity => "activity",
            Self::Signup => "signup",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
