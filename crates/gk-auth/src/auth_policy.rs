use crate::Access;

use gk_core::{Identity, Role};

/// Authorization decisions for incoming commands.
///
/// Constructed once at startup with the owner identity and shared freely:
/// no interior state, no I/O, every check is a total function.
#[derive(Debug, Clone, Copy)]
pub struct AuthPolicy {
    owner: Identity,
}

impl AuthPolicy {
    pub fn new(owner: Identity) -> Self {
        Self { owner }
    }

    /// The configured owner bypasses every role check, whether or not the
    /// store has ever seen them.
    pub fn is_owner(&self, identity: Identity) -> bool {
        identity == self.owner
    }

    /// Rank comparison. An absent role (identity never seen) satisfies
    /// nothing.
    pub fn has_min_role(&self, role: Option<Role>, required: Role) -> bool {
        match role {
            Some(role) => role.rank() >= required.rank(),
            None => false,
        }
    }

    /// Single entry point for role-gated checks: owner bypass first,
    /// otherwise the rank comparison.
    pub fn authorize(&self, identity: Identity, role: Option<Role>, required: Role) -> bool {
        self.is_owner(identity) || self.has_min_role(role, required)
    }

    /// Evaluates a declarative per-command requirement.
    /// `OwnerOnly` is not satisfied by `Admin` rank.
    pub fn permits(&self, identity: Identity, role: Option<Role>, access: Access) -> bool {
        match access {
            Access::Public => true,
            Access::MinRole(required) => self.authorize(identity, role, required),
            Access::OwnerOnly => self.is_owner(identity),
        }
    }
}
