use gk_core::Role;

/// Declarative access requirement attached to each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, including identities the store has never seen.
    Public,
    /// The owner, or any user whose role ranks at least this high.
    MinRole(Role),
    /// The configured owner alone; `Admin` rank does not qualify.
    OwnerOnly,
}
