pub mod access;
pub mod auth_policy;

pub use access::Access;
pub use auth_policy::AuthPolicy;
