pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::recent_user::RecentUser;
pub use models::role::Role;
pub use models::user::User;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
