pub mod identity;
pub mod recent_user;
pub mod role;
pub mod user;
