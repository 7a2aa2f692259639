use crate::models::identity::Identity;
use crate::models::role::Role;

use serde::{Deserialize, Serialize};

/// Projection returned by the recent-users listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUser {
    pub identity: Identity,
    pub role: Role,
    pub handle: Option<String>,
}
