use crate::models::identity::Identity;
use crate::models::role::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full persisted user record.
///
/// `created_at` is set on first sighting and never rewritten; the profile
/// fields track whatever the transport last reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub identity: Identity,
    pub display_name: Option<String>,
    pub handle: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
