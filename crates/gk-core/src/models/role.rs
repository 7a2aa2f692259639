use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Privilege tier assigned to a user.
///
/// The order is total: `Normal < Vip < Admin`. Comparisons go through
/// [`Role::rank`] only, so a future tier slots in by editing the rank
/// table rather than every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Every user starts here.
    #[default]
    Normal,
    /// Elevated tier, granted manually.
    Vip,
    /// May inspect the user store.
    Admin,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Vip => "VIP",
            Self::Admin => "ADMIN",
        }
    }

    /// Position in the privilege order. Higher rank outranks lower.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::Vip => 2,
            Self::Admin => 3,
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORMAL" => Ok(Self::Normal),
            "VIP" => Ok(Self::Vip),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
