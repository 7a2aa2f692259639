use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouterError>;

/// Failures that escape the router.
///
/// Access denials and bad arguments are ordinary replies, not errors. The
/// only thing a caller can't handle for itself is the store going away.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Storage failure at {location}: {source}")]
    Db {
        source: gk_db::DbError,
        location: ErrorLocation,
    },
}

impl From<gk_db::DbError> for RouterError {
    #[track_caller]
    fn from(source: gk_db::DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
