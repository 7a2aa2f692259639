pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::error::{ApiError, Result as ApiResult};
pub use app_state::AppState;

pub use crate::routes::build_router;
