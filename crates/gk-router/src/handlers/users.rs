use crate::{Reply, Result, build_user_list_reply};

use gk_db::UserRepository;

use log::debug;

/// Window size for the /users listing, counted newest first.
pub const RECENT_USERS_LIMIT: i64 = 50;

/// List the most recently registered users.
pub async fn handle_users(users: &UserRepository) -> Result<Reply> {
    let recent = users.list_recent(RECENT_USERS_LIMIT).await?;
    debug!("Listed {} recent users", recent.len());
    Ok(build_user_list_reply(&recent, RECENT_USERS_LIMIT))
}
