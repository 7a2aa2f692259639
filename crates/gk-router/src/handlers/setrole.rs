use crate::{CommandRequest, Reply, Result};

use gk_core::Role;
use gk_db::UserRepository;

use log::{debug, info};

const USAGE: &str = "Usage: /setrole <user_id> <NORMAL|VIP|ADMIN>";

/// Change another user's stored role.
///
/// Argument mistakes come back as replies that tell the caller how to fix
/// them. The target must already be registered; roles are never assigned to
/// identities the store has not seen.
pub async fn handle_setrole(request: &CommandRequest, users: &UserRepository) -> Result<Reply> {
    debug!(
        "Setrole from {} with args {:?} starting",
        request.caller, request.args
    );

    let [target, role] = request.args.as_slice() else {
        return Ok(Reply::new(USAGE));
    };
    let Ok(target) = target.parse::<i64>() else {
        return Ok(Reply::new(
            "Invalid user id. Example: /setrole 123456789 VIP",
        ));
    };
    let Ok(role) = role.parse::<Role>() else {
        return Ok(Reply::new("Invalid role. Valid roles: NORMAL, VIP, ADMIN."));
    };

    if !users.set_role(target, role).await? {
        return Ok(Reply::new(
            "User not found in DB yet. Have them press /start first, then retry.",
        ));
    }

    info!("Set role of {} to {}", target, role);
    Ok(Reply::new(format!("✅ Set {target} role to {role}.")))
}
