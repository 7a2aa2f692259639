use crate::{CommandRequest, Reply, Result, build_whoami_reply};

use gk_auth::AuthPolicy;
use gk_db::UserRepository;

use log::debug;

/// Report the caller's stored profile, role and owner status.
pub async fn handle_whoami(
    request: &CommandRequest,
    users: &UserRepository,
    policy: &AuthPolicy,
) -> Result<Reply> {
    debug!("Whoami for {} starting", request.caller);

    let user = users.find_by_identity(request.caller).await?;
    Ok(build_whoami_reply(
        request.caller,
        user.as_ref(),
        policy.is_owner(request.caller),
    ))
}
