use crate::registry::{COMMANDS, CommandSpec};
use crate::reply::Reply;

use gk_auth::Access;
use gk_core::{Identity, RecentUser, Role, User};

/// Build the welcome reply sent on /start.
pub fn build_welcome_reply() -> Reply {
    Reply::new(format!(
        "Welcome! You are registered.\n\n{}",
        render_command_list()
    ))
}

/// Build the command-list reply sent on /help.
pub fn build_command_list_reply() -> Reply {
    Reply::new(render_command_list())
}

/// Build the liveness reply sent on /ping.
pub fn build_pong_reply() -> Reply {
    Reply::new("Pong.")
}

/// Build the reply for a command token the registry does not know.
pub fn build_unknown_command_reply() -> Reply {
    Reply::new("Unsupported command. Try /help.")
}

/// Build the denial reply for a failed access check.
pub fn build_denial_reply(access: Access) -> Reply {
    match access {
        Access::OwnerOnly => Reply::new("🚫 Owner-only command."),
        Access::MinRole(role) => Reply::new(format!("🚫 {}-only command.", role_label(role))),
        // The router never denies Public; callers reaching this arm
        // directly still get a denial, not a panic.
        Access::Public => Reply::new("🚫 You don't have permission to use this command."),
    }
}

/// Build the caller's profile reply sent on /whoami.
pub fn build_whoami_reply(identity: Identity, user: Option<&User>, is_owner: bool) -> Reply {
    let handle = match user.and_then(|u| u.handle.as_deref()) {
        Some(handle) => format!("@{handle}"),
        None => "N/A".to_string(),
    };
    let role = match user {
        Some(user) => user.role.to_string(),
        None => "UNKNOWN".to_string(),
    };
    let owner = if is_owner { "YES" } else { "NO" };
    Reply::new(format!(
        "Your Info\n• ID: {identity}\n• Username: {handle}\n• Role: {role}\n• Owner: {owner}"
    ))
}

/// Build the recent-user listing sent on /users.
pub fn build_user_list_reply(users: &[RecentUser], limit: i64) -> Reply {
    if users.is_empty() {
        return Reply::new("No users found.");
    }
    let mut lines = vec![format!("Latest users (up to {limit})")];
    for user in users {
        let handle = match user.handle.as_deref() {
            Some(handle) => format!("@{handle}"),
            None => "N/A".to_string(),
        };
        lines.push(format!("• {} — {} — {}", user.identity, user.role, handle));
    }
    Reply::new(lines.join("\n"))
}

fn render_command_list() -> String {
    let (public, restricted): (Vec<&CommandSpec>, Vec<&CommandSpec>) = COMMANDS
        .iter()
        .partition(|spec| matches!(spec.access, Access::Public));

    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(public.iter().map(|spec| render_command_line(spec)));
    lines.push(String::new());
    lines.push("Admin/Owner commands:".to_string());
    lines.extend(restricted.iter().map(|spec| render_command_line(spec)));
    lines.join("\n")
}

fn render_command_line(spec: &CommandSpec) -> String {
    format!("• {} — {}", spec.usage, spec.summary)
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Normal => "Normal",
        Role::Vip => "VIP",
        Role::Admin => "Admin",
    }
}
