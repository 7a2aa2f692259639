use gk_auth::Access;
use gk_core::Role;

/// Static description of a single command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Bare command name, without the leading slash.
    pub name: &'static str,
    /// Access requirement checked before the handler runs.
    pub access: Access,
    /// Invocation line shown in command listings.
    pub usage: &'static str,
    /// One-line description shown in command listings.
    pub summary: &'static str,
}

/// Every command the router knows about, in listing order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "start",
        access: Access::Public,
        usage: "/start",
        summary: "Register and show this command list",
    },
    CommandSpec {
        name: "help",
        access: Access::Public,
        usage: "/help",
        summary: "Show the command list",
    },
    CommandSpec {
        name: "ping",
        access: Access::Public,
        usage: "/ping",
        summary: "Check that the bot is alive",
    },
    CommandSpec {
        name: "whoami",
        access: Access::Public,
        usage: "/whoami",
        summary: "Show your id, handle and role",
    },
    CommandSpec {
        name: "users",
        access: Access::MinRole(Role::Admin),
        usage: "/users",
        summary: "List recently registered users",
    },
    CommandSpec {
        name: "setrole",
        access: Access::OwnerOnly,
        usage: "/setrole <user_id> <NORMAL|VIP|ADMIN>",
        summary: "Change a user's role",
    },
];

/// Look up a command by its token as received from the transport.
///
/// The token is trimmed, an optional leading slash is stripped and the match
/// is case-insensitive, so `/Ping`, `ping` and ` /PING ` all resolve to the
/// same entry.
pub fn find(token: &str) -> Option<&'static CommandSpec> {
    let token = token.trim();
    let token = token.strip_prefix('/').unwrap_or(token);
    COMMANDS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(token))
}
