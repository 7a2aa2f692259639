use gk_core::Identity;
use serde::{Deserialize, Serialize};

/// An inbound command from a chat transport, already split into its parts.
///
/// The transport adapter is responsible for tokenising the raw message; the
/// router never sees the original line. `display_name` and `handle` carry the
/// caller's current profile so the user record can be refreshed on every
/// interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Platform-assigned identifier of the caller.
    pub caller: Identity,
    /// Current display name, if the transport knows one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Current handle (without the `@` prefix), if the transport knows one.
    #[serde(default)]
    pub handle: Option<String>,
    /// Command token, with or without the leading slash.
    pub name: String,
    /// Whitespace-split arguments after the command token.
    #[serde(default)]
    pub args: Vec<String>,
}
