pub mod command_request;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod registry;
pub mod reply;
pub mod router;

pub use command_request::CommandRequest;
pub use error::{Result, RouterError};
pub use handlers::response_builder::{
    build_command_list_reply, build_denial_reply, build_pong_reply, build_unknown_command_reply,
    build_user_list_reply, build_welcome_reply, build_whoami_reply,
};
pub use handlers::setrole::handle_setrole;
pub use handlers::users::handle_users;
pub use handlers::whoami::handle_whoami;
pub use metrics::Metrics;
pub use registry::{COMMANDS, CommandSpec};
pub use reply::Reply;
pub use router::CommandRouter;
