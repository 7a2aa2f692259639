use crate::{
    CommandRequest, Metrics, Reply, Result, build_command_list_reply, build_denial_reply,
    build_pong_reply, build_unknown_command_reply, build_welcome_reply, handle_setrole,
    handle_users, handle_whoami, registry,
};

use gk_auth::AuthPolicy;
use gk_db::UserRepository;

use log::{error, info, warn};
use sqlx::SqlitePool;
use std::time::Instant;

/// Routes inbound commands to their handlers.
///
/// Every dispatch, regardless of command, first upserts the caller into the
/// user store so the role lookup that follows always has a row to read.
/// Access denials and argument mistakes come back as ordinary replies; only
/// storage failures surface as errors.
#[derive(Clone)]
pub struct CommandRouter {
    pool: SqlitePool,
    policy: AuthPolicy,
    metrics: Metrics,
}

impl CommandRouter {
    pub fn new(pool: SqlitePool, policy: AuthPolicy) -> Self {
        Self {
            pool,
            policy,
            metrics: Metrics::new(),
        }
    }

    /// Dispatch one command and produce the reply for the caller.
    /// Includes:
    /// - Registration of first-time callers
    /// - Access checks against the caller's stored role
    /// - Latency and outcome metrics
    pub async fn dispatch(&self, request: &CommandRequest) -> Result<Reply> {
        let started = Instant::now();
        let command = command_label(&request.name);

        let result = self.dispatch_inner(request).await;
        self.metrics.dispatch_latency(started.elapsed());

        match &result {
            Ok(_) => {
                info!(
                    "/{} from {} completed in {}ms",
                    command,
                    request.caller,
                    started.elapsed().as_millis()
                );
            }
            Err(e) => {
                self.metrics.storage_error();
                error!("/{} from {} failed: {}", command, request.caller, e);
            }
        }

        result
    }

    async fn dispatch_inner(&self, request: &CommandRequest) -> Result<Reply> {
        let users = UserRepository::new(self.pool.clone());

        // Registration precedes everything, including unknown-command handling,
        // so a caller's first message of any shape creates their row.
        let created = users
            .ensure_user(
                request.caller,
                request.display_name.as_deref(),
                request.handle.as_deref(),
            )
            .await?;
        if created {
            self.metrics.user_registered();
            info!("Registered new user {}", request.caller);
        }

        let Some(spec) = registry::find(&request.name) else {
            self.metrics.unknown_command();
            warn!(
                "Unknown command {:?} from {}",
                request.name, request.caller
            );
            return Ok(build_unknown_command_reply());
        };
        self.metrics.command_received(spec.name);

        let role = users.get_role(request.caller).await?;
        if !self.policy.permits(request.caller, role, spec.access) {
            self.metrics.access_denied(spec.name);
            warn!(
                "Denied /{} for {} (role: {:?})",
                spec.name, request.caller, role
            );
            return Ok(build_denial_reply(spec.access));
        }

        let reply = match spec.name {
            "start" => build_welcome_reply(),
            "help" => build_command_list_reply(),
            "ping" => build_pong_reply(),
            "whoami" => handle_whoami(request, &users, &self.policy).await?,
            "users" => handle_users(&users).await?,
            "setrole" => handle_setrole(request, &users).await?,
            other => {
                warn!("Command {:?} has no handler", other);
                build_unknown_command_reply()
            }
        };

        Ok(reply)
    }
}

fn command_label(token: &str) -> &'static str {
    match registry::find(token) {
        Some(spec) => spec.name,
        None => "unknown",
    }
}
