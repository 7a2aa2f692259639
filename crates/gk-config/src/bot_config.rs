use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BotConfig {
    /// Identity of the operator. Bypasses every role check, so there is
    /// no usable zero default: the value must be configured explicitly.
    pub owner_id: i64,
}

impl BotConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.owner_id == 0 {
            return Err(ConfigError::bot(
                "bot.owner_id must be set to the operator's identity (non-zero)",
            ));
        }

        Ok(())
    }
}
