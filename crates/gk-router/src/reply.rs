use serde::{Deserialize, Serialize};

/// Plain-text reply destined for the caller's chat.
///
/// Replies carry no markup. Formatting for a particular chat platform is the
/// transport adapter's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
