//! Per-request data supplied by the transport layer.

/// Caller information attached to an inbound request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Value of the User-Agent header, stamped into issued access tokens
    pub user_agent: String,
}

impl RequestContext {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}
