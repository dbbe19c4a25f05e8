use std::fmt;

use crate::config::ToggleConfig;
use crate::error::{Result, ToggleError};
use crate::models::{HttpReply, ToggleRequest};

/// Sends one form-encoded POST and resolves once a reply arrives.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, url: &str, body: String) -> Result<HttpReply>;
}

/// Reloads the hosting page.
pub trait Reloader {
    fn reload(&self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Reloaded { status: u16 },
    Rejected { status: u16, message: Option<String> },
    Failed(ToggleError),
}

impl ToggleOutcome {
    pub fn reloaded(&self) -> bool {
        matches!(self, ToggleOutcome::Reloaded { .. })
    }
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleOutcome::Reloaded { status } => write!(f, "toggled ({}), reloading page", status),
            ToggleOutcome::Rejected { status, message: Some(message) } => {
                write!(f, "toggle rejected with status {}: {}", status, message)
            }
            ToggleOutcome::Rejected { status, message: None } => {
                write!(f, "toggle rejected with status {}", status)
            }
            ToggleOutcome::Failed(e) => write!(f, "toggle failed: {}", e),
        }
    }
}

pub struct ToggleClient<T, R> {
    config: ToggleConfig,
    transport: T,
    reloader: R,
}

impl<T: Transport, R: Reloader> ToggleClient<T, R> {
    pub fn new(config: ToggleConfig, transport: T, reloader: R) -> Self {
        Self { config, transport, reloader }
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn reloader(&self) -> &R {
        &self.reloader
    }

    /// POSTs `environment`/`toggle` to the backend once. Never reloads.
    pub async fn send(&self, environment: &str, toggle: &str) -> Result<HttpReply> {
        let request = ToggleRequest::new(environment, toggle);
        self.transport
            .post_form(&self.config.endpoint(), request.form_body())
            .await
    }

    /// Like [`ToggleClient::toggle`] but reports what happened instead of
    /// staying silent. Failures are surfaced here only; the page sees the
    /// same behavior either way.
    pub async fn try_toggle(&self, environment: &str, toggle: &str) -> ToggleOutcome {
        let reply = match self.send(environment, toggle).await {
            Ok(reply) => reply,
            Err(e) => return ToggleOutcome::Failed(e),
        };

        if !reply.is_success() {
            let message = reply.envelope().and_then(|envelope| envelope.message);
            return ToggleOutcome::Rejected { status: reply.status, message };
        }

        match self.reloader.reload() {
            Ok(()) => ToggleOutcome::Reloaded { status: reply.status },
            Err(e) => ToggleOutcome::Failed(e),
        }
    }

    /// Fire-and-forget toggle: one POST, then one page reload if the backend
    /// answered successfully. Failures produce no reload and nothing else.
    pub async fn toggle(&self, environment: &str, toggle: &str) {
        self.try_toggle(environment, toggle).await;
    }
}
