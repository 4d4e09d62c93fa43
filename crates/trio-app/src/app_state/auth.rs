//! Authorization checks for gated providers.
//!
//! Checks run on the tokio runtime; verdicts come back over an mpsc channel
//! and are applied on the next poll.

use std::collections::HashSet;

use async_trait::async_trait;
use trio_common::ProviderId;
use trio_webview::{AuthGate, AuthVerdict};

use super::core::TrioApp;

/// Comma-separated provider ids the local gate refuses.
pub(super) const DENIED_PROVIDERS_ENV: &str = "TRIO_DENIED_PROVIDERS";

/// Gate driven by a deny list read once at startup.
#[derive(Debug, Default)]
pub(super) struct EnvAuthGate {
    denied: HashSet<String>,
}

impl EnvAuthGate {
    pub(super) fn from_env() -> Self {
        std::env::var(DENIED_PROVIDERS_ENV)
            .map(|list| Self::from_list(&list))
            .unwrap_or_default()
    }

    pub(super) fn from_list(list: &str) -> Self {
        let denied = list
            .split(',')
            .map(|id| id.trim().to_ascii_lowercase())
            .filter(|id| !id.is_empty())
            .collect();
        Self { denied }
    }
}

#[async_trait]
impl AuthGate for EnvAuthGate {
    async fn check(&self, provider: &ProviderId) -> AuthVerdict {
        if self.denied.contains(&provider.as_str().to_ascii_lowercase()) {
            AuthVerdict::Denied
        } else {
            AuthVerdict::Authorized
        }
    }
}

impl TrioApp {
    /// Hand every queued gated switch to the runtime.
    pub(super) fn spawn_auth_checks(&mut self) {
        let Some(coordinator) = self.coordinator.as_mut() else {
            return;
        };
        let tickets = coordinator.take_auth_requests();
        if tickets.is_empty() {
            return;
        }

        let Some(rt) = self.tokio_runtime.as_ref() else {
            for ticket in tickets {
                tracing::warn!(provider = %ticket.provider, "No runtime for authorization check");
                coordinator.complete_auth(ticket, AuthVerdict::Unavailable);
            }
            return;
        };

        for ticket in tickets {
            tracing::debug!(
                side = %ticket.side,
                provider = %ticket.provider,
                generation = ticket.generation,
                "Authorization check started"
            );
            let gate = self.gate.clone();
            let tx = self.auth_tx.clone();
            rt.spawn(async move {
                let verdict = gate.check(&ticket.provider).await;
                let _ = tx.send((ticket, verdict));
            });
        }
    }

    /// Apply verdicts that arrived since the last poll.
    pub(super) fn poll_auth(&mut self) {
        let Some(coordinator) = self.coordinator.as_mut() else {
            return;
        };
        while let Ok((ticket, verdict)) = self.auth_rx.try_recv() {
            let provider = ticket.provider.clone();
            if !coordinator.complete_auth(ticket, verdict) {
                tracing::debug!(%provider, ?verdict, "Dropped stale authorization verdict");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_gate_authorizes_everything() {
        let gate = EnvAuthGate::default();
        assert_eq!(
            gate.check(&ProviderId::from("perplexity")).await,
            AuthVerdict::Authorized
        );
    }

    #[tokio::test]
    async fn listed_providers_are_denied() {
        let gate = EnvAuthGate::from_list(" Perplexity, ,claude");
        assert_eq!(
            gate.check(&ProviderId::from("perplexity")).await,
            AuthVerdict::Denied
        );
        assert_eq!(
            gate.check(&ProviderId::from("claude")).await,
            AuthVerdict::Denied
        );
        assert_eq!(
            gate.check(&ProviderId::from("gemini")).await,
            AuthVerdict::Authorized
        );
    }

    #[test]
    fn blank_entries_are_ignored() {
        let gate = EnvAuthGate::from_list(",,  ,");
        assert!(gate.denied.is_empty());
    }
}
