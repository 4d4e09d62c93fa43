//! Authorization gate for providers that need it before showing content.
//!
//! The gate is async so the check can run off the UI thread. Every switch
//! in a pane bumps that pane's generation; a verdict whose ticket is no
//! longer current is discarded, so a slow check for an abandoned switch
//! never attaches a surface.

use async_trait::async_trait;
use trio_common::{PaneSide, ProviderId};

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthVerdict {
    Authorized,
    Denied,
    /// The check itself could not complete.
    Unavailable,
}

impl AuthVerdict {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthVerdict::Authorized)
    }
}

#[async_trait]
pub trait AuthGate: Send + Sync {
    async fn check(&self, provider: &ProviderId) -> AuthVerdict;
}

/// Gate that authorizes everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl AuthGate for AllowAll {
    async fn check(&self, _provider: &ProviderId) -> AuthVerdict {
        AuthVerdict::Authorized
    }
}

/// Identifies one pending switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchTicket {
    pub side: PaneSide,
    pub provider: ProviderId,
    pub generation: u64,
}

/// Per-pane switch counters.
#[derive(Debug, Default)]
pub struct SwitchGenerations {
    counters: [u64; 3],
}

fn slot(side: PaneSide) -> usize {
    match side {
        PaneSide::Left => 0,
        PaneSide::Right => 1,
        PaneSide::Third => 2,
    }
}

impl SwitchGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new switch in `side`, superseding any pending one.
    pub fn issue(&mut self, side: PaneSide, provider: ProviderId) -> SwitchTicket {
        let counter = &mut self.counters[slot(side)];
        *counter += 1;
        SwitchTicket {
            side,
            provider,
            generation: *counter,
        }
    }

    /// Supersede any pending switch in `side` without starting a new one.
    pub fn invalidate(&mut self, side: PaneSide) {
        self.counters[slot(side)] += 1;
    }

    pub fn is_current(&self, ticket: &SwitchTicket) -> bool {
        self.counters[slot(ticket.side)] == ticket.generation
    }
}
