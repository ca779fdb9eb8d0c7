//! Signal ledger - the session's accepted signals in arrival order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use super::{SignalCatalog, SignalKey};

/// What happened to a raw signal handed to [`SignalLedger::record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordOutcome {
    Accepted,
    DuplicateIgnored,
    /// Not in the catalog and not the control key; dropped.
    UnknownIgnored,
    /// The end-of-session control key. The ledger is left untouched and the
    /// caller switches to the report screen.
    ControlSignal(SignalKey),
}

/// Append-only, deduplicating store of recognized signals.
#[derive(Debug, Clone)]
pub struct SignalLedger {
    control_key: SignalKey,

    /// Accepted keys in arrival order.
    order: Vec<SignalKey>,

    /// Membership index over `order`.
    seen: HashSet<SignalKey>,
}

impl Default for SignalLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalLedger {
    /// Create an empty ledger using the default control key.
    pub fn new() -> Self {
        Self::with_control_key(SignalKey::end_report())
    }

    /// Create an empty ledger with a custom control key.
    pub fn with_control_key(control_key: SignalKey) -> Self {
        Self {
            control_key,
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Normalize a raw signal and store it if the catalog recognizes it.
    pub fn record(&mut self, raw: &str, catalog: &SignalCatalog) -> RecordOutcome {
        let key = SignalKey::parse(raw);
        debug!(raw, key = %key, "Dialogue signal received");

        if key == self.control_key {
            return RecordOutcome::ControlSignal(key);
        }

        if !catalog.contains(&key) {
            warn!(key = %key, "Unknown signal, not in catalog");
            return RecordOutcome::UnknownIgnored;
        }

        if self.seen.contains(&key) {
            debug!(key = %key, "Duplicate signal ignored");
            return RecordOutcome::DuplicateIgnored;
        }

        debug!(key = %key, position = self.order.len(), "Signal recorded");
        self.seen.insert(key.clone());
        self.order.push(key);
        RecordOutcome::Accepted
    }

    /// Accepted keys in arrival order.
    pub fn snapshot(&self) -> &[SignalKey] {
        &self.order
    }

    pub fn contains(&self, key: &SignalKey) -> bool {
        self.seen.contains(key)
    }

    pub fn control_key(&self) -> &SignalKey {
        &self.control_key
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalKey> {
        self.order.iter()
    }
}
