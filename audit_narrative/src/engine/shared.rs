//! One mutex around the whole engine, for hosts that deliver events from
//! more than one thread.
//!
//! The lock covers the ledger, fear gauge and roster together so that no
//! caller can observe one updated without the others.

use parking_lot::Mutex;
use std::sync::Arc;

use super::NarrativeEngine;
use crate::signals::RecordOutcome;

/// Cloneable handle to a session engine guarded by a single lock.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<NarrativeEngine>>,
}

impl SharedEngine {
    pub fn new(engine: NarrativeEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut NarrativeEngine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }

    pub fn record(&self, raw: &str) -> RecordOutcome {
        self.with(|engine| engine.record(raw))
    }

    pub fn generate_report(&self) -> String {
        self.with(|engine| engine.generate_report())
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(NarrativeEngine::with_defaults())
    }
}
