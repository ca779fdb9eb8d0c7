//! Session coordinator - owns every piece of narrative state for one play session.
//!
//! There is exactly one engine per session. It is constructed explicitly and
//! handed to the collaborators that need it; nothing here is global. Hosts
//! that deliver events from several threads wrap it in [`SharedEngine`].

mod shared;

pub use shared::*;

use audit_rules::{
    FearController, FearObserver, FearState, FearTransition, Npc, NpcId, NpcTracker, SessionId,
    TalkOutcome, TimelineTable,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::NarrativeConfig;
use crate::error::{NarrativeError, Result};
use crate::report;
use crate::signals::{RecordOutcome, SignalCatalog, SignalKey, SignalLedger};

/// Answer to the ending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndingRequest {
    /// Start this timeline.
    Launch { timeline: String },
    /// Not every NPC has been interviewed yet.
    Locked,
    /// A dialogue is already playing.
    DialogueBusy,
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionId,
    /// Ledger keys in arrival order.
    pub signals: Vec<SignalKey>,
    pub fear: FearState,
    pub talked: usize,
    pub roster_size: usize,
    pub ending_unlocked: bool,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The narrative engine for one session.
#[derive(Debug)]
pub struct NarrativeEngine {
    session: SessionId,
    catalog: SignalCatalog,
    ledger: SignalLedger,
    fear: FearController,
    npcs: NpcTracker,
    timelines: TimelineTable,
}

impl NarrativeEngine {
    /// Build an engine from configuration.
    pub fn new(config: &NarrativeConfig) -> Result<Self> {
        let control_key = config.control_key()?;
        let catalog = config.catalog()?;
        if catalog.contains(&control_key) {
            return Err(NarrativeError::ReservedCatalogKey(control_key.to_string()));
        }

        Ok(Self {
            session: SessionId::new(),
            catalog,
            ledger: SignalLedger::with_control_key(control_key),
            fear: FearController::from_config(&config.rules.fear)?,
            npcs: NpcTracker::new(),
            timelines: config.rules.timelines.clone(),
        }
        .started())
    }

    /// Build an engine with the built-in catalog and default rules.
    pub fn with_defaults() -> Self {
        Self {
            session: SessionId::new(),
            catalog: SignalCatalog::builtin(),
            ledger: SignalLedger::new(),
            fear: FearController::default(),
            npcs: NpcTracker::new(),
            timelines: TimelineTable::default(),
        }
        .started()
    }

    fn started(self) -> Self {
        info!(
            session = %self.session,
            signals = self.catalog.len(),
            fear = self.fear.current(),
            "Narrative session started"
        );
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// Ingest a raw signal from dialogue playback.
    pub fn record(&mut self, raw: &str) -> RecordOutcome {
        let outcome = self.ledger.record(raw, &self.catalog);
        if let RecordOutcome::ControlSignal(key) = &outcome {
            info!(session = %self.session, key = %key, "End of session requested");
        }
        outcome
    }

    pub fn ledger(&self) -> &SignalLedger {
        &self.ledger
    }

    pub fn catalog(&self) -> &SignalCatalog {
        &self.catalog
    }

    pub fn set_fear(&mut self, value: f32) -> FearTransition {
        self.fear.set_fear(value)
    }

    pub fn add_fear(&mut self, delta: f32) -> FearTransition {
        self.fear.add_fear(delta)
    }

    pub fn fear_state(&self) -> FearState {
        self.fear.state()
    }

    /// Register the fear display. Replaces any previous display.
    pub fn register_fear_observer(&mut self, observer: impl FearObserver + 'static) {
        self.fear.register_observer(observer);
    }

    pub fn clear_fear_observer(&mut self) -> bool {
        self.fear.clear_observer()
    }

    /// Report the size of the live NPC population.
    pub fn set_roster_size(&mut self, total: usize) {
        self.npcs.set_roster_size(total);
    }

    pub fn register_talk(&mut self, npc: &NpcId, is_eligible: bool) -> TalkOutcome {
        self.npcs.register_talk(npc, is_eligible)
    }

    pub fn can_launch_ending(&self) -> bool {
        self.npcs.can_launch_ending()
    }

    /// `(talked, total)` counts.
    pub fn talk_progress(&self) -> (usize, usize) {
        self.npcs.progress()
    }

    /// Timeline to start when the player talks to `npc`.
    pub fn timeline_for<'a>(&'a self, npc: &'a Npc) -> Option<&'a str> {
        self.timelines.timeline_for_npc(npc, self.npcs.can_launch_ending())
    }

    /// Decide whether the ending input may start the final timeline.
    pub fn request_ending(&self, dialogue_active: bool) -> EndingRequest {
        if !self.npcs.can_launch_ending() {
            let (talked, total) = self.npcs.progress();
            info!(talked, total, "Ending input ignored, not everyone has been interviewed");
            return EndingRequest::Locked;
        }

        if dialogue_active {
            return EndingRequest::DialogueBusy;
        }

        info!(session = %self.session, timeline = %self.timelines.director_end, "Launching final timeline");
        EndingRequest::Launch {
            timeline: self.timelines.director_end.clone(),
        }
    }

    /// Render the end-of-session report.
    pub fn generate_report(&self) -> String {
        report::generate(self.ledger.snapshot(), &self.catalog, &self.fear.state())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (talked, roster_size) = self.npcs.progress();
        SessionSnapshot {
            session: self.session,
            signals: self.ledger.snapshot().to_vec(),
            fear: self.fear.state(),
            talked,
            roster_size,
            ending_unlocked: self.npcs.can_launch_ending(),
        }
    }
}

impl Default for NarrativeEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
