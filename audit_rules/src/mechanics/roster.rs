//! NPC completion tracking: who has been interviewed, and whether everyone has.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::entities::NpcId;

/// Why a talk was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The entity is not a tracked NPC.
    NotEligible,
    /// No population source has reported a roster size yet.
    RosterUnknown,
    /// Every roster slot is already taken by a distinct NPC.
    RosterFull,
}

/// Result of registering a talk with an NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TalkOutcome {
    Ignored(IgnoreReason),
    DuplicateIgnored,
    Recorded { count: usize, total: usize },
    /// This talk completed the roster and unlocked the ending.
    RosterCompleted,
}

/// Tracks distinct NPCs talked to against the roster size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcTracker {
    total: usize,
    talked: HashSet<NpcId>,
    all_talked: bool,
}

impl NpcTracker {
    /// Create an empty tracker with an unknown roster size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker for a roster of `total` NPCs.
    pub fn with_roster_size(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Update the roster size reported by the NPC population source.
    ///
    /// A size below the number of NPCs already talked to is raised to that
    /// number, so `talked <= total` always holds. A roster that shrinks onto
    /// the talked count unlocks the ending.
    pub fn set_roster_size(&mut self, total: usize) {
        let talked = self.talked.len();
        if total < talked {
            warn!(reported = total, talked, "Roster size below talked count, keeping talked count");
            self.total = talked;
        } else {
            self.total = total;
        }

        if self.total > 0 && self.talked.len() == self.total && !self.all_talked {
            self.all_talked = true;
            info!(total = self.total, "All NPCs contacted, ending unlocked");
        }
    }

    /// Register that the player talked to `npc`.
    pub fn register_talk(&mut self, npc: &NpcId, is_eligible: bool) -> TalkOutcome {
        if !is_eligible {
            debug!(npc = %npc, "Talk ignored, not a tracked NPC");
            return TalkOutcome::Ignored(IgnoreReason::NotEligible);
        }

        if self.talked.contains(npc) {
            debug!(npc = %npc, "Talk ignored, NPC already contacted");
            return TalkOutcome::DuplicateIgnored;
        }

        if self.total == 0 {
            warn!(npc = %npc, "Roster size unknown, talk not recorded");
            return TalkOutcome::Ignored(IgnoreReason::RosterUnknown);
        }

        if self.talked.len() >= self.total {
            warn!(npc = %npc, total = self.total, "Roster already full, talk not recorded");
            return TalkOutcome::Ignored(IgnoreReason::RosterFull);
        }

        self.talked.insert(npc.clone());
        let count = self.talked.len();
        info!(npc = %npc, count, total = self.total, "Talked to NPC");

        if count == self.total && !self.all_talked {
            self.all_talked = true;
            info!(total = self.total, "All NPCs contacted, ending unlocked");
            return TalkOutcome::RosterCompleted;
        }

        TalkOutcome::Recorded {
            count,
            total: self.total,
        }
    }

    /// Whether the full roster has been contacted. Never reverts once set.
    pub fn can_launch_ending(&self) -> bool {
        self.all_talked
    }

    pub fn has_talked_to(&self, npc: &NpcId) -> bool {
        self.talked.contains(npc)
    }

    /// `(talked, total)` counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.talked.len(), self.total)
    }

    pub fn roster_size(&self) -> usize {
        self.total
    }
}
