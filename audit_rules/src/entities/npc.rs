//! NPC definitions and dialogue timeline routing.

use serde::{Deserialize, Serialize};

use super::NpcId;

/// The kinds of NPC present in the audited office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcKind {
    Rmouque,
    Ayadi,
    Lebot,
    Roy,
    /// Hands out the final timeline once everyone has been interviewed.
    Directeur,
    Haristoy,
}

/// An NPC as the rules see it: identity, kind and an optional forced timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub kind: NpcKind,
    pub name: String,
    /// Timeline set directly on the NPC; wins over the per-kind default.
    pub forced_timeline: Option<String>,
}

impl Npc {
    /// Create a new NPC at the given scene path.
    pub fn new(path: impl Into<String>, kind: NpcKind, name: impl Into<String>) -> Self {
        Self {
            id: NpcId::from_path(path),
            kind,
            name: name.into(),
            forced_timeline: None,
        }
    }

    /// Force a specific timeline for this NPC.
    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.forced_timeline = Some(timeline.into());
        self
    }
}

/// Dialogue timelines to start when the player talks to an NPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineTable {
    /// Final timeline, started by the director or the ending input.
    #[serde(default = "default_director_end")]
    pub director_end: String,

    #[serde(default = "default_rmouque")]
    pub rmouque: String,

    /// Timeline shared by every other kind.
    #[serde(default = "default_common")]
    pub common: String,
}

impl Default for TimelineTable {
    fn default() -> Self {
        Self {
            director_end: default_director_end(),
            rmouque: default_rmouque(),
            common: default_common(),
        }
    }
}

impl TimelineTable {
    /// Resolve the timeline for an NPC kind.
    ///
    /// The director switches to the end timeline once the ending is unlocked;
    /// otherwise a non-empty forced timeline wins over the per-kind default.
    /// Returns `None` when the resolved name is empty.
    pub fn timeline_for<'a>(
        &'a self,
        kind: NpcKind,
        forced: Option<&'a str>,
        ending_unlocked: bool,
    ) -> Option<&'a str> {
        let name = if kind == NpcKind::Directeur && ending_unlocked {
            self.director_end.as_str()
        } else if let Some(forced) = forced.filter(|t| !t.is_empty()) {
            forced
        } else {
            match kind {
                NpcKind::Rmouque => self.rmouque.as_str(),
                _ => self.common.as_str(),
            }
        };

        (!name.is_empty()).then_some(name)
    }

    /// Resolve the timeline for a concrete NPC.
    pub fn timeline_for_npc<'a>(&'a self, npc: &'a Npc, ending_unlocked: bool) -> Option<&'a str> {
        self.timeline_for(npc.kind, npc.forced_timeline.as_deref(), ending_unlocked)
    }
}

fn default_director_end() -> String {
    "timeline_director_end".to_string()
}

fn default_rmouque() -> String {
    "Ilias_responsable_informatique".to_string()
}

fn default_common() -> String {
    "monsieurAyadi".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timelines() {
        let table = TimelineTable::default();

        assert_eq!(
            table.timeline_for(NpcKind::Rmouque, None, false),
            Some("Ilias_responsable_informatique")
        );
        assert_eq!(table.timeline_for(NpcKind::Roy, None, false), Some("monsieurAyadi"));
        assert_eq!(table.timeline_for(NpcKind::Directeur, None, false), Some("monsieurAyadi"));
    }

    #[test]
    fn test_director_switches_to_end_timeline() {
        let table = TimelineTable::default();
        let director = Npc::new("/root/Bureau/Directeur", NpcKind::Directeur, "Directeur")
            .with_timeline("directeur_intro");

        assert_eq!(table.timeline_for_npc(&director, false), Some("directeur_intro"));
        assert_eq!(table.timeline_for_npc(&director, true), Some("timeline_director_end"));
    }

    #[test]
    fn test_forced_timeline_ignored_when_empty() {
        let table = TimelineTable::default();
        let npc = Npc::new("/root/Bureau/Lebot", NpcKind::Lebot, "Lebot").with_timeline("");

        assert_eq!(table.timeline_for_npc(&npc, true), Some("monsieurAyadi"));
    }

    #[test]
    fn test_empty_resolution_is_none() {
        let table = TimelineTable {
            common: String::new(),
            ..Default::default()
        };

        assert_eq!(table.timeline_for(NpcKind::Haristoy, None, false), None);
    }
}
