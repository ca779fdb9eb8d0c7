//! End-of-session report - what the player sees once the audit is over.
//!
//! Report generation is a pure function of the ledger, the catalog and the
//! final fear state:
//! 1. **Summary**: count total, positive and negative signals
//! 2. **Fear**: print the final gauge, rounded to whole numbers
//! 3. **Grouping**: bucket catalogued signals by speaker
//! 4. **Details**: one section per speaker, speakers in alphabetical order,
//!    entries in arrival order
//! 5. **Closing**: two fixed sentences
//!
//! The output uses the `[b]`, `[i]` and `[center]` markers understood by the
//! report display. Identical inputs always render identical text.

mod tally;

pub use tally::*;

use audit_rules::FearState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::signals::{SignalCatalog, SignalKey};

const TITLE: &str = "[center][b]RAPPORT D'INTERACTIONS[/b][/center]";

/// Printed instead of the details when no catalogued signal was recorded.
pub const NO_DATA: &str = "Aucune donnée disponible. Le candidat est resté muet.";

const CLOSING: [&str; 2] = [
    "Merci d'avoir joué à notre jeu! Notre but était de faire comprendre l'importance de bonnes relations humaines pour le bon déroulement d'un audit.",
    "Si vous ne deviez retenir qu'une seule phrase, ce serait: Mettre en confiance les audités pour obtenir des informations fiables  et aider l'organisme audité est primordial.",
];

/// Render the report text for a session.
pub fn generate(ledger: &[SignalKey], catalog: &SignalCatalog, fear: &FearState) -> String {
    Report::build(ledger, catalog, fear).render()
}

/// One signal in a speaker's section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub key: SignalKey,
    pub sentiment: Sentiment,
    pub text: String,
}

/// All entries for one speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSection {
    pub speaker: String,
    pub entries: Vec<ReportEntry>,
}

impl SpeakerSection {
    /// Speaker name with its first letter upper-cased.
    pub fn heading(&self) -> String {
        let mut chars = self.speaker.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// The structured report, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub fear: FearState,
    /// Sorted by speaker name.
    pub sections: Vec<SpeakerSection>,
}

impl Report {
    /// Classify and group the ledger.
    ///
    /// Keys with no catalog text still count in the summary but get no
    /// detail entry.
    pub fn build(ledger: &[SignalKey], catalog: &SignalCatalog, fear: &FearState) -> Self {
        let mut by_speaker: BTreeMap<&str, Vec<ReportEntry>> = BTreeMap::new();

        for key in ledger {
            if let Some(text) = catalog.lookup(key) {
                by_speaker.entry(key.speaker()).or_default().push(ReportEntry {
                    key: key.clone(),
                    sentiment: sentiment(key),
                    text: text.to_string(),
                });
            }
        }

        Self {
            summary: Summary::from_keys(ledger),
            fear: *fear,
            sections: by_speaker
                .into_iter()
                .map(|(speaker, entries)| SpeakerSection {
                    speaker: speaker.to_string(),
                    entries,
                })
                .collect(),
        }
    }

    /// Render the report as display text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(TITLE);
        out.push_str("\n\n");

        out.push_str(&format!(
            "[b]Synthèse :[/b]\n- Interactions enregistrées : {}\n- Interactions positives : {}\n- Interactions négatives : {}\n\n",
            self.summary.total, self.summary.positives, self.summary.negatives
        ));

        out.push_str(&format!(
            "[b]Niveau de peur final :[/b] {}/{}\n\n",
            whole(self.fear.current),
            whole(self.fear.max)
        ));

        if self.sections.is_empty() {
            out.push_str(NO_DATA);
            out.push('\n');
            return out;
        }

        out.push_str("[b]Détails par interlocuteur :[/b]\n\n");
        for section in &self.sections {
            out.push_str(&format!("[b]{}[/b]\n", section.heading()));
            for entry in &section.entries {
                out.push_str(&format!("[i]{}[/i] : {}\n\n", entry.sentiment.label(), entry.text));
            }
            out.push_str("---\n\n");
        }

        out.push('\n');
        for line in CLOSING {
            out.push_str(line);
            out.push('\n');
        }

        out
    }
}

/// Round half away from zero and print without decimals. Negative zero
/// prints as `0`.
fn whole(value: f32) -> String {
    format!("{}", value.round() + 0.0)
}
