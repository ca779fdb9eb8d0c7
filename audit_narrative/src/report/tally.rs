//! Signal classification and summary counts.

use serde::{Deserialize, Serialize};

use crate::signals::{Outcome, SignalKey};

/// How a signal counts in the summary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tally {
    Positive,
    Negative,
    Uncounted,
}

/// Label printed next to each entry in the per-speaker details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positif",
            Sentiment::Negative => "Négatif",
            Sentiment::Neutral => "Neutre",
        }
    }
}

/// Summary-count classification.
///
/// `Sda` counts as positive here but is labelled neutral in the details;
/// see [`sentiment`].
pub fn tally(key: &SignalKey) -> Tally {
    match key.outcome() {
        Some(Outcome::Cool | Outcome::Witcher | Outcome::Sda) => Tally::Positive,
        Some(Outcome::Mauvais) => Tally::Negative,
        _ => Tally::Uncounted,
    }
}

/// Per-entry label classification.
pub fn sentiment(key: &SignalKey) -> Sentiment {
    match key.outcome() {
        Some(Outcome::Cool | Outcome::Witcher) => Sentiment::Positive,
        Some(Outcome::Mauvais) => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// Aggregate counts over a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub positives: usize,
    pub negatives: usize,
}

impl Summary {
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a SignalKey>) -> Self {
        keys.into_iter().fold(Self::default(), |mut summary, key| {
            summary.total += 1;
            match tally(key) {
                Tally::Positive => summary.positives += 1,
                Tally::Negative => summary.negatives += 1,
                Tally::Uncounted => {}
            }
            summary
        })
    }

    /// Entries that count as neither positive nor negative.
    pub fn uncounted(&self) -> usize {
        self.total - self.positives - self.negatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        assert_eq!(tally(&SignalKey::parse("ayadi_cool")), Tally::Positive);
        assert_eq!(tally(&SignalKey::parse("lebot_witcher")), Tally::Positive);
        assert_eq!(tally(&SignalKey::parse("lebot_sda")), Tally::Positive);
        assert_eq!(tally(&SignalKey::parse("roy_mauvais")), Tally::Negative);
        assert_eq!(tally(&SignalKey::parse("roy_hesite")), Tally::Uncounted);
        assert_eq!(tally(&SignalKey::parse("roy")), Tally::Uncounted);
        assert_eq!(tally(&SignalKey::parse("roy_tres_cool")), Tally::Positive);
        assert_eq!(tally(&SignalKey::parse("roy_vraiment_mauvais")), Tally::Negative);
        assert_eq!(tally(&SignalKey::parse("roy_cool_hesite")), Tally::Uncounted);
    }

    #[test]
    fn test_sda_is_labelled_neutral() {
        assert_eq!(sentiment(&SignalKey::parse("lebot_sda")), Sentiment::Neutral);
        assert_eq!(sentiment(&SignalKey::parse("lebot_witcher")), Sentiment::Positive);
        assert_eq!(sentiment(&SignalKey::parse("bryan_mauvais")), Sentiment::Negative);
        assert_eq!(Sentiment::Negative.label(), "Négatif");
    }

    #[test]
    fn test_summary_counts() {
        let keys: Vec<SignalKey> = ["ayadi_cool", "bryan_mauvais", "lebot_sda", "ilias_autre"]
            .into_iter()
            .map(SignalKey::parse)
            .collect();

        let summary = Summary::from_keys(&keys);
        assert_eq!(
            summary,
            Summary {
                total: 4,
                positives: 2,
                negatives: 1
            }
        );
        assert_eq!(summary.uncounted(), 1);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(Summary::from_keys(&[]), Summary::default());
    }
}
